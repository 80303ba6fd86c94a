use thiserror::Error;

/// Failure to obtain the dataset. This is the only failure the widget
/// recognizes; every later stage is total over its input.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to fetch dataset from {location}: {message}")]
    Fetch { location: String, message: String },

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Dataset is not a collection (found {found})")]
    NotACollection { found: &'static str },
}

impl LoadError {
    pub fn fetch(location: impl Into<String>, message: impl ToString) -> Self {
        LoadError::Fetch {
            location: location.into(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid card template: {0}")]
    Template(#[from] minijinja::Error),
}
