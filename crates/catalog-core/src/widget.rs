//! The search widget: owns the loaded catalog and the current query, and
//! drives a host page through [`DisplaySurface`].

use log::{debug, error, warn};

use crate::config::CatalogConfig;
use crate::error::{LoadError, RenderError};
use crate::fuzzy::FuzzyIndex;
use crate::index::SearchIndex;
use crate::loader::{DatasetSource, load_working_set};
use crate::query::run_query;
use crate::record::{Record, WorkingSet};
use crate::render::Renderer;

/// The part of the host page the widget talks to: a text input it reads on
/// every trigger, and a container whose contents it replaces.
pub trait DisplaySurface {
    fn query_text(&self) -> String;

    fn replace_contents(&mut self, markup: &str);
}

#[derive(Debug)]
pub enum WidgetState<I> {
    /// No dataset yet. A failed load leaves the widget here for good.
    Unloaded,
    Loaded { working_set: WorkingSet, index: I },
}

#[derive(Debug)]
pub struct CatalogWidget<I: SearchIndex = FuzzyIndex> {
    config: CatalogConfig,
    renderer: Renderer,
    state: WidgetState<I>,
    query: String,
}

impl<I: SearchIndex> CatalogWidget<I> {
    pub fn new(config: CatalogConfig) -> Result<Self, RenderError> {
        let renderer = Renderer::new(&config.display)?;
        Ok(Self {
            config,
            renderer,
            state: WidgetState::Unloaded,
            query: String::new(),
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn state(&self) -> &WidgetState<I> {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, WidgetState::Loaded { .. })
    }

    /// The last query read from the surface, untrimmed.
    pub fn current_query(&self) -> &str {
        &self.query
    }

    /// Index `working_set` and start accepting queries. The catalog is built
    /// once; later calls are ignored.
    pub fn initialize(&mut self, working_set: WorkingSet) {
        if self.is_loaded() {
            warn!("Catalog already loaded, ignoring new working set");
            return;
        }
        let index = I::build(&working_set, &self.config.search);
        self.state = WidgetState::Loaded { working_set, index };
    }

    /// Load the dataset from `source`, then show the whole catalog. A widget
    /// that is already loaded does not fetch again and leaves the surface as
    /// it is.
    ///
    /// On failure the error is logged, the surface is left alone and the
    /// widget stays unloaded. The error is still returned so callers can
    /// inspect it.
    pub async fn mount<S, D>(&mut self, source: &S, surface: &mut D) -> Result<(), LoadError>
    where
        S: DatasetSource,
        D: DisplaySurface,
    {
        if self.is_loaded() {
            warn!("Catalog already loaded, not fetching {}", source.location());
            return Ok(());
        }

        let working_set = match load_working_set(source).await {
            Ok(working_set) => working_set,
            Err(e) => {
                error!("Error loading catalog data: {e}");
                return Err(e);
            }
        };

        self.initialize(working_set);
        self.refresh(surface);
        Ok(())
    }

    /// Records for `text`, or `None` before the catalog has loaded.
    pub fn search(&self, text: &str) -> Option<Vec<&Record>> {
        match &self.state {
            WidgetState::Unloaded => None,
            WidgetState::Loaded { working_set, index } => {
                Some(run_query(text, working_set, index))
            }
        }
    }

    /// Handle a search action: read the query from the surface and replace
    /// its contents with the results.
    pub fn trigger<D: DisplaySurface>(&mut self, surface: &mut D) {
        if !self.is_loaded() {
            debug!("Search triggered before catalog loaded");
            return;
        }
        self.query = surface.query_text();
        self.refresh(surface);
    }

    fn refresh<D: DisplaySurface>(&self, surface: &mut D) {
        let Some(results) = self.search(&self.query) else {
            return;
        };
        match self.renderer.render(&results) {
            Ok(markup) => surface.replace_contents(&markup),
            Err(e) => error!("Failed to render results: {e}"),
        }
    }
}
