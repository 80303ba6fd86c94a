//! Render result lists to HTML.

use minijinja::{Environment, context};

use crate::config::DisplayOptions;
use crate::error::RenderError;
use crate::record::Record;

const CARD_TEMPLATE: &str = include_str!("../templates/card.html.jinja");
const EMPTY_TEMPLATE: &str = include_str!("../templates/empty.html.jinja");

/// Turns a result list into the full contents of the results container.
///
/// Output is a complete replacement: callers swap it in wholesale rather than
/// patching what was there before.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
    options: DisplayOptions,
}

impl Renderer {
    pub fn new(options: &DisplayOptions) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        // The `.html` names turn on HTML auto-escaping.
        env.add_template("card.html", CARD_TEMPLATE)?;
        env.add_template("empty.html", EMPTY_TEMPLATE)?;

        Ok(Self {
            env,
            options: options.clone(),
        })
    }

    pub fn render(&self, results: &[&Record]) -> Result<String, RenderError> {
        if results.is_empty() {
            return self.render_empty();
        }

        let template = self.env.get_template("card.html")?;
        let cards = results
            .iter()
            .map(|record| {
                template.render(context! {
                    title => record.title,
                    image => record.primary_image_url,
                    url => record.url,
                    link_text => self.options.link_text,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(cards.join("\n"))
    }

    pub fn render_empty(&self) -> Result<String, RenderError> {
        let html = self
            .env
            .get_template("empty.html")?
            .render(context! { message => self.options.empty_message })?;
        Ok(html)
    }
}
