//! Client-side catalog search.
//!
//! Loads a static collection of product records, keeps the ones that can be
//! displayed, indexes their titles for approximate matching, and renders the
//! records matching a query as HTML cards.
//!
//! The pieces are usable on their own ([`filter_records`], [`FuzzyIndex`],
//! [`run_query`], [`Renderer`]) or together through [`CatalogWidget`], which
//! owns the loaded state and talks to a host page through [`DisplaySurface`].

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod loader;
pub mod query;
pub mod record;
pub mod render;
pub mod widget;

pub use config::{CatalogConfig, DisplayOptions};
pub use error::{LoadError, RenderError};
pub use fuzzy::FuzzyIndex;
pub use index::{IndexOptions, SearchIndex, SearchMatch};
pub use loader::{DatasetSource, StaticSource, load_working_set};
pub use query::run_query;
pub use record::{Record, WorkingSet, filter_records};
pub use render::Renderer;
pub use widget::{CatalogWidget, DisplaySurface, WidgetState};

#[cfg(feature = "native")]
pub use loader::FileSource;
