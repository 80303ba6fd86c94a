//! The seam between the query pipeline and whatever does approximate
//! matching. The pipeline only needs `build` and `search`.

use serde::{Deserialize, Serialize};

use crate::record::WorkingSet;

/// Error ratio accepted by default. Tight enough to reject neighbouring
/// titles that differ in one character of a short query.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Characters of drift from `location` that cost a full error ratio of 1.0.
pub const DEFAULT_DISTANCE: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexOptions {
    /// Highest accepted score, from `0.0` (exact) to `1.0` (anything).
    pub threshold: f64,
    pub case_sensitive: bool,
    /// Column where a match is expected to start.
    pub location: usize,
    /// How far from `location` a match may start before it is penalized
    /// out of existence. Each character of drift adds `1 / distance` to the
    /// score; with `0` any drift scores 1.0.
    pub distance: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            case_sensitive: false,
            location: 0,
            distance: DEFAULT_DISTANCE,
        }
    }
}

/// One hit, pointing back into the working set the index was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchMatch {
    pub position: usize,
    /// `0.0` is a perfect match at the expected location, `1.0` the worst.
    pub score: f64,
}

/// An index over the `title` field of a working set.
pub trait SearchIndex {
    fn build(records: &WorkingSet, options: &IndexOptions) -> Self
    where
        Self: Sized;

    /// Matches for `query`, best first. Behavior for an empty query is
    /// unspecified; callers are expected not to ask.
    fn search(&self, query: &str) -> Vec<SearchMatch>;
}
