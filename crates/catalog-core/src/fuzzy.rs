//! Typo-tolerant title index.
//!
//! A title is scored by its best alignment with the query: the edits needed
//! per query character, plus a penalty for starting away from the expected
//! location. Titles scoring at most `threshold` match. Hits are ordered by
//! score, then by the skim matcher's relevance score, then by position.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use log::debug;

use crate::index::{IndexOptions, SearchIndex, SearchMatch};
use crate::record::WorkingSet;

pub struct FuzzyIndex {
    titles: Vec<String>,
    folded: Vec<Vec<char>>,
    options: IndexOptions,
    matcher: SkimMatcherV2,
}

impl FuzzyIndex {
    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    fn score(&self, pattern: &[char], title: &[char]) -> f64 {
        let pattern_len = pattern.len() as f64;
        alignments(pattern, title, self.options.location)
            .into_iter()
            .map(|(errors, start)| errors as f64 / pattern_len + self.drift_penalty(start))
            .fold(f64::INFINITY, f64::min)
            .min(1.0)
    }

    fn drift_penalty(&self, start: usize) -> f64 {
        let drift = start.abs_diff(self.options.location);
        match self.options.distance {
            0 if drift == 0 => 0.0,
            0 => 1.0,
            distance => drift as f64 / distance as f64,
        }
    }

    fn fold(&self, text: &str) -> Vec<char> {
        if self.options.case_sensitive {
            text.chars().collect()
        } else {
            text.to_lowercase().chars().collect()
        }
    }
}

impl SearchIndex for FuzzyIndex {
    fn build(records: &WorkingSet, options: &IndexOptions) -> Self {
        let matcher = if options.case_sensitive {
            SkimMatcherV2::default().respect_case()
        } else {
            SkimMatcherV2::default().ignore_case()
        };

        let mut index = Self {
            titles: records.iter().map(|r| r.title.clone()).collect(),
            folded: Vec::new(),
            options: options.clone(),
            matcher,
        };
        index.folded = index.titles.iter().map(|t| index.fold(t)).collect();

        debug!(
            "Built fuzzy index over {} titles (threshold {})",
            index.titles.len(),
            index.options.threshold
        );
        index
    }

    fn search(&self, query: &str) -> Vec<SearchMatch> {
        let pattern = self.fold(query);
        if pattern.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(SearchMatch, Option<i64>)> = self
            .folded
            .iter()
            .enumerate()
            .filter_map(|(position, title)| {
                let score = self.score(&pattern, title);
                if score > self.options.threshold {
                    return None;
                }
                let relevance = self.matcher.fuzzy_match(&self.titles[position], query);
                Some((SearchMatch { position, score }, relevance))
            })
            .collect();

        hits.sort_by(|(a, a_rel), (b, b_rel)| {
            a.score
                .total_cmp(&b.score)
                .then_with(|| b_rel.cmp(a_rel))
                .then_with(|| a.position.cmp(&b.position))
        });

        hits.into_iter().map(|(hit, _)| hit).collect()
    }
}

impl std::fmt::Debug for FuzzyIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzyIndex")
            .field("titles", &self.titles.len())
            .field("options", &self.options)
            .finish()
    }
}

/// Alignments of `pattern` against substrings of `text`, one per end column,
/// as `(errors, start)`. Of equally costly paths, the one starting nearest
/// `location` is kept.
fn alignments(pattern: &[char], text: &[char], location: usize) -> Vec<(usize, usize)> {
    let nearer = |a: (usize, usize), b: (usize, usize)| {
        if (a.0, a.1.abs_diff(location)) <= (b.0, b.1.abs_diff(location)) {
            a
        } else {
            b
        }
    };

    // Row 0 costs nothing: a match may start at any column.
    let mut prev: Vec<(usize, usize)> = (0..=text.len()).map(|j| (0, j)).collect();
    let mut curr = vec![(0, 0); text.len() + 1];

    for (i, &p) in pattern.iter().enumerate() {
        curr[0] = (i + 1, 0);
        for (j, &t) in text.iter().enumerate() {
            let substitution = (prev[j].0 + usize::from(p != t), prev[j].1);
            let deletion = (prev[j + 1].0 + 1, prev[j + 1].1);
            let insertion = (curr[j].0 + 1, curr[j].1);
            curr[j + 1] = nearer(nearer(substitution, deletion), insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev
}
