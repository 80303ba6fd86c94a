use log::debug;

use crate::index::SearchIndex;
use crate::record::{Record, WorkingSet};

/// Resolve a user query to the records to display.
///
/// A blank query (after trimming) shows the whole working set in its own
/// order. Anything else goes to the index and comes back in relevance order.
pub fn run_query<'a, I: SearchIndex>(
    text: &str,
    working_set: &'a WorkingSet,
    index: &I,
) -> Vec<&'a Record> {
    let text = text.trim();
    if text.is_empty() {
        return working_set.iter().collect();
    }

    let results: Vec<&Record> = index
        .search(text)
        .into_iter()
        .filter_map(|hit| working_set.get(hit.position))
        .collect();

    debug!("Query {:?} matched {} records", text, results.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::FuzzyIndex;
    use crate::index::{IndexOptions, SearchMatch};

    fn catalog() -> WorkingSet {
        vec![
            Record::new("Perfume A", "a.png"),
            Record::new("Perfume B", "c.png").with_url("u"),
            Record::new("Oud Wood", "o.png"),
        ]
        .into_iter()
        .collect()
    }

    /// Returns a fixed list of hits regardless of the query.
    struct FixedIndex(Vec<usize>);

    impl SearchIndex for FixedIndex {
        fn build(_: &WorkingSet, _: &IndexOptions) -> Self {
            FixedIndex(Vec::new())
        }

        fn search(&self, _: &str) -> Vec<SearchMatch> {
            self.0
                .iter()
                .map(|&position| SearchMatch {
                    position,
                    score: 0.0,
                })
                .collect()
        }
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let set = catalog();
        let index = FuzzyIndex::build(&set, &IndexOptions::default());

        let results = run_query("", &set, &index);
        assert_eq!(results, set.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_whitespace_query_returns_everything() {
        let set = catalog();
        let index = FuzzyIndex::build(&set, &IndexOptions::default());

        let results = run_query("   \t", &set, &index);
        assert_eq!(results.len(), 3);
        assert_eq!(results[2].title, "Oud Wood");
    }

    #[test]
    fn test_query_is_trimmed_before_search() {
        let set = catalog();
        let index = FuzzyIndex::build(&set, &IndexOptions::default());

        let results = run_query("  Oud Wood  ", &set, &index);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Oud Wood");
    }

    #[test]
    fn test_index_order_is_preserved() {
        let set = catalog();
        let index = FixedIndex(vec![2, 0]);

        let titles: Vec<_> = run_query("x", &set, &index)
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, ["Oud Wood", "Perfume A"]);
    }

    #[test]
    fn test_out_of_range_hits_are_dropped() {
        let set = catalog();
        let index = FixedIndex(vec![1, 7, 42]);

        let results = run_query("x", &set, &index);
        assert_eq!(results.len(), 1);
        assert!(set.iter().any(|r| std::ptr::eq(r, results[0])));
    }

    #[test]
    fn test_results_are_drawn_from_working_set() {
        let set = catalog();
        let index = FuzzyIndex::build(
            &set,
            &IndexOptions {
                threshold: 1.0,
                ..IndexOptions::default()
            },
        );

        for query in ["perfume", "wood", "zzz", "Perfume B"] {
            for record in run_query(query, &set, &index) {
                assert!(set.iter().any(|r| std::ptr::eq(r, record)));
            }
        }
    }
}
