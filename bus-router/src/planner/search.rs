//! BFS simple-path enumeration.
//!
//! Finds every cycle-free path between two named stops by expanding a
//! FIFO frontier of partial paths, one stop at a time.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::domain::{Stop, StopId, StopPath};

use super::config::SearchConfig;

/// Error from path enumeration.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// A store query failed; the enumeration is aborted.
    #[error("store query failed: {message}")]
    Store { message: String },
}

/// Contract the enumerator requires of a stop graph store.
///
/// The two shipped implementations are `SqliteStore` (live SQL queries)
/// and `MemoryStore` (adjacency precomputed at load time); the
/// enumerator is agnostic to which. The abstraction also allows the
/// planner to be tested with mock data.
pub trait StopGraph {
    /// Resolve a display name to a stop.
    ///
    /// Exact, case-sensitive match. Returns `Ok(None)` when no stop has
    /// that name; an unknown name is not an error.
    fn stop_by_name(&self, name: &str) -> Result<Option<Stop>, SearchError>;

    /// Every stop reachable strictly later in sequence order within the
    /// same route as `stop`, deduplicated.
    ///
    /// The order of the returned stops is not part of the contract;
    /// callers must not rely on it for correctness.
    fn successors(&self, stop: StopId) -> Result<Vec<Stop>, SearchError>;
}

/// Result of path enumeration.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Completed paths, in the order their branch finished.
    pub paths: Vec<StopPath>,

    /// Number of partial paths taken off the frontier.
    pub states_expanded: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            paths: Vec::new(),
            states_expanded: 0,
        }
    }
}

/// Simple-path enumerator over a stop graph.
pub struct Planner<'a, G: StopGraph> {
    graph: &'a G,
    config: &'a SearchConfig,
}

impl<'a, G: StopGraph> Planner<'a, G> {
    /// Create a new planner.
    pub fn new(graph: &'a G, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Enumerate every simple path from `start_name` to `end_name`.
    ///
    /// Either name failing to resolve yields an empty result, not an
    /// error. When start and end name the same stop, the single-stop
    /// path is the one result.
    pub fn find_paths(
        &self,
        start_name: &str,
        end_name: &str,
    ) -> Result<SearchResult, SearchError> {
        let Some(start) = self.graph.stop_by_name(start_name)? else {
            return Ok(SearchResult::empty());
        };
        let Some(end) = self.graph.stop_by_name(end_name)? else {
            return Ok(SearchResult::empty());
        };

        let mut paths: Vec<StopPath> = Vec::new();
        let mut states_expanded = 0;

        let mut frontier: VecDeque<StopPath> = VecDeque::new();
        frontier.push_back(StopPath::single(&start));

        while let Some(path) = frontier.pop_front() {
            if let Some(cap) = self.config.max_expansions {
                if states_expanded >= cap {
                    debug!(cap, "expansion cap reached; stopping early");
                    break;
                }
            }
            states_expanded += 1;

            // A path that has reached the end stop is complete; its
            // branch is not expanded further.
            if path.last_id() == end.id {
                paths.push(path);
                continue;
            }

            let successors = self.graph.successors(path.last_id())?;
            trace!(
                stop = path.last_id().as_i64(),
                successors = successors.len(),
                depth = path.stop_count(),
                "expanding frontier entry"
            );

            for next in &successors {
                // extended refuses stops already on the path, which both
                // keeps paths simple and guarantees the frontier drains
                if let Some(longer) = path.extended(next) {
                    frontier.push_back(longer);
                }
            }
        }

        debug!(
            paths = paths.len(),
            states_expanded, "path enumeration complete"
        );

        Ok(SearchResult {
            paths,
            states_expanded,
        })
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::tests::{reference_paths, MockGraph};
    use super::*;

    const POOL: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

    proptest! {
        /// BFS enumeration agrees with exhaustive DFS over arbitrary
        /// route sets, and every returned path is simple with the right
        /// endpoints.
        #[test]
        fn agrees_with_reference(
            routes in prop::collection::vec(
                prop::collection::vec(0..POOL.len(), 1..5),
                1..4,
            ),
            from in 0..POOL.len(),
            to in 0..POOL.len(),
        ) {
            let named: Vec<Vec<&str>> = routes
                .iter()
                .map(|route| route.iter().map(|&i| POOL[i]).collect())
                .collect();
            let slices: Vec<&[&str]> = named.iter().map(Vec::as_slice).collect();

            let graph = MockGraph::from_routes(&slices);
            let from = POOL[from];
            let to = POOL[to];

            let config = SearchConfig::default();
            let planner = Planner::new(&graph, &config);
            let result = planner.find_paths(from, to).unwrap();

            for path in &result.paths {
                let mut ids = path.ids().to_vec();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), path.stop_count());
                prop_assert_eq!(path.names().first().map(String::as_str), Some(from));
                prop_assert_eq!(path.names().last().map(String::as_str), Some(to));
            }

            let mut found: Vec<Vec<String>> = result
                .paths
                .into_iter()
                .map(StopPath::into_names)
                .collect();
            let mut expected = reference_paths(&graph, from, to);
            found.sort();
            expected.sort();
            prop_assert_eq!(found, expected);
        }
    }
}
