//! In-memory stop graph store.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{Stop, StopId};
use crate::planner::{SearchError, StopGraph};

/// Stop graph held entirely in memory.
///
/// Successor sets are precomputed as routes are added, so graph queries
/// never fail. Ids are assigned in first-seen order starting from 1,
/// mirroring what a freshly seeded database would assign.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    by_name: HashMap<String, Stop>,
    successors: HashMap<StopId, BTreeMap<StopId, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct stops.
    pub fn stop_count(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true when no routes have been added.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Add a route visiting `stop_names` in order.
    ///
    /// Names seen before reuse their existing stop; new names get the
    /// next free id. Every stop becomes a successor of every stop that
    /// precedes it on the route.
    pub fn add_route(&mut self, stop_names: &[&str]) {
        let stops: Vec<Stop> = stop_names.iter().map(|name| self.intern(name)).collect();
        for (i, earlier) in stops.iter().enumerate() {
            for later in &stops[i + 1..] {
                self.successors
                    .entry(earlier.id)
                    .or_default()
                    .insert(later.id, later.name.clone());
            }
        }
    }

    fn intern(&mut self, name: &str) -> Stop {
        if let Some(stop) = self.by_name.get(name) {
            return stop.clone();
        }
        let stop = Stop::new(StopId::new(self.by_name.len() as i64 + 1), name);
        self.by_name.insert(name.to_string(), stop.clone());
        stop
    }
}

impl StopGraph for MemoryStore {
    fn stop_by_name(&self, name: &str) -> Result<Option<Stop>, SearchError> {
        Ok(self.by_name.get(name).cloned())
    }

    fn successors(&self, stop: StopId) -> Result<Vec<Stop>, SearchError> {
        Ok(self
            .successors
            .get(&stop)
            .map(|set| {
                set.iter()
                    .map(|(id, name)| Stop::new(*id, name.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Builder for assembling an in-memory store route by route.
#[derive(Debug, Default)]
pub struct MemoryStoreBuilder {
    inner: MemoryStore,
}

impl MemoryStoreBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route visiting `stop_names` in order.
    pub fn route(mut self, stop_names: &[&str]) -> Self {
        self.inner.add_route(stop_names);
        self
    }

    /// Build the store.
    pub fn build(self) -> MemoryStore {
        self.inner
    }
}

/// The bundled sample network: Route 1 runs Downtown, Park, Mall and
/// Route 2 runs Park, Station, Airport.
pub fn sample_network() -> MemoryStore {
    MemoryStoreBuilder::new()
        .route(&["Downtown", "Park", "Mall"])
        .route(&["Park", "Station", "Airport"])
        .build()
}
