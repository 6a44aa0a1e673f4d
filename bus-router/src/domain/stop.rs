//! Stop identity types.

use std::fmt;

use serde::Serialize;

/// Store-assigned identifier of a stop.
///
/// Ids are opaque to the planner: traversal compares ids for cycle
/// detection, display goes through names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StopId(i64);

impl StopId {
    /// Wrap a raw store id.
    pub fn new(id: i64) -> Self {
        StopId(id)
    }

    /// Returns the raw store id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named stop as returned by store queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
}

impl Stop {
    pub fn new(id: StopId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accessor_roundtrip() {
        assert_eq!(StopId::new(7).as_i64(), 7);
    }

    #[test]
    fn id_display() {
        assert_eq!(format!("{}", StopId::new(42)), "42");
    }

    #[test]
    fn id_equality_and_ordering() {
        assert_eq!(StopId::new(1), StopId::new(1));
        assert_ne!(StopId::new(1), StopId::new(2));
        assert!(StopId::new(1) < StopId::new(2));
    }

    #[test]
    fn id_hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StopId::new(3));
        assert!(set.contains(&StopId::new(3)));
        assert!(!set.contains(&StopId::new(4)));
    }

    #[test]
    fn stop_construction() {
        let stop = Stop::new(StopId::new(1), "Downtown");
        assert_eq!(stop.id, StopId::new(1));
        assert_eq!(stop.name, "Downtown");
    }
}
