//! Path value object carried through the search frontier.

use std::fmt;

use super::{Stop, StopId};

/// A cycle-free sequence of stops.
///
/// Identifier and name sequences are kept in parallel: ids drive cycle
/// detection during traversal, names are what callers see. [`StopPath::extended`]
/// refuses to append a stop whose id is already present, so any `StopPath`
/// is a simple path by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopPath {
    ids: Vec<StopId>,
    names: Vec<String>,
}

impl StopPath {
    /// A path consisting of a single stop.
    pub fn single(stop: &Stop) -> Self {
        Self {
            ids: vec![stop.id],
            names: vec![stop.name.clone()],
        }
    }

    /// The id of the stop the path currently ends at.
    pub fn last_id(&self) -> StopId {
        // ids is never empty: paths start at one stop and only grow
        *self.ids.last().unwrap()
    }

    /// Whether the path already visits `id`.
    pub fn contains(&self, id: StopId) -> bool {
        self.ids.contains(&id)
    }

    /// Extend the path by one stop, or `None` if that would revisit a stop.
    pub fn extended(&self, next: &Stop) -> Option<Self> {
        if self.contains(next.id) {
            return None;
        }

        let mut ids = self.ids.clone();
        let mut names = self.names.clone();
        ids.push(next.id);
        names.push(next.name.clone());

        Some(Self { ids, names })
    }

    /// Number of stops on the path (always at least one).
    pub fn stop_count(&self) -> usize {
        self.ids.len()
    }

    /// Stop ids, start to end.
    pub fn ids(&self) -> &[StopId] {
        &self.ids
    }

    /// Stop names, start to end.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Consume the path, yielding the name sequence.
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl fmt::Display for StopPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(id: i64, name: &str) -> Stop {
        Stop::new(StopId::new(id), name)
    }

    #[test]
    fn single_stop_path() {
        let path = StopPath::single(&stop(1, "Downtown"));
        assert_eq!(path.stop_count(), 1);
        assert_eq!(path.last_id(), StopId::new(1));
        assert_eq!(path.names(), ["Downtown"]);
    }

    #[test]
    fn extended_appends() {
        let path = StopPath::single(&stop(1, "Downtown"))
            .extended(&stop(2, "Park"))
            .unwrap();

        assert_eq!(path.stop_count(), 2);
        assert_eq!(path.last_id(), StopId::new(2));
        assert_eq!(path.names(), ["Downtown", "Park"]);
        assert_eq!(path.ids(), [StopId::new(1), StopId::new(2)]);
    }

    #[test]
    fn extended_refuses_revisit() {
        let path = StopPath::single(&stop(1, "Downtown"))
            .extended(&stop(2, "Park"))
            .unwrap();

        assert!(path.extended(&stop(1, "Downtown")).is_none());
        assert!(path.extended(&stop(2, "Park")).is_none());
    }

    #[test]
    fn extended_does_not_mutate_original() {
        let short = StopPath::single(&stop(1, "Downtown"));
        let long = short.extended(&stop(2, "Park")).unwrap();

        assert_eq!(short.stop_count(), 1);
        assert_eq!(long.stop_count(), 2);
    }

    #[test]
    fn contains_checks_every_stop() {
        let path = StopPath::single(&stop(1, "Downtown"))
            .extended(&stop(2, "Park"))
            .unwrap()
            .extended(&stop(3, "Mall"))
            .unwrap();

        assert!(path.contains(StopId::new(1)));
        assert!(path.contains(StopId::new(2)));
        assert!(path.contains(StopId::new(3)));
        assert!(!path.contains(StopId::new(4)));
    }

    #[test]
    fn display_joins_with_arrows() {
        let path = StopPath::single(&stop(1, "Downtown"))
            .extended(&stop(2, "Park"))
            .unwrap()
            .extended(&stop(3, "Mall"))
            .unwrap();

        assert_eq!(format!("{}", path), "Downtown -> Park -> Mall");
    }

    #[test]
    fn into_names_yields_sequence() {
        let path = StopPath::single(&stop(1, "Downtown"))
            .extended(&stop(2, "Park"))
            .unwrap();

        assert_eq!(path.into_names(), vec!["Downtown", "Park"]);
    }
}
