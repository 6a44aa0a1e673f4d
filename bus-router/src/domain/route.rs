//! Route types.

use std::fmt;

use serde::Serialize;

use super::Stop;

/// Store-assigned identifier of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RouteId(i64);

impl RouteId {
    /// Wrap a raw store id.
    pub fn new(id: i64) -> Self {
        RouteId(id)
    }

    /// Returns the raw store id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered sequence of stops visited by a single bus line.
///
/// The index of a stop in `stops` is its sequence position; the store
/// returns stops already sorted by that position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub id: RouteId,
    pub name: String,
    pub stops: Vec<Stop>,
}

impl Route {
    pub fn new(id: RouteId, name: impl Into<String>, stops: Vec<Stop>) -> Self {
        Self {
            id,
            name: name.into(),
            stops,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;

    #[test]
    fn route_preserves_stop_order() {
        let route = Route::new(
            RouteId::new(1),
            "Route 1",
            vec![
                Stop::new(StopId::new(1), "Downtown"),
                Stop::new(StopId::new(2), "Park"),
                Stop::new(StopId::new(3), "Mall"),
            ],
        );

        let names: Vec<&str> = route.stops.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Downtown", "Park", "Mall"]);
    }

    #[test]
    fn id_display() {
        assert_eq!(format!("{}", RouteId::new(2)), "2");
    }
}
