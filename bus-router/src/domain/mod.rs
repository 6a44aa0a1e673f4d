//! Domain types for the bus route finder.
//!
//! This module contains the core domain model types that represent
//! stops, routes, and paths through the stop graph. All types enforce
//! their invariants at construction time, so code that receives these
//! types can trust their validity.

mod path;
mod route;
mod stop;

pub use path::StopPath;
pub use route::{Route, RouteId};
pub use stop::{Stop, StopId};
