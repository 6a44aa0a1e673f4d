//! Stop graph stores.
//!
//! Two implementations of the planner's [`StopGraph`](crate::planner::StopGraph)
//! contract: [`SqliteStore`] answers successor queries with live SQL
//! against a routes database, [`MemoryStore`] precomputes adjacency when
//! routes are added. The planner cannot tell them apart.

mod memory;
mod sqlite;

use std::path::PathBuf;

pub use memory::{sample_network, MemoryStore, MemoryStoreBuilder};
pub use sqlite::SqliteStore;

/// Error from the SQLite-backed store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database file could not be opened.
    #[error("failed to open database at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement or query failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}
