//! SQLite-backed stop graph store.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::domain::{Route, RouteId, Stop, StopId};
use crate::planner::{SearchError, StopGraph};

use super::StoreError;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS stops (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS routes (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

-- One row per visit; sequence orders the stops within a route.
CREATE TABLE IF NOT EXISTS route_stops (
    route_id INTEGER NOT NULL REFERENCES routes(id) ON DELETE CASCADE,
    stop_id INTEGER NOT NULL REFERENCES stops(id) ON DELETE CASCADE,
    sequence INTEGER NOT NULL,
    PRIMARY KEY (route_id, sequence)
);
CREATE INDEX IF NOT EXISTS idx_route_stops_stop ON route_stops(stop_id);
"#;

/// Store of stops, routes, and visit order, backed by SQLite.
///
/// Opening creates the schema if it is missing, so a nonexistent
/// database file yields an empty store rather than an error.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create the database at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Self::from_connection(conn)
    }

    /// Open a fresh in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    /// Insert a stop, returning its assigned id.
    pub fn add_stop(&self, name: &str) -> Result<StopId, StoreError> {
        self.conn
            .execute("INSERT INTO stops (name) VALUES (?1)", params![name])?;
        Ok(StopId::new(self.conn.last_insert_rowid()))
    }

    /// Insert a route with no stops yet, returning its assigned id.
    pub fn add_route(&self, name: &str) -> Result<RouteId, StoreError> {
        self.conn
            .execute("INSERT INTO routes (name) VALUES (?1)", params![name])?;
        Ok(RouteId::new(self.conn.last_insert_rowid()))
    }

    /// Record that `route` visits `stop` at position `sequence`.
    pub fn add_route_stop(
        &self,
        route: RouteId,
        stop: StopId,
        sequence: i64,
    ) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO route_stops (route_id, stop_id, sequence) VALUES (?1, ?2, ?3)",
            params![route.as_i64(), stop.as_i64(), sequence],
        )?;
        Ok(())
    }

    /// Replace the database contents with the bundled sample network:
    /// Route 1 runs Downtown, Park, Mall and Route 2 runs Park, Station,
    /// Airport. Existing data is cleared first.
    pub fn seed_sample_network(&mut self) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM route_stops", [])?;
        tx.execute("DELETE FROM routes", [])?;
        tx.execute("DELETE FROM stops", [])?;

        for name in ["Downtown", "Park", "Mall", "Station", "Airport"] {
            tx.execute("INSERT INTO stops (name) VALUES (?1)", params![name])?;
        }

        let lines: [(&str, &[&str]); 2] = [
            ("Route 1", &["Downtown", "Park", "Mall"]),
            ("Route 2", &["Park", "Station", "Airport"]),
        ];
        for (route_name, stop_names) in lines {
            tx.execute("INSERT INTO routes (name) VALUES (?1)", params![route_name])?;
            let route_id = tx.last_insert_rowid();
            for (position, stop_name) in stop_names.iter().enumerate() {
                tx.execute(
                    "INSERT INTO route_stops (route_id, stop_id, sequence)
                     SELECT ?1, id, ?2 FROM stops WHERE name = ?3",
                    params![route_id, position as i64 + 1, stop_name],
                )?;
            }
        }

        tx.commit()?;
        debug!("seeded sample network");
        Ok(())
    }

    /// Every stop, ordered by id.
    pub fn stops(&self) -> Result<Vec<Stop>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM stops ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Stop::new(StopId::new(row.get(0)?), row.get::<_, String>(1)?))
        })?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// Every route with its stops in visit order, ordered by route id.
    pub fn routes(&self) -> Result<Vec<Route>, StoreError> {
        let mut route_stmt = self
            .conn
            .prepare("SELECT id, name FROM routes ORDER BY id")?;
        let mut stop_stmt = self.conn.prepare(
            "SELECT s.id, s.name
             FROM route_stops rs
             JOIN stops s ON s.id = rs.stop_id
             WHERE rs.route_id = ?1
             ORDER BY rs.sequence",
        )?;

        let headers = route_stmt
            .query_map([], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut routes = Vec::with_capacity(headers.len());
        for (id, name) in headers {
            let stops = stop_stmt
                .query_map(params![id], |row| {
                    Ok(Stop::new(StopId::new(row.get(0)?), row.get::<_, String>(1)?))
                })?
                .collect::<Result<Vec<_>, _>>()?;
            routes.push(Route::new(RouteId::new(id), name, stops));
        }
        Ok(routes)
    }

    fn stop_named(&self, name: &str) -> Result<Option<Stop>, StoreError> {
        let stop = self
            .conn
            .query_row(
                "SELECT id, name FROM stops WHERE name = ?1",
                params![name],
                |row| Ok(Stop::new(StopId::new(row.get(0)?), row.get::<_, String>(1)?)),
            )
            .optional()?;
        Ok(stop)
    }

    /// Stops visited strictly later than `stop` on any route that visits
    /// it, deduplicated across routes.
    fn successor_stops(&self, stop: StopId) -> Result<Vec<Stop>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT b.stop_id, s.name
             FROM route_stops a
             JOIN route_stops b ON a.route_id = b.route_id AND a.sequence < b.sequence
             JOIN stops s ON s.id = b.stop_id
             WHERE a.stop_id = ?1
             ORDER BY b.stop_id",
        )?;
        let rows = stmt.query_map(params![stop.as_i64()], |row| {
            Ok(Stop::new(StopId::new(row.get(0)?), row.get::<_, String>(1)?))
        })?;
        Ok(rows.collect::<Result<_, _>>()?)
    }
}

impl StopGraph for SqliteStore {
    fn stop_by_name(&self, name: &str) -> Result<Option<Stop>, SearchError> {
        self.stop_named(name).map_err(into_search_error)
    }

    fn successors(&self, stop: StopId) -> Result<Vec<Stop>, SearchError> {
        self.successor_stops(stop).map_err(into_search_error)
    }
}

fn into_search_error(e: StoreError) -> SearchError {
    SearchError::Store {
        message: e.to_string(),
    }
}
