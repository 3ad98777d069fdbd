//! Database schema setup and versioning.
//!
//! The schema is versioned through a single row in the `meta` table. Startup
//! checks whether `meta` exists at all and creates version 1 when it does
//! not; anything smarter than that waits until there is a version 2.

use crate::libs::error::PlannerError;
use rusqlite::Connection;
use tracing::debug;

/// Current schema version, written into `meta` on first-time creation.
pub const SCHEMA_VERSION: i64 = 1;

const TABLE_EXISTS: &str = "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = ?1";

const CREATE_META: &str = "CREATE TABLE meta (
    name TEXT NOT NULL,
    desc TEXT NOT NULL,
    value TEXT NOT NULL
)";

const INSERT_VERSION: &str = "INSERT INTO meta (name, desc, value) VALUES ('version', 'The schema version number.', ?1)";

const CREATE_ITEMS: &str = "CREATE TABLE items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date INTEGER NOT NULL,
    desc TEXT NOT NULL,
    rep INTEGER NOT NULL,
    exp INTEGER NOT NULL,
    done INTEGER NOT NULL,
    deleted INTEGER NOT NULL DEFAULT 0
)";

const SELECT_VERSION: &str = "SELECT CAST(value AS INTEGER) FROM meta WHERE name = 'version'";

/// Create the version 1 schema if this database has never been set up.
pub fn ensure_schema(conn: &Connection) -> Result<(), PlannerError> {
    let have_meta: i64 = conn.query_row(TABLE_EXISTS, ["meta"], |row| row.get(0))?;
    if have_meta == 0 {
        debug!("creating schema v{}", SCHEMA_VERSION);
        conn.execute(CREATE_META, [])?;
        conn.execute(INSERT_VERSION, [SCHEMA_VERSION.to_string()])?;
        conn.execute(CREATE_ITEMS, [])?;
    }
    Ok(())
}

/// The version recorded in `meta`.
pub fn schema_version(conn: &Connection) -> Result<i64, PlannerError> {
    let version = conn.query_row(SELECT_VERSION, [], |row| row.get(0))?;
    Ok(version)
}
