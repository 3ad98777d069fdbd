use crate::db::migrations;
use crate::libs::error::PlannerError;
use rusqlite::Connection;
use std::path::Path;

/// An open planner database.
///
/// Opening creates the file when missing and brings the schema up to the
/// current version. Every `Db` is an isolated handle; nothing is shared
/// between instances.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db, PlannerError> {
        let conn = Connection::open(path)?;
        migrations::ensure_schema(&conn)?;
        Ok(Db { conn })
    }
}
