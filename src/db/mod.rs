//! Persistence layer for the planner.
//!
//! Built on SQLite through rusqlite. `db` owns connection setup, `migrations`
//! the versioned schema bootstrap, and `items` the planner item store. Date
//! values are persisted only in their encoded integer form (see
//! [`crate::libs::date`]); repetition and completion codes are a stable wire
//! format.

pub mod db;
pub mod items;
pub mod migrations;
