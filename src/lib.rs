//! # Weekplan - a terminal week planner
//!
//! Stores dated, optionally repeating items in an embedded SQLite database
//! and browses them one week at a time from an interactive prompt.
//!
//! ## Features
//!
//! - **Custom calendar engine**: epoch-2001 dates with an order-preserving
//!   mixed-radix integer encoding, the only form that ever reaches storage
//! - **Repeating items**: yearly repetition matched query-side, with an
//!   optional inclusive expiration date
//! - **Week browser**: add, edit, and delete items from a 7-day view
//! - **Soft deletion**: removed items keep their row for later inspection
//!
//! ## Usage
//!
//! ```rust,no_run
//! use weekplan::db::items::Items;
//! use weekplan::libs::browser::BrowserSession;
//! use weekplan::libs::date::Date;
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = Items::open("planner.db")?;
//! BrowserSession::new(store, Date::today()).run()
//! # }
//! ```

pub mod db;
pub mod libs;
