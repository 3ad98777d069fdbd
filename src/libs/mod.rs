//! Core planner logic and shared utilities.

/// The interactive week browser session and prompt loop.
pub mod browser;

/// Calendar date type, integer encoding, and calendar arithmetic.
pub mod date;

/// Error taxonomy shared by the date engine and the store.
pub mod error;

/// Planner item domain model and its persisted codes.
pub mod item;

/// User-facing message text and display macros.
pub mod messages;

/// Terminal rendering of the week view.
pub mod view;
