use thiserror::Error;

/// Everything the planner core can fail with.
///
/// None of these are fatal: the browser loop reports them and re-prompts.
/// `OutOfRange` is raised before any SQL runs, so an invalid date component
/// can never reach storage; `NotFound` is an explicit outcome, never a
/// zeroed stand-in item.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("date {0} out of range: {1}")]
    OutOfRange(&'static str, i32),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("no matching item")]
    NotFound,
}

impl PlannerError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PlannerError::NotFound)
    }
}
