/// Every user-facing message in the application.
///
/// Centralizing the text keeps the browser loop free of string literals and
/// gives one place to adjust wording. Variants carry whatever dynamic data
/// their text interpolates.
#[derive(Debug, Clone)]
pub enum Message {
    // === WEEK VIEW ===
    WeekOf(String), // week-start date
    Canceled,
    UnknownCommand(String),

    // === ITEM OPERATIONS ===
    ItemAdded(String),   // description
    ItemUpdated(String), // description
    ItemDeleted,
    ItemNotOnScreen(usize), // display number
    ItemNoLongerExists,
    NothingDisplayed,

    // === PROMPTS ===
    PromptCommand,
    PromptDayLetter,
    PromptDescription,
    PromptRepeatYearly,
    PromptDisplayNumber,
    PromptNewDescription,
    PromptGotoDate,
    ConfirmDeleteItem(String), // description

    // === INPUT ERRORS ===
    InvalidDayLetter(String),
    InvalidDateInput(String),
    InvalidDisplayNumber(String),

    // === STORAGE ===
    DbOpenFailed(String),   // underlying diagnostic
    OperationFailed(String), // underlying diagnostic
}
