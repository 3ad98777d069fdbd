//! Text for every [`Message`] variant.
//!
//! All user-visible wording lives in this one `Display` implementation, so
//! the rest of the code never formats strings for the terminal directly.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === WEEK VIEW ===
            Message::WeekOf(date) => format!("Week of {}", date),
            Message::Canceled => "Canceled.".to_string(),
            Message::UnknownCommand(cmd) => format!("Unknown command '{}'", cmd),

            // === ITEM OPERATIONS ===
            Message::ItemAdded(desc) => format!("Added '{}'", desc),
            Message::ItemUpdated(desc) => format!("Updated '{}'", desc),
            Message::ItemDeleted => "Item deleted".to_string(),
            Message::ItemNotOnScreen(num) => format!("No item number {} on screen", num),
            Message::ItemNoLongerExists => "That item no longer exists".to_string(),
            Message::NothingDisplayed => "Nothing is displayed yet".to_string(),

            // === PROMPTS ===
            Message::PromptCommand => "a)dd e)dit d)elete g)oto n)ext p)rev q)uit".to_string(),
            Message::PromptDayLetter => "Day of week (S M T W R F A, empty cancels)".to_string(),
            Message::PromptDescription => "Description (empty cancels)".to_string(),
            Message::PromptRepeatYearly => "Repeat yearly?".to_string(),
            Message::PromptDisplayNumber => "Item number (empty cancels)".to_string(),
            Message::PromptNewDescription => "New description (empty cancels)".to_string(),
            Message::PromptGotoDate => "Go to date, YYYY-MM-DD (empty cancels)".to_string(),
            Message::ConfirmDeleteItem(desc) => format!("Delete '{}'?", desc),

            // === INPUT ERRORS ===
            Message::InvalidDayLetter(input) => format!("'{}' is not a day letter", input),
            Message::InvalidDateInput(input) => format!("'{}' is not a valid YYYY-MM-DD date", input),
            Message::InvalidDisplayNumber(input) => format!("'{}' is not an item number", input),

            // === STORAGE ===
            Message::DbOpenFailed(err) => format!("Cannot open database: {}", err),
            Message::OperationFailed(err) => format!("Operation failed: {}", err),
        };
        write!(f, "{}", text)
    }
}
