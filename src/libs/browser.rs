//! The interactive week browser.
//!
//! One [`BrowserSession`] owns everything the prompt loop needs: the item
//! store, the anchor date whose week is displayed, the transient mapping
//! from on-screen item numbers to row ids, and a one-shot flash message
//! shown under the next redraw. The loop itself is iterative; every redraw
//! updates the session in place.
//!
//! The display-number map is presentation state only. It is rebuilt on every
//! redraw and is never authoritative: commands resolve a number to a row id
//! and then act on the store, which may well report `NotFound` if the row
//! changed underneath.

use crate::db::items::Items;
use crate::libs::date::Date;
use crate::libs::item::{PlannerItem, Repetition};
use crate::libs::messages::Message;
use crate::libs::view::{View, DAY_LETTERS};
use crate::{msg_error, msg_print, msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use tracing::debug;

enum Flow {
    Continue,
    Quit,
}

/// A deferred message shown under the next redraw, with the severity
/// deciding which display macro prints it.
enum Flash {
    Info(Message),
    Success(Message),
    Warning(Message),
    Error(Message),
}

pub struct BrowserSession {
    store: Items,
    anchor: Date,
    /// Display number (1-based) minus one indexes the row id.
    display_map: Vec<i64>,
    flash: Option<Flash>,
}

impl BrowserSession {
    pub fn new(store: Items, anchor: Date) -> Self {
        BrowserSession {
            store,
            anchor,
            display_map: Vec::new(),
            flash: None,
        }
    }

    /// Redraw-and-prompt until the quit command.
    ///
    /// Command failures of every kind become a flash message and the loop
    /// re-prompts; only failing to render the week at all (the database is
    /// gone) ends the session with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.render_week()?;
            match self.command() {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => {
                    debug!("command failed: {err:#}");
                    self.flash = Some(Flash::Error(Message::OperationFailed(err.to_string())));
                }
            }
        }
        Ok(())
    }

    /// Build the display model for the week containing the anchor,
    /// rebuilding the display-number map as items are numbered.
    ///
    /// The week containing the epoch reaches back to days that predate it
    /// and cannot encode; those can hold no items and come back empty
    /// rather than failing the whole week.
    pub fn collect_week(&mut self) -> Result<Vec<(Date, Vec<(usize, PlannerItem)>)>> {
        let start = self.anchor.week_start();
        self.display_map.clear();

        let mut days = Vec::with_capacity(7);
        let mut day = start;
        for _ in 0..7 {
            let items = if day.encode().is_ok() {
                self.store.fetch_day(day)?
            } else {
                Vec::new()
            };
            let mut numbered: Vec<(usize, PlannerItem)> = Vec::new();
            for item in items {
                self.display_map.push(item.id);
                numbered.push((self.display_map.len(), item));
            }
            days.push((day, numbered));
            day = day.next();
        }
        Ok(days)
    }

    fn render_week(&mut self) -> Result<()> {
        let days = self.collect_week()?;

        msg_print!(Message::WeekOf(days[0].0.to_string()), true);
        View::week(&days);
        match self.flash.take() {
            Some(Flash::Info(msg)) => msg_print!(msg),
            Some(Flash::Success(msg)) => msg_success!(msg),
            Some(Flash::Warning(msg)) => msg_warning!(msg),
            Some(Flash::Error(msg)) => msg_error!(msg),
            None => {}
        }
        Ok(())
    }

    fn command(&mut self) -> Result<Flow> {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCommand.to_string())
            .allow_empty(true)
            .interact_text()?;

        match input.trim().to_lowercase().as_str() {
            "a" => self.add_item()?,
            "e" => self.edit_item()?,
            "d" => self.delete_item()?,
            "g" => self.goto_week()?,
            "n" => self.shift_week(true),
            "p" => self.shift_week(false),
            "q" => return Ok(Flow::Quit),
            "" => {}
            other => self.flash = Some(Flash::Warning(Message::UnknownCommand(other.to_string()))),
        }
        Ok(Flow::Continue)
    }

    /// Add an item on a day of the displayed week, picked by its letter.
    fn add_item(&mut self) -> Result<()> {
        let letter: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDayLetter.to_string())
            .allow_empty(true)
            .interact_text()?;
        if letter.trim().is_empty() {
            return self.cancel();
        }

        let upper = letter.trim().to_uppercase();
        let Some(offset) = DAY_LETTERS.iter().position(|l| upper == l.to_string()) else {
            self.flash = Some(Flash::Warning(Message::InvalidDayLetter(letter.trim().to_string())));
            return Ok(());
        };

        let description: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDescription.to_string())
            .allow_empty(true)
            .interact_text()?;
        if description.trim().is_empty() {
            return self.cancel();
        }

        let yearly = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRepeatYearly.to_string())
            .default(false)
            .interact()?;

        let mut date = self.anchor.week_start();
        for _ in 0..offset {
            date = date.next();
        }

        let repetition = if yearly { Repetition::Yearly } else { Repetition::None };
        let mut item = PlannerItem::new(date, description.trim(), repetition);
        self.store.save(&mut item)?;

        self.flash = Some(Flash::Success(Message::ItemAdded(item.description)));
        Ok(())
    }

    /// Replace the description of a displayed item.
    fn edit_item(&mut self) -> Result<()> {
        let Some(id) = self.prompt_display_number()? else {
            return Ok(());
        };

        let description: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNewDescription.to_string())
            .allow_empty(true)
            .interact_text()?;
        if description.trim().is_empty() {
            return self.cancel();
        }

        // The display map can go stale between redraws; a vanished row is a
        // flash, not a failure.
        match self.store.update_description(id, description.trim()) {
            Err(err) if err.is_not_found() => {
                self.flash = Some(Flash::Warning(Message::ItemNoLongerExists));
            }
            result => {
                result?;
                self.flash = Some(Flash::Success(Message::ItemUpdated(description.trim().to_string())));
            }
        }
        Ok(())
    }

    /// Soft-delete a displayed item after confirmation.
    fn delete_item(&mut self) -> Result<()> {
        let Some(id) = self.prompt_display_number()? else {
            return Ok(());
        };

        let item = match self.store.get_by_id(id) {
            Err(err) if err.is_not_found() => {
                self.flash = Some(Flash::Warning(Message::ItemNoLongerExists));
                return Ok(());
            }
            result => result?,
        };
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteItem(item.description).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            return self.cancel();
        }

        self.store.soft_delete(id)?;
        self.flash = Some(Flash::Success(Message::ItemDeleted));
        Ok(())
    }

    /// Jump to the week containing a typed date.
    fn goto_week(&mut self) -> Result<()> {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptGotoDate.to_string())
            .allow_empty(true)
            .interact_text()?;
        if input.trim().is_empty() {
            return self.cancel();
        }

        match parse_date(input.trim()) {
            Some(date) if date.encode().is_ok() => self.anchor = date,
            _ => self.flash = Some(Flash::Warning(Message::InvalidDateInput(input.trim().to_string()))),
        }
        Ok(())
    }

    fn shift_week(&mut self, forward: bool) {
        let mut day = self.anchor.week_start();
        for _ in 0..7 {
            day = if forward { day.next() } else { day.prev() };
        }
        self.anchor = day;
    }

    /// Ask for a display number and resolve it to a row id. `None` means the
    /// command was canceled or the number did not resolve; a flash is
    /// already set in the latter case.
    fn prompt_display_number(&mut self) -> Result<Option<i64>> {
        if self.display_map.is_empty() {
            self.flash = Some(Flash::Warning(Message::NothingDisplayed));
            return Ok(None);
        }

        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDisplayNumber.to_string())
            .allow_empty(true)
            .interact_text()?;
        if input.trim().is_empty() {
            self.flash = Some(Flash::Info(Message::Canceled));
            return Ok(None);
        }

        let Ok(number) = input.trim().parse::<usize>() else {
            self.flash = Some(Flash::Warning(Message::InvalidDisplayNumber(input.trim().to_string())));
            return Ok(None);
        };
        match number.checked_sub(1).and_then(|i| self.display_map.get(i)) {
            Some(&id) => Ok(Some(id)),
            None => {
                self.flash = Some(Flash::Warning(Message::ItemNotOnScreen(number)));
                Ok(None)
            }
        }
    }

    fn cancel(&mut self) -> Result<()> {
        self.flash = Some(Flash::Info(Message::Canceled));
        Ok(())
    }
}

/// Parse a human `YYYY-MM-DD` date into epoch-offset form. Calendar validity
/// beyond component ranges is the encoder's business.
fn parse_date(input: &str) -> Option<Date> {
    let mut parts = input.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: i32 = parts.next()?.parse().ok()?;
    let day: i32 = parts.next()?.parse().ok()?;
    Some(Date::new(year - 2001, month - 1, day - 1))
}

#[cfg(test)]
mod tests {
    use super::parse_date;
    use crate::libs::date::Date;

    #[test]
    fn parse_date_maps_to_epoch_offset() {
        assert_eq!(parse_date("2024-08-16"), Some(Date::new(23, 7, 15)));
        assert_eq!(parse_date("2001-01-01"), Some(Date::new(0, 0, 0)));
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("2024-08"), None);
    }

    #[test]
    fn parse_date_leaves_validation_to_encode() {
        // Feb 30th parses; the encoder is where range checks live.
        let date = parse_date("2024-02-30").unwrap();
        assert_eq!(date, Date::new(23, 1, 29));
        assert!(date.encode().is_ok()); // in component range
        assert_eq!(parse_date("2024-13-50"), Some(Date::new(23, 12, 49)));
        assert!(Date::new(23, 12, 49).encode().is_err());
    }
}
