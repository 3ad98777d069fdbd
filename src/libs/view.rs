use crate::libs::date::Date;
use crate::libs::item::PlannerItem;
use prettytable::{row, Table};

/// Weekday letters, Sunday first. `R` is Thursday and `A` Saturday, keeping
/// every letter distinct.
pub const DAY_LETTERS: [char; 7] = ['S', 'M', 'T', 'W', 'R', 'F', 'A'];

pub struct View {}

impl View {
    /// Render a 7-day week. Each day gets a header row; its items follow,
    /// carrying the display numbers the prompt commands refer to.
    pub fn week(days: &[(Date, Vec<(usize, PlannerItem)>)]) {
        let mut table = Table::new();
        table.add_row(row!["DAY", "DATE", "#", "ITEM", "REP", "STATUS"]);
        for (i, (date, items)) in days.iter().enumerate() {
            table.add_row(row![DAY_LETTERS[i], date, "", "", "", ""]);
            for (number, item) in items {
                table.add_row(row![
                    "",
                    "",
                    number,
                    item.description,
                    item.repetition.label(),
                    item.done.label()
                ]);
            }
        }
        table.printstd();
    }
}
