use crate::libs::error::PlannerError;
use crate::libs::item::Repetition;
use chrono::{Datelike, Local};
use std::fmt;

/// Maximum number of days in a month, and the modulo base for the integer
/// encoding.
pub const DAY_RADIX: i32 = 31;

/// Months in a year, the second factor of the encoding base.
pub const MONTH_RADIX: i32 = 12;

/// Encoded "days" per year, counting invalid slots like Feb 30th.
pub const YEAR_RADIX: i32 = DAY_RADIX * MONTH_RADIX;

/// Largest year offset whose every day still encodes within `i32`
/// (`30 + 31 * 11 + 372 * MAX_YEAR <= i32::MAX`).
pub const MAX_YEAR: i32 = (i32::MAX - (DAY_RADIX * MONTH_RADIX - 1)) / YEAR_RADIX;

const MONTH_DAYS: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days elapsed before each month in a non-leap year.
const MONTH_CUM: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A calendar day, measured from the epoch year 2001.
///
/// `year` counts complete years since 2001 (2003 is 2), `month` is 0-11 and
/// `day` is 0-30. Construction never validates: out-of-calendar values like
/// Feb 30th are legal in transit and get carried into the next month by
/// [`Date::next`] rather than rejected. Validation happens once, in
/// [`Date::encode`], before a value can reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl Date {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Date { year, month, day }
    }

    /// The current local day.
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        Date {
            year: now.year() - 2001,
            month: now.month0() as i32,
            day: now.day0() as i32,
        }
    }

    /// Convert to the persisted integer form.
    ///
    /// The encoding is a dual-modular reduction: days are mod 31, so an
    /// encoded 31 is the first day of the second month, and with 12 months a
    /// year spans 372 encoded "days". The result is not human-readable but
    /// orders exactly like (year, month, day), which is all the store needs
    /// for range queries.
    pub fn encode(&self) -> Result<i32, PlannerError> {
        if self.day < 0 || self.day >= DAY_RADIX {
            return Err(PlannerError::OutOfRange("day", self.day));
        }
        if self.month < 0 || self.month >= MONTH_RADIX {
            return Err(PlannerError::OutOfRange("month", self.month));
        }
        if self.year < 0 || self.year > MAX_YEAR {
            return Err(PlannerError::OutOfRange("year", self.year));
        }
        Ok(self.day + DAY_RADIX * (self.month + MONTH_RADIX * self.year))
    }

    /// Inverse of [`Date::encode`] over valid encodings.
    pub fn decode(encoded: i32) -> Self {
        Date {
            day: encoded % DAY_RADIX,
            month: encoded / DAY_RADIX % MONTH_RADIX,
            year: encoded / YEAR_RADIX,
        }
    }

    /// Leap years follow the plain 4-year rule. Offset from 2001 puts the
    /// first leap year (2004) at 3, and `rem_euclid` keeps 2000 (offset -1)
    /// correct when decrementing below the epoch.
    fn is_leap(year: i32) -> bool {
        year.rem_euclid(4) == 3
    }

    /// Total over any month value; out-of-range months reduce mod 12 so the
    /// arithmetic never panics on an unnormalized [`Date`].
    fn days_in_month(year: i32, month: i32) -> i32 {
        if month == 1 && Self::is_leap(year) {
            29
        } else {
            MONTH_DAYS[month.rem_euclid(MONTH_RADIX) as usize]
        }
    }

    /// The next calendar day, carrying across month and year boundaries.
    /// Out-of-calendar inputs (Feb 29th in a non-leap year) carry into the
    /// following month, which is what normalizes transit values. Only day
    /// overflow normalizes this way; a month outside 0-11 stays as built
    /// until the encoder rejects it.
    pub fn next(self) -> Self {
        if self.day + 1 < Self::days_in_month(self.year, self.month) {
            return Date { day: self.day + 1, ..self };
        }
        if self.month + 1 < MONTH_RADIX {
            return Date { day: 0, month: self.month + 1, ..self };
        }
        Date {
            day: 0,
            month: 0,
            year: self.year + 1,
        }
    }

    /// The previous calendar day, the mirror of [`Date::next`].
    pub fn prev(self) -> Self {
        if self.day > 0 {
            return Date { day: self.day - 1, ..self };
        }
        let (year, month) = if self.month > 0 {
            (self.year, self.month - 1)
        } else {
            (self.year - 1, MONTH_RADIX - 1)
        };
        Date {
            year,
            month,
            day: Self::days_in_month(year, month) - 1,
        }
    }

    /// Days elapsed since Jan 1 2001.
    fn days_from_epoch(&self) -> i64 {
        let year = self.year as i64;
        let leap_days = year.div_euclid(4);
        let mut days = 365 * year + leap_days + MONTH_CUM[self.month as usize] + self.day as i64;
        if self.month >= 2 && Self::is_leap(self.year) {
            days += 1;
        }
        days
    }

    /// Day of the week, 0 = Sunday through 6 = Saturday.
    ///
    /// Jan 1 2001 was a Monday, so the epoch day count lands one past Sunday.
    pub fn weekday(&self) -> i32 {
        (self.days_from_epoch() + 1).rem_euclid(7) as i32
    }

    /// The Sunday on or before this date.
    pub fn week_start(self) -> Self {
        let mut day = self;
        while day.weekday() != 0 {
            day = day.prev();
        }
        day
    }
}

impl fmt::Display for Date {
    /// Renders the human-facing `YYYY-MM-DD` form (1-based month and day).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year + 2001, self.month + 1, self.day + 1)
    }
}

/// Project an encoded date down to its position within a repetition cycle.
///
/// Two dates fall on the same yearly occurrence iff their reduced values
/// match, whatever their years: stripping the `372 * year` term leaves the
/// day-of-year bucket. `None` keeps the full encoding, so only exact dates
/// match. New repetition kinds get a new arm here and nowhere else.
pub fn reduce_encoded(encoded: i32, rep: Repetition) -> i32 {
    match rep {
        Repetition::None => encoded,
        Repetition::Yearly => encoded % YEAR_RADIX,
    }
}
