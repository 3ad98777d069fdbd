use crate::libs::date::Date;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

/// How an item repeats.
///
/// The integer codes are the persisted wire format: never renumber an
/// existing value, only append new kinds after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    None = 0,
    Yearly = 1,
}

impl Repetition {
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn label(self) -> &'static str {
        match self {
            Repetition::None => "",
            Repetition::Yearly => "yearly",
        }
    }
}

impl ToSql for Repetition {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for Repetition {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_i64()? {
            0 => Ok(Repetition::None),
            1 => Ok(Repetition::Yearly),
            other => Err(FromSqlError::OutOfRange(other)),
        }
    }
}

/// Completion state of an item. Same append-only rule as [`Repetition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoneStatus {
    NotApplicable = 0,
    Pending = 1,
    Done = 2,
}

impl DoneStatus {
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn label(self) -> &'static str {
        match self {
            DoneStatus::NotApplicable => "",
            DoneStatus::Pending => "todo",
            DoneStatus::Done => "done",
        }
    }
}

impl ToSql for DoneStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for DoneStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_i64()? {
            0 => Ok(DoneStatus::NotApplicable),
            1 => Ok(DoneStatus::Pending),
            2 => Ok(DoneStatus::Done),
            other => Err(FromSqlError::OutOfRange(other)),
        }
    }
}

/// A calendar entry.
///
/// `id` is assigned by the store on first save; 0 marks a not-yet-persisted
/// item. For repeating items `date` is the first occurrence and `expiration`
/// the last day (inclusive) on which the item still occurs; `None` never
/// expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerItem {
    pub id: i64,
    pub date: Date,
    pub description: String,
    pub repetition: Repetition,
    pub expiration: Option<Date>,
    pub done: DoneStatus,
}

impl PlannerItem {
    pub fn new(date: Date, description: &str, repetition: Repetition) -> Self {
        PlannerItem {
            id: 0,
            date,
            description: description.to_string(),
            repetition,
            expiration: None,
            done: DoneStatus::NotApplicable,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id != 0
    }
}
