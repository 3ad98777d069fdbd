use crate::db::db::Db;
use crate::libs::date::{reduce_encoded, Date};
use crate::libs::error::PlannerError;
use crate::libs::item::{PlannerItem, Repetition};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

const INSERT_ITEM: &str = "INSERT INTO items (date, desc, rep, exp, done) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_ITEM: &str = "UPDATE items SET date = ?1, desc = ?2, rep = ?3, exp = ?4, done = ?5 WHERE id = ?6 AND deleted = 0";
const UPDATE_DESC: &str = "UPDATE items SET desc = ?1 WHERE id = ?2 AND deleted = 0";
const SOFT_DELETE: &str = "UPDATE items SET deleted = 1 WHERE id = ?1";
const SELECT_ITEMS: &str = "SELECT id, date, desc, rep, exp, done FROM items";
const WHERE_ID: &str = "WHERE id = ?1 AND deleted = 0";
const WHERE_RANGE: &str = "WHERE deleted = 0 AND date >= ?1 AND date <= ?2";
const WHERE_DAY: &str = "WHERE deleted = 0 AND (date = ?1 OR rep <> 0)";

/// The planner item store.
///
/// Dates cross this boundary only as their encoded integers; both `date` and
/// `exp` columns hold them, with `exp = 0` standing for "never expires".
/// Deletion is logical: rows keep their data and a `deleted` flag, and every
/// query here filters flagged rows out.
pub struct Items {
    conn: Connection,
}

impl Items {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PlannerError> {
        let db = Db::open(path)?;
        Ok(Items { conn: db.conn })
    }

    /// Persist an item. A fresh item (id 0) is inserted and gets its
    /// generated id written back; a saved one is updated in place.
    pub fn save(&mut self, item: &mut PlannerItem) -> Result<(), PlannerError> {
        let date = item.date.encode()?;
        let exp = Self::encode_expiration(item)?;

        if !item.is_saved() {
            self.conn
                .execute(INSERT_ITEM, params![date, item.description, item.repetition, exp, item.done])?;
            item.id = self.conn.last_insert_rowid();
            debug!(id = item.id, "inserted item");
        } else {
            let affected = self
                .conn
                .execute(UPDATE_ITEM, params![date, item.description, item.repetition, exp, item.done, item.id])?;
            if affected == 0 {
                return Err(PlannerError::NotFound);
            }
        }
        Ok(())
    }

    /// Single-row lookup. Soft-deleted rows count as absent.
    pub fn get_by_id(&mut self, id: i64) -> Result<PlannerItem, PlannerError> {
        let sql = format!("{} {}", SELECT_ITEMS, WHERE_ID);
        let item = self
            .conn
            .query_row(&sql, params![id], Self::map_row)
            .optional()?;
        item.ok_or(PlannerError::NotFound)
    }

    /// All live items whose date falls in `[lower, upper]`, both inclusive,
    /// in insertion order.
    pub fn fetch_range(&mut self, lower: Date, upper: Date) -> Result<Vec<PlannerItem>, PlannerError> {
        let low = lower.encode()?;
        let high = upper.encode()?;
        let sql = format!("{} {}", SELECT_ITEMS, WHERE_RANGE);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![low, high], Self::map_row)?;

        let mut items = Vec::new();
        for row in rows {
            items.push(row?);
        }
        Ok(items)
    }

    /// All live items occurring on `date`: literal matches, plus repeating
    /// items whose cycle position matches and whose expiration (inclusive)
    /// has not passed. The statement narrows to candidate rows; the
    /// repetition arithmetic stays here rather than in SQL.
    pub fn fetch_day(&mut self, date: Date) -> Result<Vec<PlannerItem>, PlannerError> {
        let target = date.encode()?;
        let sql = format!("{} {}", SELECT_ITEMS, WHERE_DAY);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![target], Self::map_row)?;

        let mut items = Vec::new();
        for row in rows {
            let item = row?;
            if Self::occurs_on(&item, target)? {
                items.push(item);
            }
        }
        Ok(items)
    }

    /// Replace an item's description without touching anything else.
    pub fn update_description(&mut self, id: i64, description: &str) -> Result<(), PlannerError> {
        let affected = self.conn.execute(UPDATE_DESC, params![description, id])?;
        if affected == 0 {
            return Err(PlannerError::NotFound);
        }
        Ok(())
    }

    /// Flag an item as deleted, keeping the row. Deleting an already-deleted
    /// item succeeds; an id with no row at all is `NotFound`.
    pub fn soft_delete(&mut self, id: i64) -> Result<(), PlannerError> {
        let affected = self.conn.execute(SOFT_DELETE, params![id])?;
        if affected == 0 {
            return Err(PlannerError::NotFound);
        }
        debug!(id, "soft-deleted item");
        Ok(())
    }

    fn encode_expiration(item: &PlannerItem) -> Result<i32, PlannerError> {
        match item.expiration {
            Some(exp) => exp.encode(),
            None => Ok(0),
        }
    }

    /// Whether a candidate row actually occurs on the target day. A literal
    /// date match is an occurrence regardless of repetition, so a repeating
    /// item on its own first day is returned exactly once.
    fn occurs_on(item: &PlannerItem, target: i32) -> Result<bool, PlannerError> {
        let encoded = item.date.encode()?;
        if encoded == target {
            return Ok(true);
        }
        if item.repetition == Repetition::None {
            return Ok(false);
        }
        if reduce_encoded(encoded, item.repetition) != reduce_encoded(target, item.repetition) {
            return Ok(false);
        }
        match item.expiration {
            Some(exp) => Ok(target <= exp.encode()?),
            None => Ok(true),
        }
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<PlannerItem> {
        let exp: i32 = row.get(4)?;
        Ok(PlannerItem {
            id: row.get(0)?,
            date: Date::decode(row.get(1)?),
            description: row.get(2)?,
            repetition: row.get(3)?,
            expiration: (exp != 0).then(|| Date::decode(exp)),
            done: row.get(5)?,
        })
    }
}
