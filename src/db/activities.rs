//! Whole-collection accessor for activities.
//!
//! All activities live in one JSON array under a single storage key. Every
//! mutation loads the full array, changes it in memory and writes it back.

use crate::db::kv;
use crate::errors::{AppError, AppResult};
use crate::models::Activity;
use chrono::Utc;
use rusqlite::Connection;
use std::collections::HashSet;

pub const DEFAULT_STORAGE_KEY: &str = "activities";

pub struct ActivityStore<'a> {
    conn: &'a Connection,
    key: &'a str,
}

impl<'a> ActivityStore<'a> {
    pub fn new(conn: &'a Connection, key: &'a str) -> Self {
        Self { conn, key }
    }

    /// Load every stored activity. A missing key is an empty collection.
    pub fn load_all(&self) -> AppResult<Vec<Activity>> {
        match kv::get_item(self.conn, self.key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Overwrite the stored collection.
    pub fn save_all(&self, activities: &[Activity]) -> AppResult<()> {
        let raw = serde_json::to_string(activities)?;
        kv::set_item(self.conn, self.key, &raw)
    }

    pub fn find(&self, id: i64) -> AppResult<Option<Activity>> {
        Ok(self.load_all()?.into_iter().find(|a| a.id == id))
    }

    /// Append one activity at the end of the collection.
    pub fn append(&self, activity: Activity) -> AppResult<()> {
        let mut all = self.load_all()?;
        all.push(activity);
        self.save_all(&all)
    }

    /// Replace the activity with the same id, keeping its position.
    pub fn replace(&self, activity: Activity) -> AppResult<()> {
        let mut all = self.load_all()?;
        let slot = all
            .iter_mut()
            .find(|a| a.id == activity.id)
            .ok_or(AppError::ActivityNotFound(activity.id))?;
        *slot = activity;
        self.save_all(&all)
    }

    /// Remove the activity with `id` and return it.
    pub fn remove(&self, id: i64) -> AppResult<Activity> {
        let mut all = self.load_all()?;
        let pos = all
            .iter()
            .position(|a| a.id == id)
            .ok_or(AppError::ActivityNotFound(id))?;
        let removed = all.remove(pos);
        self.save_all(&all)?;
        Ok(removed)
    }

    /// Creation timestamp in milliseconds, bumped past the largest stored id
    /// when it would collide with an existing record. See [`next_id_for`].
    pub fn next_id(&self) -> AppResult<i64> {
        let all = self.load_all()?;
        Ok(next_id_for(&all, Utc::now().timestamp_millis()))
    }
}

pub fn next_id_for(existing: &[Activity], now_ms: i64) -> i64 {
    let taken: HashSet<i64> = existing.iter().map(|a| a.id).collect();
    if !taken.contains(&now_ms) {
        return now_ms;
    }

    let max = taken.iter().copied().max().unwrap_or(now_ms);
    match max.checked_add(1) {
        Some(id) => id,
        // `i64::MAX` is taken: reuse the smallest free positive id.
        None => (1..).find(|id| !taken.contains(id)).unwrap_or(0),
    }
}
