use crate::db::activities::ActivityStore;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Activity;

pub struct ListLogic;

impl ListLogic {
    /// All activities in stored order, optionally filtered by a
    /// case-insensitive match on name or owner.
    pub fn list(pool: &mut DbPool, key: &str, search: Option<&str>) -> AppResult<Vec<Activity>> {
        let all = ActivityStore::new(&pool.conn, key).load_all()?;

        let needle = match search.map(str::trim) {
            Some(s) if !s.is_empty() => s.to_lowercase(),
            _ => return Ok(all),
        };

        Ok(all
            .into_iter()
            .filter(|a| {
                a.name.to_lowercase().contains(&needle) || a.owner.to_lowercase().contains(&needle)
            })
            .collect())
    }

    pub fn show(pool: &mut DbPool, key: &str, id: i64) -> AppResult<Activity> {
        ActivityStore::new(&pool.conn, key)
            .find(id)?
            .ok_or(AppError::ActivityNotFound(id))
    }
}
