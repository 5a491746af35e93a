use crate::db::activities::ActivityStore;
use crate::db::log::ralog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Activity;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove exactly the activity `id`; every other entry keeps its order.
    pub fn apply(pool: &mut DbPool, key: &str, id: i64) -> AppResult<Activity> {
        let removed = ActivityStore::new(&pool.conn, key).remove(id)?;

        ralog_quiet(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("Deleted activity '{}'", removed.name),
        );

        Ok(removed)
    }
}
