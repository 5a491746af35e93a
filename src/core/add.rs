use crate::db::activities::ActivityStore;
use crate::db::log::ralog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Activity, ActivityDraft};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate `draft`, give it a fresh id and append it to the collection.
    ///
    /// Nothing is written when validation fails.
    pub fn apply(pool: &mut DbPool, key: &str, draft: ActivityDraft) -> AppResult<Activity> {
        draft.validate()?;

        let store = ActivityStore::new(&pool.conn, key);
        let activity = draft.into_activity(store.next_id()?);
        store.append(activity.clone())?;

        ralog_quiet(
            &pool.conn,
            "add",
            &activity.id.to_string(),
            &format!("Added activity '{}'", activity.name),
        );

        Ok(activity)
    }
}
