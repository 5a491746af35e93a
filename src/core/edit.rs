use crate::db::activities::ActivityStore;
use crate::db::log::ralog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Activity, ActivityPatch};

/// High-level business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    /// Apply `patch` to the activity `id` and store the result in place.
    ///
    /// The merged record is validated as a whole; on failure the stored
    /// collection is left untouched.
    pub fn apply(
        pool: &mut DbPool,
        key: &str,
        id: i64,
        patch: &ActivityPatch,
    ) -> AppResult<Activity> {
        let store = ActivityStore::new(&pool.conn, key);

        let current = store.find(id)?.ok_or(AppError::ActivityNotFound(id))?;
        let updated = current.patched(patch)?;
        updated.validate()?;

        store.replace(updated.clone())?;

        ralog_quiet(
            &pool.conn,
            "edit",
            &id.to_string(),
            &format!("Updated activity '{}'", updated.name),
        );

        Ok(updated)
    }
}
