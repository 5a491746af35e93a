use crate::db::activities::ActivityStore;
use crate::db::log::ralog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Activity;
use crate::ui::messages::warning;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub duplicates: usize,
    pub invalid: usize,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Append activities from a JSON array file.
    ///
    /// Records that fail validation are skipped, as are valid records whose
    /// id is already stored or taken by an earlier valid record in the file.
    /// The collection is written once, at the end.
    pub fn import(pool: &mut DbPool, key: &str, file: &Path) -> AppResult<ImportReport> {
        let raw = fs::read_to_string(file)?;
        let incoming: Vec<Activity> = serde_json::from_str(&raw)
            .map_err(|e| AppError::Import(format!("{}: {}", file.display(), e)))?;

        let store = ActivityStore::new(&pool.conn, key);
        let mut all = store.load_all()?;
        let mut seen: HashSet<i64> = all.iter().map(|a| a.id).collect();

        let mut report = ImportReport::default();

        for activity in incoming {
            if let Err(e) = activity.validate() {
                warning(format!("Skipping activity {}: {}", activity.id, e));
                report.invalid += 1;
                continue;
            }
            // Only records that are kept reserve their id.
            if !seen.insert(activity.id) {
                warning(format!("Skipping activity {}: id already present", activity.id));
                report.duplicates += 1;
                continue;
            }
            all.push(activity);
            report.imported += 1;
        }

        if report.imported > 0 {
            store.save_all(&all)?;
        }

        ralog_quiet(
            &pool.conn,
            "import",
            &file.to_string_lossy(),
            &format!(
                "Imported {} activities ({} duplicates, {} invalid)",
                report.imported, report.duplicates, report.invalid
            ),
        );

        Ok(report)
    }
}
