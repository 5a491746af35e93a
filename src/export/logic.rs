// src/export/logic.rs

use crate::db::activities::ActivityStore;
use crate::db::log::ralog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every stored activity to `file`.
    ///
    /// Returns the number of exported activities, or `None` when the user
    /// declined to overwrite an existing file. An empty collection still
    /// writes a file (`[]` for JSON, header only for CSV).
    pub fn export(
        pool: &mut DbPool,
        key: &str,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<Option<usize>> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let activities = ActivityStore::new(&pool.conn, key).load_all()?;

        if activities.is_empty() {
            warning("No activities stored, writing an empty export.");
        }

        if !ensure_writable(&path, force) {
            warning("Export cancelled: existing file not overwritten.");
            return Ok(None);
        }

        match format {
            ExportFormat::Csv => export_csv(&activities, &path)?,
            ExportFormat::Json => export_json(&activities, &path)?,
        }

        ralog_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "Exported {} activities as {}",
                activities.len(),
                format.as_str()
            ),
        );

        Ok(Some(activities.len()))
    }
}
