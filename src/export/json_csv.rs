// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ActivityExport, notify_export_success};
use crate::models::Activity;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed, in the same shape as the stored collection.
pub(crate) fn export_json(activities: &[Activity], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(activities)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", activities.len(), path);
    Ok(())
}

/// Export CSV (header included via serde).
pub(crate) fn export_csv(activities: &[Activity], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    if activities.is_empty() {
        wtr.write_record(ActivityExport::HEADERS)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    for item in activities.iter().map(ActivityExport::from) {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", activities.len(), path);
    Ok(())
}
