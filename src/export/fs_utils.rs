// src/export/fs_utils.rs

use crate::ui::messages::{confirm, info};
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - file does not exist → true
/// - file exists and `force` is set → true
/// - file exists and `force == false` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> bool {
    if !path.exists() || force {
        return true;
    }

    if confirm(&format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        true
    } else {
        false
    }
}
