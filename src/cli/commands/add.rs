use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::ActivityDraft;
use crate::ui::messages::{info, success};

/// Record a new activity.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        owner,
        date,
        description,
        participants,
    } = cmd
    {
        let draft = ActivityDraft {
            name: name.clone(),
            owner: owner.clone(),
            date: date.clone(),
            description: description.clone(),
            participants: participants.clone(),
        };

        // Validate before touching the database file
        draft.validate().inspect_err(|e| show_date_hint(e, cfg))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let activity = AddLogic::apply(&mut pool, &cfg.storage_key, draft)?;

        success(format!(
            "Activity '{}' recorded with id {}.",
            activity.name, activity.id
        ));
    }

    Ok(())
}

/// Dates are stored as typed; when one is missing, remind the user of the
/// configured format.
pub(crate) fn show_date_hint(err: &AppError, cfg: &Config) {
    if let AppError::MissingFields(fields) = err
        && fields.split(", ").any(|f| f == "date")
    {
        info(format!("Date is free text, e.g. {}", cfg.date_hint));
    }
}
