use crate::cli::commands::add::show_date_hint;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityPatch, Participant};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        owner,
        date,
        description,
        participants,
        edit_participants,
        add_participants,
        remove_participants,
    } = cmd
    {
        let patch = ActivityPatch {
            name: name.clone(),
            owner: owner.clone(),
            date: date.clone(),
            description: description.clone(),
            participants: participants.clone(),
            edit_participants: parse_edit_pairs(edit_participants)?,
            add_participants: add_participants.clone(),
            remove_participants: remove_participants.clone(),
        };

        if is_empty_patch(&patch) {
            info("Nothing to change.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let updated = EditLogic::apply(&mut pool, &cfg.storage_key, *id, &patch)
            .inspect_err(|e| show_date_hint(e, cfg))?;

        success(format!("Activity {} '{}' updated.", updated.id, updated.name));
    }

    Ok(())
}

fn is_empty_patch(p: &ActivityPatch) -> bool {
    p.name.is_none()
        && p.owner.is_none()
        && p.date.is_none()
        && p.description.is_none()
        && p.participants.is_empty()
        && p.edit_participants.is_empty()
        && p.add_participants.is_empty()
        && p.remove_participants.is_empty()
}

/// `["2", "Ana <ana@mail.com>", ...]` → `[(2, Participant), ...]`
fn parse_edit_pairs(values: &[String]) -> AppResult<Vec<(usize, Participant)>> {
    values
        .chunks_exact(2)
        .map(|pair| {
            let idx = pair[0]
                .trim()
                .parse::<usize>()
                .map_err(|_| AppError::InvalidParticipantPosition(pair[0].clone()))?;
            Ok((idx, Participant::parse(&pair[1])))
        })
        .collect()
}
