use super::participant::Participant;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A recorded activity.
///
/// Field aliases accept the key names written by the mobile app, so a raw
/// dump of its storage can be imported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    #[serde(alias = "nomeAtividade")]
    pub name: String,
    #[serde(alias = "responsavel")]
    pub owner: String,
    #[serde(alias = "data")]
    pub date: String,
    #[serde(alias = "descricao")]
    pub description: String,
    #[serde(alias = "participantes", default)]
    pub participants: Vec<Participant>,
}

/// User input for a new activity, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDraft {
    pub name: String,
    pub owner: String,
    pub date: String,
    pub description: String,
    pub participants: Vec<Participant>,
}

/// Field-by-field changes for an existing activity. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ActivityPatch {
    pub name: Option<String>,
    pub owner: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    /// Replaces the whole participant list when non-empty.
    pub participants: Vec<Participant>,
    /// 1-based position and new value, edited in place after replacement.
    pub edit_participants: Vec<(usize, Participant)>,
    pub add_participants: Vec<Participant>,
    /// 1-based positions, resolved against the list after edits.
    pub remove_participants: Vec<usize>,
}

impl ActivityDraft {
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(
            &self.name,
            &self.owner,
            &self.date,
            &self.description,
            &self.participants,
        )
    }

    pub fn into_activity(self, id: i64) -> Activity {
        Activity {
            id,
            name: self.name,
            owner: self.owner,
            date: self.date,
            description: self.description,
            participants: self.participants,
        }
    }
}

impl Activity {
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(
            &self.name,
            &self.owner,
            &self.date,
            &self.description,
            &self.participants,
        )
    }

    /// Return a copy with `patch` applied. The id never changes.
    pub fn patched(&self, patch: &ActivityPatch) -> AppResult<Activity> {
        let mut out = self.clone();

        if let Some(v) = &patch.name {
            out.name = v.clone();
        }
        if let Some(v) = &patch.owner {
            out.owner = v.clone();
        }
        if let Some(v) = &patch.date {
            out.date = v.clone();
        }
        if let Some(v) = &patch.description {
            out.description = v.clone();
        }

        if !patch.participants.is_empty() {
            out.participants = patch.participants.clone();
        }

        for (idx, p) in &patch.edit_participants {
            let slot = idx
                .checked_sub(1)
                .and_then(|i| out.participants.get_mut(i))
                .ok_or(AppError::InvalidParticipantIndex(*idx))?;
            *slot = p.clone();
        }

        // Remove from the highest index down so earlier positions stay valid.
        let mut removals = patch.remove_participants.clone();
        removals.sort_unstable();
        removals.dedup();
        for idx in removals.into_iter().rev() {
            if idx == 0 || idx > out.participants.len() {
                return Err(AppError::InvalidParticipantIndex(idx));
            }
            out.participants.remove(idx - 1);
        }

        out.participants.extend(patch.add_participants.iter().cloned());

        Ok(out)
    }
}

fn validate_fields(
    name: &str,
    owner: &str,
    date: &str,
    description: &str,
    participants: &[Participant],
) -> AppResult<()> {
    let missing: Vec<&str> = [
        ("name", name),
        ("owner", owner),
        ("date", date),
        ("description", description),
    ]
    .iter()
    .filter(|(_, v)| v.is_empty())
    .map(|(k, _)| *k)
    .collect();

    if !missing.is_empty() {
        return Err(AppError::MissingFields(missing.join(", ")));
    }

    if participants.is_empty() {
        return Err(AppError::NoParticipants);
    }

    if let Some(pos) = participants.iter().position(|p| !p.is_complete()) {
        return Err(AppError::IncompleteParticipant(pos + 1));
    }

    Ok(())
}
