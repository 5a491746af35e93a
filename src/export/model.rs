// src/export/model.rs

use crate::models::Activity;
use crate::utils::formatting::join_participants;
use serde::Serialize;

/// Flat row used by the CSV export: one line per activity.
#[derive(Serialize, Clone, Debug)]
pub struct ActivityExport {
    pub id: i64,
    pub name: String,
    pub owner: String,
    pub date: String,
    pub description: String,
    pub participant_count: usize,
    pub participants: String,
}

impl ActivityExport {
    /// Column names, in field order. serde only emits them with a first row.
    pub const HEADERS: [&'static str; 7] = [
        "id",
        "name",
        "owner",
        "date",
        "description",
        "participant_count",
        "participants",
    ];
}

impl From<&Activity> for ActivityExport {
    fn from(a: &Activity) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            owner: a.owner.clone(),
            date: a.date.clone(),
            description: a.description.clone(),
            participant_count: a.participants.len(),
            participants: join_participants(&a.participants),
        }
    }
}
