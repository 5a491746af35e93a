pub mod activity;
pub mod participant;

pub use activity::{Activity, ActivityDraft, ActivityPatch};
pub use participant::Participant;
