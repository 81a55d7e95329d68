use serde::{Deserialize, Serialize};

/// Study progress for a (profile, lesson) pair.
///
/// One record exists per pair; the server creates it on demand and updates
/// it idempotently. `total_cards` is attached by some endpoints as a
/// convenience for rendering "X of N" badges.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Progress {
    pub profile: String,
    pub lesson_id: i64,
    pub current_card_index: u32,
    pub completed: bool,
    pub updated_at: String,
    #[serde(default)]
    pub total_cards: Option<u32>,
}
