use serde::{Deserialize, Serialize};

/// A single flash card inside a lesson.
///
/// `order` controls display order within the lesson; lower numbers come
/// first. `image` and `audio` are absolute media URLs when present.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Card {
    pub id: i64,
    pub lesson_id: i64,
    pub english_text: String,
    pub translation: String,
    pub order: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}
