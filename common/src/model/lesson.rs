use serde::{Deserialize, Serialize};

use crate::model::progress::Progress;

/// A lesson as returned by the lesson list and lesson detail endpoints.
///
/// `total_cards` is computed server-side. `progress` is only populated on
/// learner-facing endpoints when a profile was supplied with the request;
/// admin listings leave it empty.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub total_cards: u32,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub progress: Option<Progress>,
}
