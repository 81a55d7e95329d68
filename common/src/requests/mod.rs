use serde::{Deserialize, Serialize};

use crate::model::card::Card;
use crate::model::lesson::Lesson;
use crate::model::progress::Progress;

/// Payload for `POST /admin/lessons/`.
/// Only the title is mandatory; the server stores an empty description
/// when none is given.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreateLessonRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for `POST /admin/lessons/{id}/cards/`.
/// When `order` is omitted the server appends the card after the current
/// highest order in the lesson.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreateCardRequest {
    pub english_text: String,
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Partial payload for `PUT /admin/cards/{id}/`. Absent fields are left
/// untouched by the server.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UpdateCardRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Payload for `POST /lessons/{id}/progress/`. The profile is always sent;
/// index and completion flag are optional partial updates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProgressUpdateRequest {
    pub profile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_card_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Envelope of the lesson list endpoints (`GET /lessons/`,
/// `GET /admin/lessons/`).
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct LessonListResponse {
    pub lessons: Vec<Lesson>,
}

/// Envelope of the lesson detail endpoints (`GET /lessons/{id}/cards/`,
/// `GET /admin/lessons/{id}/cards/`). `progress` is present only on the
/// learner-facing route and only when a profile was supplied.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct LessonWithCards {
    pub lesson: Lesson,
    pub cards: Vec<Card>,
    #[serde(default)]
    pub progress: Option<Progress>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_detail_envelope_decodes_server_shape() {
        let body = r#"{
            "lesson": {
                "id": 3,
                "title": "Животные",
                "description": "Базовые названия животных",
                "total_cards": 2,
                "cover_image": null
            },
            "cards": [
                {
                    "id": 10,
                    "lesson_id": 3,
                    "english_text": "cat",
                    "translation": "кот",
                    "order": 1,
                    "image": "http://localhost/media/cards/cat.png",
                    "audio": null
                },
                {
                    "id": 11,
                    "lesson_id": 3,
                    "english_text": "dog",
                    "translation": "собака",
                    "order": 2
                }
            ],
            "progress": {
                "profile": "p-1",
                "lesson_id": 3,
                "current_card_index": 1,
                "completed": false,
                "updated_at": "2024-05-01T10:00:00",
                "total_cards": 2
            }
        }"#;

        let decoded: LessonWithCards = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.lesson.id, 3);
        assert_eq!(decoded.cards.len(), 2);
        assert_eq!(decoded.cards[1].image, None);
        let progress = decoded.progress.unwrap();
        assert_eq!(progress.current_card_index, 1);
        assert!(!progress.completed);
    }

    #[test]
    fn lesson_list_tolerates_missing_progress() {
        let body = r#"{
            "lessons": [
                {"id": 1, "title": "Colors", "description": "", "total_cards": 0}
            ]
        }"#;

        let decoded: LessonListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.lessons.len(), 1);
        assert_eq!(decoded.lessons[0].progress, None);
        assert_eq!(decoded.lessons[0].cover_image, None);
    }

    #[test]
    fn optional_request_fields_are_omitted_when_none() {
        let payload = CreateCardRequest {
            english_text: "cat".to_string(),
            translation: "кот".to_string(),
            order: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("order"));

        let update = UpdateCardRequest {
            order: Some(5),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"order":5}"#);
    }

    #[test]
    fn progress_update_serializes_full_payload() {
        let payload = ProgressUpdateRequest {
            profile: "p-1".to_string(),
            current_card_index: Some(2),
            completed: Some(true),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"profile":"p-1","current_card_index":2,"completed":true}"#
        );
    }
}
