//! Typed client for the lesson/card/progress HTTP API.
//!
//! Every operation is a single attempt: build the request, attach a JSON
//! content type, send, and decode the JSON body. Non-success statuses are
//! normalized into [`ApiError::RequestFailed`] carrying the status code and
//! the response text; callers decide whether to surface or swallow it.
//! There are no retries, timeouts, or caches here.

use std::fmt;

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;

use common::model::card::Card;
use common::model::lesson::Lesson;
use common::model::progress::Progress;
use common::requests::{
    CreateCardRequest, CreateLessonRequest, LessonListResponse, LessonWithCards,
    ProgressUpdateRequest, UpdateCardRequest,
};

/// Base path of the API. Overridable at build time so the same bundle can
/// be pointed at a different host during development.
const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "/api",
};

/// Characters escaped in query-string values, matching what the browser's
/// `encodeURIComponent` would escape for the profile token.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');

/// Unified failure signal for all API operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    RequestFailed { status: u16, body: String },
    /// The request never produced a response (network failure, CORS, etc.).
    Network(String),
    /// The response body could not be decoded as the expected JSON shape.
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::RequestFailed { status: 404, .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { status, body } => {
                write!(f, "Запрос к API не удался ({}): {}", status, body)
            }
            ApiError::Network(message) => write!(f, "Сеть недоступна: {}", message),
            ApiError::Decode(message) => write!(f, "Некорректный ответ API: {}", message),
        }
    }
}

fn url(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

fn profile_query(profile: Option<&str>) -> String {
    match profile {
        Some(profile) => format!("?profile={}", utf8_percent_encode(profile, QUERY_VALUE)),
        None => String::new(),
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))
}

async fn send_json(
    builder: RequestBuilder,
    payload: &impl Serialize,
) -> Result<Response, ApiError> {
    builder
        .json(payload)
        .map_err(|err| ApiError::Decode(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))
}

/// Decodes a response body, normalizing failures. A `204 No Content`
/// response (or an entirely empty body) decodes to `None`.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::RequestFailed {
            status: response.status(),
            body,
        });
    }
    if response.status() == 204 {
        return Ok(None);
    }
    response
        .json::<T>()
        .await
        .map(Some)
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn decode_required<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    decode(response)
        .await?
        .ok_or_else(|| ApiError::Decode("пустое тело ответа".to_string()))
}

/// `GET /lessons/?profile={id}`: lessons with per-profile progress.
pub async fn get_lessons(profile: Option<&str>) -> Result<Vec<Lesson>, ApiError> {
    let path = format!("/lessons/{}", profile_query(profile));
    let response = send(Request::get(&url(&path))).await?;
    let data: LessonListResponse = decode_required(response).await?;
    Ok(data.lessons)
}

/// `GET /lessons/{id}/cards/?profile={id}`: lesson, cards, and progress.
pub async fn get_lesson_with_cards(
    lesson_id: i64,
    profile: Option<&str>,
) -> Result<LessonWithCards, ApiError> {
    let path = format!("/lessons/{}/cards/{}", lesson_id, profile_query(profile));
    let response = send(Request::get(&url(&path))).await?;
    decode_required(response).await
}

/// `POST /lessons/{id}/progress/`: idempotent progress upsert.
pub async fn update_progress(
    lesson_id: i64,
    payload: &ProgressUpdateRequest,
) -> Result<Option<Progress>, ApiError> {
    let path = format!("/lessons/{}/progress/", lesson_id);
    let response = send_json(Request::post(&url(&path)), payload).await?;
    decode(response).await
}

/// `POST /admin/lessons/`: create a lesson.
pub async fn create_lesson(payload: &CreateLessonRequest) -> Result<Lesson, ApiError> {
    let response = send_json(Request::post(&url("/admin/lessons/")), payload).await?;
    decode_required(response).await
}

/// `GET /admin/lessons/`: all lessons, no progress annotations.
pub async fn get_admin_lessons() -> Result<Vec<Lesson>, ApiError> {
    let response = send(Request::get(&url("/admin/lessons/"))).await?;
    let data: LessonListResponse = decode_required(response).await?;
    Ok(data.lessons)
}

/// `GET /admin/lessons/{id}/cards/`: lesson and its cards for authoring.
pub async fn get_admin_lesson_with_cards(lesson_id: i64) -> Result<LessonWithCards, ApiError> {
    let path = format!("/admin/lessons/{}/cards/", lesson_id);
    let response = send(Request::get(&url(&path))).await?;
    decode_required(response).await
}

/// `POST /admin/lessons/{id}/cards/`: append a card to a lesson.
pub async fn create_card(lesson_id: i64, payload: &CreateCardRequest) -> Result<Card, ApiError> {
    let path = format!("/admin/lessons/{}/cards/", lesson_id);
    let response = send_json(Request::post(&url(&path)), payload).await?;
    decode_required(response).await
}

/// `PUT /admin/cards/{id}/`: partial update of a card's text fields.
pub async fn update_card(card_id: i64, payload: &UpdateCardRequest) -> Result<Card, ApiError> {
    let path = format!("/admin/cards/{}/", card_id);
    let response = send_json(Request::put(&url(&path)), payload).await?;
    decode_required(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_query_is_url_encoded() {
        assert_eq!(profile_query(None), "");
        assert_eq!(profile_query(Some("p-1")), "?profile=p-1");
        assert_eq!(
            profile_query(Some("demo profile/1")),
            "?profile=demo%20profile%2F1"
        );
    }

    #[test]
    fn collection_routes_keep_trailing_slash() {
        assert_eq!(url("/lessons/"), "/api/lessons/");
        assert_eq!(
            format!("/lessons/{}/cards/{}", 7, profile_query(Some("p"))),
            "/lessons/7/cards/?profile=p"
        );
        assert_eq!(format!("/admin/cards/{}/", 12), "/admin/cards/12/");
    }

    #[test]
    fn not_found_is_distinguishable() {
        let err = ApiError::RequestFailed {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert!(err.is_not_found());
        let err = ApiError::RequestFailed {
            status: 500,
            body: String::new(),
        };
        assert!(!err.is_not_found());
    }
}
