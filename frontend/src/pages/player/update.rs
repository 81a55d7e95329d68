//! Update logic for the lesson player.
//!
//! Navigation transitions are delegated to the pure `PlayerState`; this
//! module adds the side effects. Each index change spawns a progress write
//! that nobody awaits or joins: the walkthrough must stay responsive even
//! when the write fails, so failures are logged to the console and dropped.

use gloo_console::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::ProgressUpdateRequest;

use crate::api;
use crate::speech;

use super::messages::Msg;
use super::state::{LessonPlayerPage, Phase, PlayerState};

pub fn update(component: &mut LessonPlayerPage, ctx: &Context<LessonPlayerPage>, msg: Msg) -> bool {
    match msg {
        Msg::CardsLoaded(data) => {
            let data = *data;
            let state = PlayerState::new(data.lesson, data.cards, data.progress.as_ref());
            if !state.cards.is_empty() {
                push_progress(
                    ctx.props().lesson_id,
                    state.progress_payload(&component.profile),
                );
            }
            component.phase = Phase::Ready(state);
            true
        }
        Msg::LoadFailed(err) => {
            component.phase = if err.is_not_found() {
                Phase::NotFound
            } else {
                Phase::Failed(err.to_string())
            };
            true
        }
        Msg::Flip => {
            if let Phase::Ready(state) = &mut component.phase {
                state.flip();
                return true;
            }
            false
        }
        Msg::Next => {
            if let Phase::Ready(state) = &mut component.phase {
                if state.next() {
                    push_progress(
                        ctx.props().lesson_id,
                        state.progress_payload(&component.profile),
                    );
                }
                return true;
            }
            false
        }
        Msg::Prev => {
            if let Phase::Ready(state) = &mut component.phase {
                if state.prev() {
                    push_progress(
                        ctx.props().lesson_id,
                        state.progress_payload(&component.profile),
                    );
                }
                return true;
            }
            false
        }
        Msg::Speak(card) => {
            speech::speak(&card);
            false
        }
    }
}

/// Fire-and-forget progress write. Failure is intentionally unobserved by
/// the UI; the console note is only there for debugging.
fn push_progress(lesson_id: i64, payload: ProgressUpdateRequest) {
    spawn_local(async move {
        if let Err(err) = api::update_progress(lesson_id, &payload).await {
            warn!(format!("не удалось сохранить прогресс: {}", err));
        }
    });
}
