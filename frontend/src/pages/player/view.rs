//! View rendering for the lesson player.
//!
//! One branch per phase: loading text, error text, "lesson not found",
//! empty lesson, or the interactive walkthrough (flashcard, prev/next
//! controls, progress indicator, completion badge).

use yew::prelude::*;

use crate::components::flashcard::Flashcard;
use crate::components::progress_indicator::ProgressIndicator;
use crate::routes::Route;

use super::messages::Msg;
use super::state::{LessonPlayerPage, Phase, PlayerState};

pub fn view(component: &LessonPlayerPage, ctx: &Context<LessonPlayerPage>) -> Html {
    match &component.phase {
        Phase::Loading => html! { <p>{"Загружаем карточки..."}</p> },
        Phase::NotFound => html! { <p>{"Урок не найден."}</p> },
        Phase::Failed(message) => html! { <p style="color: red;">{ message }</p> },
        Phase::Ready(state) => {
            if state.cards.is_empty() {
                html! { <div class="empty-state">{"В этом уроке пока нет карточек."}</div> }
            } else {
                walkthrough(state, ctx)
            }
        }
    }
}

fn walkthrough(state: &PlayerState, ctx: &Context<LessonPlayerPage>) -> Html {
    let link = ctx.link();
    let card = match state.active_card() {
        Some(card) => card.clone(),
        None => return html! {},
    };

    html! {
        <div>
            <a href={Route::Study.href()} class="button secondary">{"← Назад к урокам"}</a>
            <h2 class="section-title">{ &state.lesson.title }</h2>
            <p class="lead">{ &state.lesson.description }</p>

            <Flashcard
                card={card}
                flipped={state.flipped}
                on_toggle={link.callback(|_| Msg::Flip)}
                on_speak={link.callback(Msg::Speak)}
            />

            <div class="carousel-controls">
                <button
                    type="button"
                    class="button secondary"
                    onclick={link.callback(|_| Msg::Prev)}
                    disabled={state.at_first_card()}
                >
                    {"← Предыдущая"}
                </button>
                <button
                    type="button"
                    class="button"
                    onclick={link.callback(|_| Msg::Next)}
                    disabled={state.at_last_card()}
                >
                    {"Следующая →"}
                </button>
            </div>

            <ProgressIndicator current_index={state.index} total={state.total()} />

            {
                if state.display_completed() {
                    html! {
                        <div class="badge" style="margin-top: 1.5rem;">
                            {"🎉 Урок завершён! Молодец!"}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
