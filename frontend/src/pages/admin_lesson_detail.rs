//! Admin view of a single lesson: card creation form and the card table.
//!
//! Cards can be edited in place (text, translation, order, the only
//! fields the API allows to change); saving replaces the row in local
//! state with the server's version of the card. Creation appends to the
//! local list without refetching, mirroring the lesson form.

use gloo_timers::future::TimeoutFuture;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::card::Card;
use common::model::lesson::Lesson;
use common::requests::{CreateCardRequest, LessonWithCards, UpdateCardRequest};

use crate::api::{self, ApiError};
use crate::routes::Route;

/// Builds the creation payload from the form fields. Both texts must be
/// non-empty after trimming; the server assigns the order.
fn validate_card_form(english_text: &str, translation: &str) -> Result<CreateCardRequest, String> {
    let english_text = english_text.trim();
    let translation = translation.trim();
    if english_text.is_empty() || translation.is_empty() {
        return Err("Заполните слово и перевод".to_string());
    }
    Ok(CreateCardRequest {
        english_text: english_text.to_string(),
        translation: translation.to_string(),
        order: None,
    })
}

/// In-place edit buffer for one card row. `order` is kept as the raw input
/// string until save so partial input doesn't fight the keyboard.
#[derive(Clone, PartialEq)]
pub struct CardDraft {
    pub card_id: i64,
    pub english_text: String,
    pub translation: String,
    pub order: String,
}

impl CardDraft {
    fn from_card(card: &Card) -> CardDraft {
        CardDraft {
            card_id: card.id,
            english_text: card.english_text.clone(),
            translation: card.translation.clone(),
            order: card.order.to_string(),
        }
    }

    /// Turns the draft into an update payload, or a user-facing message
    /// when a field is empty or the order is not a number.
    fn payload(&self) -> Result<UpdateCardRequest, String> {
        let english_text = self.english_text.trim();
        let translation = self.translation.trim();
        if english_text.is_empty() || translation.is_empty() {
            return Err("Заполните слово и перевод".to_string());
        }
        let order: u32 = self
            .order
            .trim()
            .parse()
            .map_err(|_| "Порядок должен быть числом".to_string())?;
        Ok(UpdateCardRequest {
            english_text: Some(english_text.to_string()),
            translation: Some(translation.to_string()),
            order: Some(order),
        })
    }
}

pub enum Msg {
    Loaded(Box<LessonWithCards>),
    LoadFailed(ApiError),
    UpdateEnglish(String),
    UpdateTranslation(String),
    Submit,
    Created(Card),
    CreateFailed(ApiError),
    BeginEdit(i64),
    CancelEdit,
    EditEnglish(String),
    EditTranslation(String),
    EditOrder(String),
    SaveEdit,
    EditSaved(Card),
    EditFailed(ApiError),
    ClearSuccess,
}

#[derive(Properties, PartialEq, Clone)]
pub struct AdminLessonDetailProps {
    pub lesson_id: i64,
}

pub struct AdminLessonDetailPage {
    lesson: Option<Lesson>,
    cards: Vec<Card>,
    english_text: String,
    translation: String,
    draft: Option<CardDraft>,
    loading: bool,
    error: Option<String>,
    success: Option<String>,
}

impl Component for AdminLessonDetailPage {
    type Message = Msg;
    type Properties = AdminLessonDetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminLessonDetailPage {
            lesson: None,
            cards: Vec::new(),
            english_text: String::new(),
            translation: String::new(),
            draft: None,
            loading: true,
            error: None,
            success: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(data) => {
                let data = *data;
                self.lesson = Some(data.lesson);
                self.cards = data.cards;
                self.loading = false;
                true
            }
            Msg::LoadFailed(err) => {
                self.error = Some(if err.is_not_found() {
                    "Урок не найден.".to_string()
                } else {
                    err.to_string()
                });
                self.loading = false;
                true
            }
            Msg::UpdateEnglish(text) => {
                self.english_text = text;
                true
            }
            Msg::UpdateTranslation(text) => {
                self.translation = text;
                true
            }
            Msg::Submit => match validate_card_form(&self.english_text, &self.translation) {
                Ok(payload) => {
                    let lesson_id = ctx.props().lesson_id;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match api::create_card(lesson_id, &payload).await {
                            Ok(card) => link.send_message(Msg::Created(card)),
                            Err(err) => link.send_message(Msg::CreateFailed(err)),
                        }
                    });
                    false
                }
                Err(message) => {
                    self.error = Some(message);
                    true
                }
            },
            Msg::Created(card) => {
                self.success = Some(format!("Карточка «{}» добавлена", card.english_text));
                self.cards.push(card);
                self.english_text.clear();
                self.translation.clear();
                self.error = None;
                dismiss_later(ctx);
                true
            }
            Msg::CreateFailed(err) => {
                self.error = Some(err.to_string());
                true
            }
            Msg::BeginEdit(card_id) => {
                self.draft = self
                    .cards
                    .iter()
                    .find(|card| card.id == card_id)
                    .map(CardDraft::from_card);
                self.error = None;
                true
            }
            Msg::CancelEdit => {
                self.draft = None;
                true
            }
            Msg::EditEnglish(text) => {
                if let Some(draft) = &mut self.draft {
                    draft.english_text = text;
                }
                true
            }
            Msg::EditTranslation(text) => {
                if let Some(draft) = &mut self.draft {
                    draft.translation = text;
                }
                true
            }
            Msg::EditOrder(text) => {
                if let Some(draft) = &mut self.draft {
                    draft.order = text;
                }
                true
            }
            Msg::SaveEdit => {
                let Some(draft) = &self.draft else {
                    return false;
                };
                match draft.payload() {
                    Ok(payload) => {
                        let card_id = draft.card_id;
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            match api::update_card(card_id, &payload).await {
                                Ok(card) => link.send_message(Msg::EditSaved(card)),
                                Err(err) => link.send_message(Msg::EditFailed(err)),
                            }
                        });
                        false
                    }
                    Err(message) => {
                        self.error = Some(message);
                        true
                    }
                }
            }
            Msg::EditSaved(card) => {
                if let Some(slot) = self.cards.iter_mut().find(|c| c.id == card.id) {
                    *slot = card;
                }
                self.draft = None;
                self.error = None;
                true
            }
            Msg::EditFailed(err) => {
                self.error = Some(err.to_string());
                true
            }
            Msg::ClearSuccess => {
                self.success = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading && self.lesson.is_none() {
            return html! { <p>{"Загружаем урок..."}</p> };
        }

        let lesson = match &self.lesson {
            Some(lesson) => lesson,
            None => {
                if let Some(error) = &self.error {
                    return html! { <p style="color: red;">{ error }</p> };
                }
                return html! { <p>{"Урок не найден."}</p> };
            }
        };

        let link = ctx.link();

        html! {
            <div>
                <a href={Route::Admin.href()} class="button secondary">{"← Назад к списку уроков"}</a>
                <h2 class="section-title">{ &lesson.title }</h2>
                <p class="lead">{ &lesson.description }</p>

                <form
                    class="card"
                    style="margin-top: 1.5rem;"
                    onsubmit={link.callback(|event: SubmitEvent| {
                        event.prevent_default();
                        Msg::Submit
                    })}
                >
                    <h3>{"Добавить карточку"}</h3>
                    <div class="form-field">
                        <label for="english-text">{"Английское слово или фраза"}</label>
                        <input
                            id="english-text"
                            value={self.english_text.clone()}
                            oninput={link.callback(|event: InputEvent| {
                                let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                                Msg::UpdateEnglish(input.value())
                            })}
                            placeholder="Например, cat"
                        />
                    </div>
                    <div class="form-field">
                        <label for="translation">{"Перевод"}</label>
                        <input
                            id="translation"
                            value={self.translation.clone()}
                            oninput={link.callback(|event: InputEvent| {
                                let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                                Msg::UpdateTranslation(input.value())
                            })}
                            placeholder="Например, кот"
                        />
                    </div>
                    <button type="submit" class="button">{"+ Добавить карточку"}</button>
                </form>

                {
                    if let Some(error) = &self.error {
                        html! { <p style="color: red;">{ error }</p> }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(success) = &self.success {
                        html! { <p style="color: green;">{ success }</p> }
                    } else {
                        html! {}
                    }
                }

                <table class="table">
                    <thead>
                        <tr>
                            <th>{"#"}</th>
                            <th>{"Английское слово"}</th>
                            <th>{"Перевод"}</th>
                            <th>{"Порядок"}</th>
                            <th>{"Медиа"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for self.cards.iter().enumerate().map(|(position, card)| {
                                match &self.draft {
                                    Some(draft) if draft.card_id == card.id => {
                                        self.edit_row(position, draft, link)
                                    }
                                    _ => self.display_row(position, card, link),
                                }
                            })
                        }
                    </tbody>
                </table>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let lesson_id = ctx.props().lesson_id;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::get_admin_lesson_with_cards(lesson_id).await {
                    Ok(data) => link.send_message(Msg::Loaded(Box::new(data))),
                    Err(err) => link.send_message(Msg::LoadFailed(err)),
                }
            });
        }
    }
}

impl AdminLessonDetailPage {
    fn display_row(&self, position: usize, card: &Card, link: &Scope<Self>) -> Html {
        let card_id = card.id;
        html! {
            <tr key={card.id.to_string()}>
                <td>{ position + 1 }</td>
                <td>{ &card.english_text }</td>
                <td>{ &card.translation }</td>
                <td>{ card.order }</td>
                <td>
                    { if card.image.is_some() { html! { <span class="badge">{"🖼 Изображение"}</span> } } else { html! { {"—"} } } }
                    { if card.audio.is_some() { html! { <span class="badge">{" 🔊 Аудио"}</span> } } else { html! {} } }
                </td>
                <td>
                    <button
                        type="button"
                        class="button secondary"
                        onclick={link.callback(move |_| Msg::BeginEdit(card_id))}
                    >
                        {"✏ Изменить"}
                    </button>
                </td>
            </tr>
        }
    }

    fn edit_row(&self, position: usize, draft: &CardDraft, link: &Scope<Self>) -> Html {
        html! {
            <tr key={draft.card_id.to_string()}>
                <td>{ position + 1 }</td>
                <td>
                    <input
                        value={draft.english_text.clone()}
                        oninput={link.callback(|event: InputEvent| {
                            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                            Msg::EditEnglish(input.value())
                        })}
                    />
                </td>
                <td>
                    <input
                        value={draft.translation.clone()}
                        oninput={link.callback(|event: InputEvent| {
                            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                            Msg::EditTranslation(input.value())
                        })}
                    />
                </td>
                <td>
                    <input
                        value={draft.order.clone()}
                        size="4"
                        oninput={link.callback(|event: InputEvent| {
                            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                            Msg::EditOrder(input.value())
                        })}
                    />
                </td>
                <td>{"—"}</td>
                <td>
                    <button type="button" class="button" onclick={link.callback(|_| Msg::SaveEdit)}>
                        {"💾 Сохранить"}
                    </button>
                    <button
                        type="button"
                        class="button secondary"
                        onclick={link.callback(|_| Msg::CancelEdit)}
                    >
                        {"Отмена"}
                    </button>
                </td>
            </tr>
        }
    }
}

/// Clears the success message a few seconds after it appeared.
fn dismiss_later(ctx: &Context<AdminLessonDetailPage>) {
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(3000).await;
        link.send_message(Msg::ClearSuccess);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_form_trims_both_fields() {
        let payload = validate_card_form(" cat ", " кот ").unwrap();
        assert_eq!(payload.english_text, "cat");
        assert_eq!(payload.translation, "кот");
        assert_eq!(payload.order, None);
    }

    #[test]
    fn blank_fields_are_rejected_locally() {
        assert!(validate_card_form("", "кот").is_err());
        assert!(validate_card_form("cat", "   ").is_err());
    }

    #[test]
    fn draft_payload_carries_all_editable_fields() {
        let draft = CardDraft {
            card_id: 5,
            english_text: " dog ".to_string(),
            translation: "собака".to_string(),
            order: "3".to_string(),
        };
        let payload = draft.payload().unwrap();
        assert_eq!(payload.english_text.as_deref(), Some("dog"));
        assert_eq!(payload.translation.as_deref(), Some("собака"));
        assert_eq!(payload.order, Some(3));
    }

    #[test]
    fn draft_rejects_non_numeric_order() {
        let draft = CardDraft {
            card_id: 5,
            english_text: "dog".to_string(),
            translation: "собака".to_string(),
            order: "три".to_string(),
        };
        assert!(draft.payload().is_err());
    }
}
