//! Admin lesson list with the lesson creation form.
//!
//! Validation is local: an empty (after trimming) title shows a message and
//! issues no request. On success the created lesson is appended to the
//! in-memory list instead of refetching the collection.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::lesson::Lesson;
use common::requests::CreateLessonRequest;

use crate::api::{self, ApiError};
use crate::routes::Route;

/// Builds the creation payload, trimming the title. An empty title is a
/// local validation failure and must not reach the network.
fn validate_lesson_form(title: &str, description: &str) -> Result<CreateLessonRequest, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Укажите название урока".to_string());
    }
    Ok(CreateLessonRequest {
        title: title.to_string(),
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        },
    })
}

pub enum Msg {
    Loaded(Vec<Lesson>),
    LoadFailed(ApiError),
    UpdateTitle(String),
    UpdateDescription(String),
    Submit,
    Created(Lesson),
    CreateFailed(ApiError),
    ClearSuccess,
}

pub struct AdminLessonsPage {
    lessons: Vec<Lesson>,
    title: String,
    description: String,
    loading: bool,
    error: Option<String>,
    success: Option<String>,
}

impl Component for AdminLessonsPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AdminLessonsPage {
            lessons: Vec::new(),
            title: String::new(),
            description: String::new(),
            loading: true,
            error: None,
            success: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(lessons) => {
                self.lessons = lessons;
                self.loading = false;
                true
            }
            Msg::LoadFailed(err) => {
                self.error = Some(err.to_string());
                self.loading = false;
                true
            }
            Msg::UpdateTitle(title) => {
                self.title = title;
                true
            }
            Msg::UpdateDescription(description) => {
                self.description = description;
                true
            }
            Msg::Submit => {
                match validate_lesson_form(&self.title, &self.description) {
                    Ok(payload) => {
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            match api::create_lesson(&payload).await {
                                Ok(lesson) => link.send_message(Msg::Created(lesson)),
                                Err(err) => link.send_message(Msg::CreateFailed(err)),
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
            Msg::Created(lesson) => {
                self.success = Some(format!("Урок «{}» создан", lesson.title));
                self.lessons.push(lesson);
                self.title.clear();
                self.description.clear();
                self.error = None;
                dismiss_later(ctx);
                true
            }
            Msg::CreateFailed(err) => {
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
        let link = ctx.link();

        html! {
            <div>
                <h2 class="section-title">{"Админка: уроки"}</h2>
                <p class="lead">
                    {"Добавляйте новые уроки и управляйте карточками. Изображения и аудио \
                      загружаются отдельным инструментом."}
                </p>

                <form
                    class="card"
                    style="margin-bottom: 2rem;"
                    onsubmit={link.callback(|event: SubmitEvent| {
                        event.prevent_default();
                        Msg::Submit
                    })}
                >
                    <h3>{"Создать урок"}</h3>
                    <div class="form-field">
                        <label for="lesson-title">{"Название"}</label>
                        <input
                            id="lesson-title"
                            value={self.title.clone()}
                            oninput={link.callback(|event: InputEvent| {
                                let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                                Msg::UpdateTitle(input.value())
                            })}
                            placeholder="Например, Животные"
                        />
                    </div>
                    <div class="form-field">
                        <label for="lesson-description">{"Описание"}</label>
                        <textarea
                            id="lesson-description"
                            value={self.description.clone()}
                            oninput={link.callback(|event: InputEvent| {
                                let input: web_sys::HtmlTextAreaElement = event.target_unchecked_into();
                                Msg::UpdateDescription(input.value())
                            })}
                            placeholder="Опишите цель урока"
                        />
                    </div>
                    <button type="submit" class="button">{"+ Создать урок"}</button>
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
                { if self.loading { html! { <p>{"Загружаем уроки..."}</p> } } else { html! {} } }

                <div class="card-grid">
                    {
                        for self.lessons.iter().map(|lesson| {
                            html! {
                                <a href={Route::AdminLesson(lesson.id).href()} class="card">
                                    <h3>{ &lesson.title }</h3>
                                    <p>{ &lesson.description }</p>
                                    <div class="progress-pill">
                                        { format!("{} карточек", lesson.total_cards) }
                                    </div>
                                </a>
                            }
                        })
                    }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::get_admin_lessons().await {
                    Ok(lessons) => link.send_message(Msg::Loaded(lessons)),
                    Err(err) => link.send_message(Msg::LoadFailed(err)),
                }
            });
        }
    }
}

/// Clears the success message a few seconds after it appeared.
fn dismiss_later(ctx: &Context<AdminLessonsPage>) {
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
    fn trims_the_title() {
        let payload = validate_lesson_form("  Animals  ", "").unwrap();
        assert_eq!(payload.title, "Animals");
        assert_eq!(payload.description, None);
    }

    #[test]
    fn empty_title_is_rejected_locally() {
        assert!(validate_lesson_form("", "описание").is_err());
        assert!(validate_lesson_form("   ", "").is_err());
    }

    #[test]
    fn description_is_passed_through_when_present() {
        let payload = validate_lesson_form("Animals", "Про зверей").unwrap();
        assert_eq!(payload.description.as_deref(), Some("Про зверей"));
    }
}
