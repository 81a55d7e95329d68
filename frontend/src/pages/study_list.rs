//! Learner-facing lesson list.
//!
//! Fetches the lessons for this device's profile on first render and shows
//! them as a grid of lesson tiles with progress badges. Fetch errors become
//! a page-level message; an empty server answer gets a friendly empty state.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::lesson::Lesson;

use crate::api::{self, ApiError};
use crate::components::lesson_card::LessonCard;
use crate::profile;
use crate::routes::Route;

pub enum Msg {
    Loaded(Vec<Lesson>),
    LoadFailed(ApiError),
}

pub struct StudyLessonListPage {
    profile: String,
    lessons: Vec<Lesson>,
    loading: bool,
    error: Option<String>,
}

impl Component for StudyLessonListPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        StudyLessonListPage {
            profile: profile::device_profile_id(),
            lessons: Vec::new(),
            loading: true,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
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
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <h2 class="section-title">{"Выбери урок"}</h2>
                <p class="lead">{ format!("Твой профиль: {}", self.profile) }</p>
                { if self.loading { html! { <p>{"Загружаем уроки..."}</p> } } else { html! {} } }
                {
                    if let Some(error) = &self.error {
                        html! { <p style="color: red;">{ error }</p> }
                    } else {
                        html! {}
                    }
                }
                {
                    if !self.loading && self.error.is_none() && self.lessons.is_empty() {
                        html! {
                            <div class="empty-state">
                                {"Пока нет уроков. Попроси взрослого добавить их в админке."}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="card-grid">
                    {
                        for self.lessons.iter().map(|lesson| {
                            html! {
                                <LessonCard
                                    lesson={lesson.clone()}
                                    href={Route::StudyLesson(lesson.id).href()}
                                />
                            }
                        })
                    }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let profile = self.profile.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::get_lessons(Some(&profile)).await {
                    Ok(lessons) => link.send_message(Msg::Loaded(lessons)),
                    Err(err) => link.send_message(Msg::LoadFailed(err)),
                }
            });
        }
    }
}
