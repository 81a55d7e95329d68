//! Application shell: shared layout plus hash routing.
//!
//! The current `Route` is component state; a `hashchange` listener keeps it
//! in sync with the address bar so anchors and the browser's back button
//! both work. Pages with an id in the route get a `key` so switching
//! lessons remounts the page and re-runs its first-render fetch.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::{html, Component, Context, Html};

use crate::pages::admin_lesson_detail::AdminLessonDetailPage;
use crate::pages::admin_lessons::AdminLessonsPage;
use crate::pages::home::HomePage;
use crate::pages::player::LessonPlayerPage;
use crate::pages::study_list::StudyLessonListPage;
use crate::routes::Route;

pub enum Msg {
    RouteChanged(Route),
}

pub struct App {
    route: Route,
    hashchange: Option<Closure<dyn FnMut()>>,
}

fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();
    Route::parse(&hash)
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let listener = Closure::wrap(Box::new(move || {
            link.send_message(Msg::RouteChanged(current_route()));
        }) as Box<dyn FnMut()>);
        if let Some(window) = web_sys::window() {
            window
                .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
                .ok();
        }

        App {
            route: current_route(),
            hashchange: Some(listener),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::RouteChanged(route) => {
                let changed = route != self.route;
                self.route = route;
                changed
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let page = match self.route {
            Route::Home => html! { <HomePage /> },
            Route::Study => html! { <StudyLessonListPage /> },
            Route::StudyLesson(id) => {
                html! { <LessonPlayerPage key={id.to_string()} lesson_id={id} /> }
            }
            Route::Admin => html! { <AdminLessonsPage /> },
            Route::AdminLesson(id) => {
                html! { <AdminLessonDetailPage key={id.to_string()} lesson_id={id} /> }
            }
        };

        html! {
            <div class="app-shell">
                <header class="app-header">
                    <a href={Route::Home.href()} class="brand">{"English Buddy"}</a>
                    <nav class="main-nav">
                        <a href={Route::Study.href()}>{"Изучай!"}</a>
                        <a href={Route::Admin.href()}>{"Админка"}</a>
                    </nav>
                </header>
                <main class="app-content">{ page }</main>
                <footer class="app-footer">
                    {"Сделано для обучения детей английскому языку."}
                </footer>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.hashchange.take()) {
            window
                .remove_event_listener_with_callback(
                    "hashchange",
                    listener.as_ref().unchecked_ref(),
                )
                .ok();
        }
    }
}
