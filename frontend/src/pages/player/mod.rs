//! Lesson player: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, and view rendering.
//!
//! On first render the lesson and its cards are fetched together with any
//! stored progress for this device's profile; the walkthrough then starts
//! at the stored card index (clamped into range).

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::profile;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PlayerProps;
pub use state::LessonPlayerPage;

use state::Phase;

impl Component for LessonPlayerPage {
    type Message = Msg;
    type Properties = PlayerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LessonPlayerPage {
            profile: profile::device_profile_id(),
            phase: Phase::Loading,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let lesson_id = ctx.props().lesson_id;
            let profile = self.profile.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::get_lesson_with_cards(lesson_id, Some(&profile)).await {
                    Ok(data) => link.send_message(Msg::CardsLoaded(Box::new(data))),
                    Err(err) => link.send_message(Msg::LoadFailed(err)),
                }
            });
        }
    }
}
