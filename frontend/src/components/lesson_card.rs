use common::model::lesson::Lesson;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LessonCardProps {
    pub lesson: Lesson,
    /// Hash fragment the card links to.
    pub href: String,
}

/// Clickable lesson tile for the study list: cover, title, description,
/// card count, and the learner's progress badge when the server sent one.
pub struct LessonCard;

impl Component for LessonCard {
    type Message = ();
    type Properties = LessonCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LessonCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let lesson = &ctx.props().lesson;
        let total_cards_label = if lesson.total_cards == 1 {
            "1 карточка".to_string()
        } else {
            format!("{} карточек", lesson.total_cards)
        };

        html! {
            <a href={ctx.props().href.clone()} class="card">
                {
                    if let Some(cover) = &lesson.cover_image {
                        html! { <img src={cover.clone()} alt="Обложка урока" class="lesson-cover" /> }
                    } else {
                        html! {}
                    }
                }
                <h3>{ &lesson.title }</h3>
                <p>{ &lesson.description }</p>
                <div class="progress-pill">{ total_cards_label }</div>
                {
                    if let Some(progress) = &lesson.progress {
                        let total = progress.total_cards.unwrap_or(lesson.total_cards);
                        html! {
                            <div class="badge">
                                { format!("Прогресс: {}/{}", progress.current_card_index + 1, total) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </a>
        }
    }
}
