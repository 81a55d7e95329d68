use common::model::card::Card;
use common::requests::LessonWithCards;

use crate::api::ApiError;

pub enum Msg {
    CardsLoaded(Box<LessonWithCards>),
    LoadFailed(ApiError),
    Flip,
    Next,
    Prev,
    Speak(Card),
}
