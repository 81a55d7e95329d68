use yew::prelude::*;

/// Properties for the lesson player page.
#[derive(Properties, PartialEq, Clone)]
pub struct PlayerProps {
    /// Lesson to study; comes from the `#/study/lessons/{id}` route.
    pub lesson_id: i64,
}
