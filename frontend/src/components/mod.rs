pub mod flashcard;
pub mod lesson_card;
pub mod progress_indicator;
