pub mod card;
pub mod lesson;
pub mod progress;
