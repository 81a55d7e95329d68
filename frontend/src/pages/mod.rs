pub mod admin_lesson_detail;
pub mod admin_lessons;
pub mod home;
pub mod player;
pub mod study_list;
