//! Pure state for the lesson player.
//!
//! Everything here is browser-free on purpose: the navigation and
//! completion rules are plain data transitions, so they can be unit tested
//! without a DOM. `update.rs` layers the side effects (progress writes,
//! speech) on top of the transitions.

use common::model::card::Card;
use common::model::lesson::Lesson;
use common::model::progress::Progress;
use common::requests::ProgressUpdateRequest;

/// Component state: which stage of loading the page is in.
pub struct LessonPlayerPage {
    pub profile: String,
    pub phase: Phase,
}

pub enum Phase {
    Loading,
    /// The lesson id did not resolve to a lesson.
    NotFound,
    /// The fetch failed for any other reason; holds the user-facing text.
    Failed(String),
    Ready(PlayerState),
}

/// The flashcard walkthrough itself.
///
/// Invariants, given `n = cards.len() > 0`:
/// - `index` stays within `[0, n-1]` under any sequence of transitions;
/// - `completed` becomes true once `index` reaches `n-1` and is never
///   cleared by navigation afterwards.
pub struct PlayerState {
    pub lesson: Lesson,
    pub cards: Vec<Card>,
    pub index: usize,
    pub flipped: bool,
    pub completed: bool,
}

impl PlayerState {
    /// Enters the walkthrough from a fetched lesson, clamping any stored
    /// progress index into range (the lesson may have shrunk since the
    /// progress record was written).
    pub fn new(lesson: Lesson, cards: Vec<Card>, progress: Option<&Progress>) -> PlayerState {
        let last = cards.len().saturating_sub(1);
        let start = progress
            .map(|p| p.current_card_index as usize)
            .unwrap_or(0);
        let mut state = PlayerState {
            lesson,
            cards,
            index: start.min(last),
            flipped: false,
            completed: progress.map(|p| p.completed).unwrap_or(false),
        };
        state.derive_completion();
        state
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn active_card(&self) -> Option<&Card> {
        self.cards.get(self.index)
    }

    pub fn at_first_card(&self) -> bool {
        self.index == 0
    }

    pub fn at_last_card(&self) -> bool {
        !self.cards.is_empty() && self.index == self.cards.len() - 1
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Advances to the next card. Returns whether the index changed, which
    /// is what decides if a progress write goes out.
    pub fn next(&mut self) -> bool {
        self.flipped = false;
        let previous = self.index;
        self.index = (self.index + 1).min(self.cards.len().saturating_sub(1));
        self.derive_completion();
        self.index != previous
    }

    /// Steps back one card. Completion is monotonic and stays set.
    pub fn prev(&mut self) -> bool {
        self.flipped = false;
        let previous = self.index;
        self.index = self.index.saturating_sub(1);
        self.index != previous
    }

    /// Shown-as-complete: either completion has been reached, or the child
    /// is looking at the back of the last card right now.
    pub fn display_completed(&self) -> bool {
        self.completed || (self.at_last_card() && self.flipped)
    }

    /// The write-back payload for the current position.
    pub fn progress_payload(&self, profile: &str) -> ProgressUpdateRequest {
        ProgressUpdateRequest {
            profile: profile.to_string(),
            current_card_index: Some(self.index as u32),
            completed: Some(self.at_last_card()),
        }
    }

    fn derive_completion(&mut self) {
        if self.at_last_card() {
            self.completed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(total: u32) -> Lesson {
        Lesson {
            id: 1,
            title: "Животные".to_string(),
            description: String::new(),
            total_cards: total,
            cover_image: None,
            progress: None,
        }
    }

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card {
                id: i as i64,
                lesson_id: 1,
                english_text: format!("word-{}", i),
                translation: format!("слово-{}", i),
                order: i as u32 + 1,
                image: None,
                audio: None,
            })
            .collect()
    }

    fn progress(index: u32, completed: bool) -> Progress {
        Progress {
            profile: "p-1".to_string(),
            lesson_id: 1,
            current_card_index: index,
            completed,
            updated_at: "2024-05-01T10:00:00".to_string(),
            total_cards: None,
        }
    }

    #[test]
    fn starts_at_zero_without_progress() {
        let state = PlayerState::new(lesson(3), cards(3), None);
        assert_eq!(state.index, 0);
        assert!(!state.flipped);
        assert!(!state.completed);
    }

    #[test]
    fn resumes_from_server_progress() {
        let state = PlayerState::new(lesson(3), cards(3), Some(&progress(1, false)));
        assert_eq!(state.index, 1);
    }

    #[test]
    fn stale_progress_index_is_clamped() {
        // The lesson lost cards since the progress record was written.
        let state = PlayerState::new(lesson(2), cards(2), Some(&progress(7, false)));
        assert_eq!(state.index, 1);
        assert!(state.completed);
    }

    #[test]
    fn index_stays_in_bounds_for_any_walk() {
        let mut state = PlayerState::new(lesson(4), cards(4), None);
        let walk = [
            true, true, true, true, true, false, false, false, false, true, false, true,
        ];
        for forward in walk {
            if forward {
                state.next();
            } else {
                state.prev();
            }
            assert!(state.index < state.total());
        }
    }

    #[test]
    fn next_at_last_index_keeps_index_and_completion() {
        let mut state = PlayerState::new(lesson(2), cards(2), None);
        assert!(state.next());
        assert_eq!(state.index, 1);
        assert!(state.completed);
        assert!(!state.next());
        assert_eq!(state.index, 1);
        assert!(state.completed);
    }

    #[test]
    fn prev_at_zero_is_a_noop() {
        let mut state = PlayerState::new(lesson(2), cards(2), None);
        assert!(!state.prev());
        assert_eq!(state.index, 0);
    }

    #[test]
    fn completion_survives_going_back() {
        let mut state = PlayerState::new(lesson(3), cards(3), None);
        state.next();
        state.next();
        assert!(state.completed);
        state.prev();
        state.prev();
        assert!(state.completed);
    }

    #[test]
    fn flip_only_toggles_and_navigation_resets_it() {
        let mut state = PlayerState::new(lesson(2), cards(2), None);
        state.flip();
        assert!(state.flipped);
        assert_eq!(state.index, 0);
        state.next();
        assert!(!state.flipped);
    }

    #[test]
    fn three_card_walkthrough_payload() {
        let mut state = PlayerState::new(lesson(3), cards(3), None);
        assert_eq!(state.index, 0);
        state.next();
        state.next();
        assert_eq!(state.index, 2);
        assert!(state.completed);

        let payload = state.progress_payload("p-1");
        assert_eq!(payload.current_card_index, Some(2));
        assert_eq!(payload.completed, Some(true));
    }

    #[test]
    fn display_completion_on_flipped_last_card() {
        // Entering directly on the last card derives completion.
        let state = PlayerState::new(lesson(2), cards(2), Some(&progress(1, false)));
        assert!(state.completed);

        let mut fresh = PlayerState::new(lesson(3), cards(3), Some(&progress(1, false)));
        assert!(!fresh.display_completed());
        fresh.next();
        fresh.flip();
        assert!(fresh.display_completed());
    }

    #[test]
    fn single_card_lesson_is_complete_immediately() {
        let state = PlayerState::new(lesson(1), cards(1), None);
        assert!(state.completed);
        let payload = state.progress_payload("p-1");
        assert_eq!(payload.current_card_index, Some(0));
        assert_eq!(payload.completed, Some(true));
    }
}
