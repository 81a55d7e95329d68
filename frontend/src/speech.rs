//! Card audio playback.
//!
//! Cards with a pre-recorded audio URL play that file; everything else goes
//! through the browser's speech synthesis with an `en-US` voice. Playback is
//! best-effort: there is no queue, any currently speaking utterance is
//! cancelled first, and failures are silently ignored.

use common::model::card::Card;
use web_sys::{HtmlAudioElement, SpeechSynthesisUtterance};

pub fn speak(card: &Card) {
    if let Some(audio_url) = &card.audio {
        if let Ok(audio) = HtmlAudioElement::new_with_src(audio_url) {
            let _ = audio.play();
        }
        return;
    }

    if let Some(window) = web_sys::window() {
        if let Ok(synthesis) = window.speech_synthesis() {
            if let Ok(utterance) = SpeechSynthesisUtterance::new_with_text(&card.english_text) {
                utterance.set_lang("en-US");
                synthesis.cancel();
                synthesis.speak(&utterance);
            }
        }
    }
}
