use common::model::card::Card;
use yew::prelude::*;

/// Two-faced card: English term (with optional picture and audio controls)
/// on the front, translation on the back. Clicking anywhere on the card
/// flips it; the buttons stop propagation so they don't double-flip.
#[derive(Properties, PartialEq, Clone)]
pub struct FlashcardProps {
    pub card: Card,
    pub flipped: bool,
    pub on_toggle: Callback<()>,
    pub on_speak: Callback<Card>,
}

pub struct Flashcard;

impl Component for Flashcard {
    type Message = ();
    type Properties = FlashcardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Flashcard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let card = props.card.clone();

        let on_toggle = props.on_toggle.clone();
        let container_toggle = Callback::from(move |_: MouseEvent| on_toggle.emit(()));

        let on_toggle = props.on_toggle.clone();
        let button_toggle = Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_toggle.emit(());
        });

        let on_speak = props.on_speak.clone();
        let speak_card = card.clone();
        let speak = Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_speak.emit(speak_card.clone());
        });

        html! {
            <div class="flashcard-container" onclick={container_toggle} role="button">
                <div class={classes!("flashcard-inner", props.flipped.then_some("flipped"))}>
                    <div class="flashcard-face front">
                        {
                            if let Some(image) = &card.image {
                                html! {
                                    <img
                                        src={image.clone()}
                                        alt={format!("Иллюстрация для {}", card.english_text)}
                                        class="card-image"
                                    />
                                }
                            } else {
                                html! {}
                            }
                        }
                        <div class="flashcard-term">{ &card.english_text }</div>
                        <div class="audio-controls">
                            <button type="button" class="button" onclick={speak}>
                                {"🔊 Озвучить"}
                            </button>
                            <button type="button" class="button secondary" onclick={button_toggle}>
                                {"↩ Перевернуть"}
                            </button>
                        </div>
                    </div>
                    <div class="flashcard-face back">
                        <div class="flashcard-translation">
                            {
                                if card.translation.is_empty() {
                                    "Перевод не задан".to_string()
                                } else {
                                    card.translation.clone()
                                }
                            }
                        </div>
                    </div>
                </div>
            </div>
        }
    }
}
