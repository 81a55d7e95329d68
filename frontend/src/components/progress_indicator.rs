use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressIndicatorProps {
    pub current_index: usize,
    pub total: usize,
}

pub struct ProgressIndicator;

impl Component for ProgressIndicator {
    type Message = ();
    type Properties = ProgressIndicatorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProgressIndicator
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="progress-indicator">
                { format!("Карточка {} из {}", props.current_index + 1, props.total) }
            </div>
        }
    }
}
