use yew::{html, Component, Context, Html};

use crate::routes::Route;

pub struct HomePage;

impl Component for HomePage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        HomePage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <h1 class="section-title">{"Добро пожаловать в English Buddy"}</h1>
                <p class="lead">
                    {"Приложение помогает детям учить английские слова и фразы с помощью \
                      красочных карточек, аудио-озвучки и понятного индикатора прогресса. \
                      Взрослые могут наполнять уроки в удобной админке."}
                </p>
                <div style="margin-top: 2rem; display: flex; gap: 1.5rem;">
                    <a href={Route::Study.href()} class="button">{"🚀 Изучай!"}</a>
                    <a href={Route::Admin.href()} class="button secondary">{"🛠 Админка"}</a>
                </div>
            </div>
        }
    }
}
