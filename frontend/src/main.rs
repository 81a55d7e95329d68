use crate::app::App;

mod api;
mod app;
mod components;
mod pages;
mod profile;
mod routes;
mod speech;

fn main() {
    yew::Renderer::<App>::new().render();
}
