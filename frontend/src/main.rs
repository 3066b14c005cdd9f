use crate::app::App;

mod app;
mod components;
mod gateway;

fn main() {
    yew::Renderer::<App>::new().render();
}
