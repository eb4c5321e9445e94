use crate::app::App;

mod api;
mod app;
mod card_grid;
mod components;
mod notify;
mod storage;
mod theme;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
