use crate::app::App;

mod app;
mod client;
mod components;
mod print_page;
mod storage;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
