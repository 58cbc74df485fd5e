//! Browser entry point: mounts the yew application

use bitcalc::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
