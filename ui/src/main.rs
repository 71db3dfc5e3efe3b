use dioxus::prelude::*;

mod components;

use components::app::App;

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}
