//! BigHouse theme toggle - browser entry point.

use bighouse_theme::app::App;

fn main() {
    dioxus::launch(App);
}
