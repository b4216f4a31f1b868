mod app;
mod bridge;
mod notice;

mod components {
    pub mod analysis_lab;
    pub mod dashboard;
    pub mod model_registry;
    pub mod prompt_editor;
    pub mod sources;
}

use app::App;
use leptos::*;

fn main() {
    mount_to_body(App);
}
