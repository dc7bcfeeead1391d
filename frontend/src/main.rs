use yew::prelude::*;
use log::info;

mod config;
mod content;
mod lead;
mod navigation;
mod reveal;
mod viewport;
mod components {
    pub mod contact;
    pub mod counter;
    pub mod icons;
    pub mod loading;
    pub mod logo;
    pub mod nav;
}
mod pages {
    pub mod landing;
    pub mod sections;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting H2 landing page");
    yew::Renderer::<App>::new().render();
}
