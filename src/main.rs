use log::info;
use yew::prelude::*;

mod config;
mod contact;
mod content;
mod error;
mod navigation;
mod reveal;
mod components {
    pub mod cards;
    pub mod contact_form;
    pub mod nav;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
