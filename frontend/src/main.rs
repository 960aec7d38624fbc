use yew::prelude::*;
use log::info;

mod config;
mod scroll;
mod animation {
    pub mod timeline;
}
mod components {
    pub mod icons;
    pub mod layout;
    pub mod logo;
}
mod pages {
    pub mod content;
    pub mod landing;
    pub mod portfolio;
    pub mod pricing;
}
#[cfg(test)]
mod test_support;

use pages::landing::LandingPage;


#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
    html! {
        <LandingPage />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
