use yew::prelude::*;
use log::{info, Level};

mod config;
mod state {
    pub mod cards;
    pub mod sections;
    pub mod submit;
    pub mod theme;
    pub mod viewport;
}
mod components {
    pub mod contact;
    pub mod cursor;
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use state::theme::Theme;

#[function_component]
fn App() -> Html {
    let theme = use_state(Theme::default);

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            theme.set(theme.toggle());
        })
    };

    html! {
        <Landing theme={*theme} on_toggle_theme={on_toggle_theme} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
