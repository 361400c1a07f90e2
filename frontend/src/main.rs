use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod utils {
    pub mod scroll;
}
mod components {
    pub mod about;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod services;
    pub mod steps;
}
mod contact {
    pub mod form;
    pub mod form_state;
    pub mod models;
    pub mod phone;
    pub mod validation;
    pub mod webhook;
}
mod reviews {
    pub mod carousel;
    pub mod data;
    pub mod section;
}
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod privacy;
}

use pages::{
    landing::Landing,
    privacy::PrivacyPolicy,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy-policy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Landing /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
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
