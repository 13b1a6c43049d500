use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod storage;
mod utm;
mod components {
    pub mod countdown;
    pub mod entry_counter;
    pub mod faq;
    pub mod returning_visitor;
    pub mod reveal;
    pub mod smooth_scroll;
    pub mod toast;
}
mod entry {
    pub mod form;
    pub mod submission;
    pub mod validation;
}
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod success;
    pub mod termsprivacy;
}

use components::toast::ToastProvider;
use config::GiveawayConfig;
use pages::{
    landing::Landing,
    success::Success,
    termsprivacy::{TermsAndConditions, PrivacyPolicy},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/success")]
    Success,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing config={GiveawayConfig::default()} /> }
        },
        Route::Success => {
            info!("Rendering Success page");
            html! { <Success /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let toast_duration = GiveawayConfig::default().toast_duration_ms;

    html! {
        <BrowserRouter>
            <ToastProvider duration_ms={toast_duration}>
                <Switch<Route> render={switch} />
            </ToastProvider>
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
