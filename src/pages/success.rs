use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::returning_visitor::returning_visitor;
use crate::storage::BrowserStore;
use crate::Route;

#[function_component(Success)]
pub fn success() -> Html {
    let email = use_state(|| {
        BrowserStore::local()
            .ok()
            .and_then(|store| returning_visitor(&store))
    });

    html! {
        <div class="success-page">
            <div class="success-card">
                <div class="success-icon">{"🎉"}</div>
                <h1>{"You're in the draw!"}</h1>
                {
                    if let Some(email) = &*email {
                        html! {
                            <p>{"We'll email "}<strong>{email}</strong>{" if you win."}</p>
                        }
                    } else {
                        html! { <p>{"We'll email you if you win."}</p> }
                    }
                }
                <p class="success-note">{"The winner is drawn every Sunday evening. Keep an eye on your inbox and spam folder."}</p>
                <Link<Route> to={Route::Home} classes="cta-button">{"Back to the giveaway"}</Link<Route>>
            </div>
            <style>
                {r#"
                .success-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    text-align: center;
                }
                .success-card {
                    max-width: 480px;
                    padding: 3rem 2rem;
                    border-radius: 1rem;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.08);
                }
                .success-icon {
                    font-size: 3rem;
                }
                .success-note {
                    color: #6b7280;
                    font-size: 0.9rem;
                    margin: 1.5rem 0;
                }
                "#}
            </style>
        </div>
    }
}
