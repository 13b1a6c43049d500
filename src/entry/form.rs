use chrono::Utc;
use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::toast::{use_toast, Toast};
use crate::config::GiveawayConfig;
use crate::entry::submission::{prepare, submit, PageContext};
use crate::entry::validation::EntryForm;
use crate::storage::BrowserStore;
use crate::Route;

const RETRY_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Properties, PartialEq)]
pub struct GiveawayFormProps {
    pub config: GiveawayConfig,
}

#[function_component(GiveawayForm)]
pub fn giveaway_form(props: &GiveawayFormProps) -> Html {
    let email = use_state(String::new);
    let name = use_state(String::new);
    let terms_accepted = use_state(|| false);
    let newsletter = use_state(|| false);
    let is_loading = use_state(|| false);
    let email_ref = use_node_ref();
    let show_toast = use_toast();

    let onsubmit = {
        let config = props.config.clone();
        let email = email.clone();
        let name = name.clone();
        let terms_accepted = terms_accepted.clone();
        let newsletter = newsletter.clone();
        let is_loading = is_loading.clone();
        let email_ref = email_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_loading {
                return;
            }

            let form = EntryForm {
                email: (*email).clone(),
                name: (*name).clone(),
                terms_accepted: *terms_accepted,
                newsletter: *newsletter,
            };

            let submission = match prepare(&form, &config, PageContext::current(), Utc::now()) {
                Ok(submission) => submission,
                Err(err) => {
                    show_toast.emit(Toast::error(err.to_string()));
                    if err.focus_email() {
                        if let Some(input) = email_ref.cast::<HtmlInputElement>() {
                            let _ = input.focus();
                        }
                    }
                    return;
                }
            };

            is_loading.set(true);
            let config = config.clone();
            let is_loading = is_loading.clone();
            let show_toast = show_toast.clone();
            spawn_local(async move {
                let store = match BrowserStore::local() {
                    Ok(store) => Some(store),
                    Err(e) => {
                        warn!("Submitting without storage: {}", e);
                        None
                    }
                };

                match submit(&config, submission, store.as_ref()).await {
                    Ok(()) => {
                        info!("Entry submitted, redirecting to {}", config.success_route);
                        if let Some(window) = window() {
                            let _ = window.location().set_href(&config.success_route);
                        }
                    }
                    Err(e) => {
                        error!("Form submission error: {}", e);
                        show_toast.emit(Toast::error(RETRY_MESSAGE));
                        is_loading.set(false);
                    }
                }
            });
        })
    };

    let on_text = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_check = |state: UseStateHandle<bool>| {
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.checked());
        })
    };

    html! {
        <form id="giveaway-form" class="giveaway-form" {onsubmit} novalidate=true>
            <div class="form-group">
                <label for="email">{"Email address"}</label>
                <input
                    ref={email_ref}
                    id="email"
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    value={(*email).clone()}
                    oninput={on_text(email.clone())}
                />
            </div>
            <div class="form-group">
                <label for="name">{"First name (optional)"}</label>
                <input
                    id="name"
                    type="text"
                    placeholder="Your first name"
                    autocomplete="given-name"
                    value={(*name).clone()}
                    oninput={on_text(name.clone())}
                />
            </div>
            <label class="checkbox">
                <input
                    id="terms"
                    type="checkbox"
                    checked={*terms_accepted}
                    onchange={on_check(terms_accepted.clone())}
                />
                <span>
                    {"I agree to the "}
                    <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                    {" and "}
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                </span>
            </label>
            <label class="checkbox">
                <input
                    id="newsletter"
                    type="checkbox"
                    checked={*newsletter}
                    onchange={on_check(newsletter.clone())}
                />
                <span>{"Send me future giveaways and deals"}</span>
            </label>
            <button
                id="submit-btn"
                type="submit"
                class={classes!("submit-btn", (*is_loading).then(|| "loading"))}
                disabled={*is_loading}
            >
                if *is_loading {
                    <span class="loading-spinner"></span>
                } else {
                    {"Enter the Giveaway"}
                }
            </button>
        </form>
    }
}
