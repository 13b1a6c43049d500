use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

use crate::components::countdown::Countdown;
use crate::components::entry_counter::EntryCounter;
use crate::components::returning_visitor::{returning_visitor, ReturningVisitorNotice};
use crate::components::reveal::Reveal;
use crate::components::smooth_scroll::AnchorLink;
use crate::config::GiveawayConfig;
use crate::entry::form::GiveawayForm;
use crate::pages::faq::Faq;
use crate::storage::BrowserStore;
use crate::utm;

const STEPS: &[(&str, &str)] = &[
    ("1. Enter your email", "It takes ten seconds. No app, no sign up, no payment."),
    ("2. Wait for Sunday", "One winner is picked at random every Sunday evening."),
    ("3. Get paid", "Winners are contacted by email and paid straight to their bank account."),
];

const WINNERS: &[(&str, &str, &str)] = &[
    ("Chiamaka", "Enugu", "₦100,000"),
    ("Tunde", "Ibadan", "₦100,000"),
    ("Aisha", "Kano", "₦100,000"),
];

const TRUST_ITEMS: &[&str] = &[
    "Free to enter",
    "Winners announced weekly",
    "Your email stays private",
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: GiveawayConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let returning_email = use_state(|| {
        BrowserStore::local()
            .ok()
            .and_then(|store| returning_visitor(&store))
    });

    // Scroll to top and record the visit on mount only
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                    let query = window.location().search().unwrap_or_default();
                    match BrowserStore::session() {
                        Ok(store) => {
                            if let Err(e) = utm::capture(&store, &query) {
                                warn!("Campaign parameters not stored: {}", e);
                            }
                        }
                        Err(e) => warn!("Campaign parameters not stored: {}", e),
                    }
                }
                info!("NaijaWins giveaway page loaded");
                || ()
            },
            (),
        );
    }

    let config = &props.config;

    html! {
        <div class="landing-page">
            <section class="hero">
                <h1>{"Win ₦100,000 This Sunday"}</h1>
                <p class="hero-subtitle">
                    {"Free weekly cash giveaway for Nigerians. Enter with your email and you're in the draw."}
                </p>
                <div class="hero-stats">
                    <div class="stat">
                        <EntryCounter base={config.base_entry_count} />
                        <span class="stat-label">{"entries this week"}</span>
                    </div>
                    <div class="stat">
                        <Countdown draw_day={config.draw_day} cutoff_hour={config.draw_cutoff_hour} />
                        <span class="stat-label">{"days until the draw"}</span>
                    </div>
                </div>
                <AnchorLink href="#enter" class="cta-button">{"Enter Now"}</AnchorLink>
            </section>

            <section id="enter" class="form-section">
                <div class="form-card">
                    <h2>{"Enter the Giveaway"}</h2>
                    {
                        if let Some(email) = &*returning_email {
                            html! { <ReturningVisitorNotice email={email.clone()} /> }
                        } else {
                            html! {}
                        }
                    }
                    <GiveawayForm config={config.clone()} />
                </div>
            </section>

            <section id="how-it-works" class="steps-section">
                <h2>{"How It Works"}</h2>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(index, (title, body))| html! {
                        <Reveal {index} class="step-card">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="winners" class="winners-section">
                <h2>{"Recent Winners"}</h2>
                <div class="winners-grid">
                    { for WINNERS.iter().enumerate().map(|(index, (name, city, prize))| html! {
                        <Reveal {index} class="winner-card">
                            <span class="winner-prize">{*prize}</span>
                            <span class="winner-name">{format!("{}, {}", name, city)}</span>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="trust-section">
                { for TRUST_ITEMS.iter().enumerate().map(|(index, item)| html! {
                    <Reveal {index} class="trust-item">{"✓ "}{*item}</Reveal>
                }) }
            </section>

            <Faq />

            <footer class="landing-footer">
                <AnchorLink href="#enter">{"Enter now"}</AnchorLink>
                <AnchorLink href="#faq">{"FAQ"}</AnchorLink>
            </footer>

            <style>
                {r#"
                :root {
                    --color-primary: #00a859;
                }
                .landing-page {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #111827;
                }
                .landing-page section {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .hero {
                    text-align: center;
                }
                .hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    color: #4b5563;
                    max-width: 560px;
                    margin: 0 auto 2rem;
                }
                .hero-stats {
                    display: flex;
                    justify-content: center;
                    gap: 3rem;
                    margin-bottom: 2rem;
                }
                .stat {
                    display: flex;
                    flex-direction: column;
                }
                .entries-count, .countdown-days {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: var(--color-primary);
                }
                .stat-label {
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                .cta-button, .submit-btn {
                    display: inline-block;
                    background: var(--color-primary);
                    color: #fff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 1rem 2rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                }
                .submit-btn {
                    width: 100%;
                }
                .submit-btn.loading {
                    opacity: 0.7;
                    cursor: wait;
                }
                .loading-spinner {
                    display: inline-block;
                    width: 20px;
                    height: 20px;
                    border: 3px solid rgba(255,255,255,.3);
                    border-radius: 50%;
                    border-top-color: #fff;
                    animation: spin 1s ease-in-out infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .form-card {
                    max-width: 480px;
                    margin: 0 auto;
                    padding: 2rem;
                    border-radius: 1rem;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.08);
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1rem;
                }
                .form-group input {
                    padding: 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font-size: 1rem;
                }
                .checkbox {
                    display: flex;
                    gap: 0.5rem;
                    align-items: flex-start;
                    font-size: 0.875rem;
                    margin-bottom: 0.75rem;
                }
                .steps-grid, .winners-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .step-card, .winner-card {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: #f9fafb;
                }
                .winner-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .winner-prize {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--color-primary);
                }
                .trust-section {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 2rem;
                }
                .landing-footer {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                    padding: 2rem;
                    border-top: 1px solid #e5e7eb;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2rem;
                    }
                    .hero-stats {
                        gap: 1.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
