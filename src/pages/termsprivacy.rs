use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(LegalLinks)]
fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Home}>{"Back to the giveaway"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. What We Collect"}</h2>
                <p>{"When you enter the giveaway we collect:"}</p>
                <ul>
                    <li>{"Your email address (to contact winners)"}</li>
                    <li>{"Your first name, if you choose to give it"}</li>
                    <li>{"Whether you want to receive future giveaways and deals"}</li>
                    <li>{"The page you entered from and the site that referred you"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How We Use It"}</h2>
                <ul>
                    <li>{"Running the weekly draw and contacting winners"}</li>
                    <li>{"Sending newsletters, only if you opted in"}</li>
                    <li>{"Understanding which campaigns bring visitors to the page"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Data Stored in Your Browser"}</h2>
                <p>{"This site keeps a note in your browser that you have already entered, together with the email you used, so we can remind you on your next visit. Clearing your browser data removes it."}</p>
            </section>

            <section>
                <h2>{"4. Your Rights"}</h2>
                <p>{"You can ask us to show, correct or delete the data we hold about you at any time."}</p>
            </section>

            <section>
                <h2>{"5. Contact"}</h2>
                <p>{"Email: privacy@naijawins.ng"}</p>
            </section>
            <LegalLinks />
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content terms-and-conditions">
            <h1>{"NaijaWins Giveaway Terms and Conditions"}</h1>

            <section>
                <h2>{"1. Eligibility"}</h2>
                <p>{"The giveaway is open to residents of Nigeria aged 18 or over. Employees of NaijaWins and their families may not enter."}</p>
            </section>

            <section>
                <h2>{"2. How to Enter"}</h2>
                <p>{"Submit a valid email address through the entry form on this site. Entry is free and no purchase is necessary. One entry per person per draw; duplicates are removed."}</p>
            </section>

            <section>
                <h2>{"3. The Draw"}</h2>
                <p>{"A winner is chosen at random every Sunday at 18:00 WAT from all valid entries received before the draw. Entries received afterwards go into the next draw."}</p>
            </section>

            <section>
                <h2>{"4. Prizes"}</h2>
                <p>{"Prizes are paid by bank transfer to the winner. We will never ask you to pay a fee to claim a prize."}</p>
            </section>

            <section>
                <h2>{"5. Winner Notification"}</h2>
                <p>{"Winners are contacted by email within 24 hours. A prize not claimed within 7 days may be redrawn."}</p>
            </section>

            <section>
                <h2>{"6. Contact Us"}</h2>
                <p>
                    {"For questions about these Terms, contact "}
                    <a href="mailto:hello@naijawins.ng">{"hello@naijawins.ng"}</a>
                </p>
            </section>
            <LegalLinks />
        </div>
    }
}
