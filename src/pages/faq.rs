use yew::prelude::*;

use crate::components::faq::{FaqAccordion, FaqEntry};

fn entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Is this giveaway really free?",
            answer: "Yes. Entering costs nothing and you will never be asked for card details or a transfer to claim a prize.",
        },
        FaqEntry {
            question: "Who can enter?",
            answer: "Anyone aged 18 or over living in Nigeria with a valid email address. One entry per person per draw.",
        },
        FaqEntry {
            question: "When is the draw?",
            answer: "Every Sunday at 6pm WAT. Entries received after the draw roll over into the following week.",
        },
        FaqEntry {
            question: "How will I know if I won?",
            answer: "We email winners within 24 hours of the draw from our official address and announce first names on this page.",
        },
        FaqEntry {
            question: "What happens to my email?",
            answer: "It is only used to contact you about the draw. If you ticked the newsletter box we will also send occasional deals, and every email has an unsubscribe link.",
        },
        FaqEntry {
            question: "Can I enter more than once?",
            answer: "No. Duplicate entries are removed before the draw, so one entry gives you the same chance as ten.",
        },
    ]
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            <FaqAccordion entries={entries()} />
        </section>
    }
}
