use web_sys::MouseEvent;
use yew::prelude::*;

/// Opening an item closes whichever was open before; clicking the open item closes it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let open = open.clone();
                    Callback::from(move |_| open.set(toggle(*open, index)))
                };
                html! {
                    <FaqItem
                        key={index}
                        question={entry.question}
                        is_open={*open == Some(index)}
                        {on_toggle}
                    >
                        <p>{entry.answer}</p>
                    </FaqItem>
                }
            }) }
            <style>
                {r#"
                .faq-item {
                    border-bottom: 1px solid rgba(0, 0, 0, 0.08);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    font-size: 1.05rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    color: inherit;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: var(--color-primary);
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                    color: #4b5563;
                }
                .faq-item.open .faq-answer {
                    max-height: 500px;
                    padding-bottom: 1.25rem;
                }
                "#}
            </style>
        </div>
    }
}
