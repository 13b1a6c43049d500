use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const STAGGER_MS: u32 = 100;
const VISIBLE_THRESHOLD: f64 = 0.1;
const TRANSITION: &str = "transition: opacity 0.5s ease, transform 0.5s ease;";

pub fn stagger_delay(index: usize) -> u32 {
    index as u32 * STAGGER_MS
}

pub fn reveal_style(visible: bool) -> String {
    if visible {
        format!("opacity: 1; transform: translateY(0); {}", TRANSITION)
    } else {
        format!("opacity: 0; transform: translateY(20px); {}", TRANSITION)
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Position among its siblings; later cards fade in a little later.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        let delay = stagger_delay(props.index);
        use_effect_with_deps(
            move |_| {
                let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            if entry.is_intersecting() {
                                let visible = visible.clone();
                                Timeout::new(delay, move || visible.set(true)).forget();
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));

                let observer = match IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(observer) => Some(observer),
                    Err(_) => {
                        warn!("IntersectionObserver unavailable, skipping reveal");
                        None
                    }
                };

                if let (Some(observer), Some(element)) = (&observer, node.cast::<Element>()) {
                    observer.observe(&element);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={reveal_style(*visible)}>
            { for props.children.iter() }
        </div>
    }
}
