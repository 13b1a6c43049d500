use gloo_timers::callback::Timeout;
use yew::prelude::*;

const SHOW_DELAY_MS: u32 = 16;
const FADE_OUT_MS: u32 = 300;

/// Every notice on this page reports a problem, so toasts are always styled as errors.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
}

impl Toast {
    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

pub fn toast_class(shown: bool) -> &'static str {
    if shown {
        "toast error show"
    } else {
        "toast error"
    }
}

/// Handed out through context. Showing a toast replaces whatever is on screen.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    show: Callback<Toast>,
}

impl ToastHandle {
    pub fn show(&self, toast: Toast) {
        self.show.emit(toast);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub duration_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let current = use_state(|| None::<(u32, Toast)>);
    let shown = use_state(|| false);
    let next_id = use_mut_ref(|| 0u32);

    let handle = {
        let current = current.clone();
        let shown = shown.clone();
        ToastHandle {
            show: Callback::from(move |toast: Toast| {
                let mut id = next_id.borrow_mut();
                *id += 1;
                shown.set(false);
                current.set(Some((*id, toast)));
            }),
        }
    };

    {
        let current = current.clone();
        let shown = shown.clone();
        let duration = props.duration_ms;
        let id = (*current).as_ref().map(|(id, _)| *id);
        use_effect_with_deps(
            move |id| {
                // Dropping a Timeout cancels it, so a replaced toast never
                // hides its successor.
                let timers = if id.is_some() {
                    let show = {
                        let shown = shown.clone();
                        Timeout::new(SHOW_DELAY_MS, move || shown.set(true))
                    };
                    let hide = {
                        let shown = shown.clone();
                        Timeout::new(duration, move || shown.set(false))
                    };
                    let remove = Timeout::new(duration + FADE_OUT_MS, move || current.set(None));
                    vec![show, hide, remove]
                } else {
                    Vec::new()
                };
                move || drop(timers)
            },
            id,
        );
    }

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { for props.children.iter() }
            {
                if let Some((id, toast)) = &*current {
                    html! {
                        <div key={*id} class={toast_class(*shown)}>
                            {&toast.message}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .toast {
                    position: fixed;
                    bottom: 2rem;
                    left: 50%;
                    transform: translate(-50%, 1rem);
                    padding: 0.875rem 1.5rem;
                    border-radius: 0.5rem;
                    background: #1f2937;
                    color: #fff;
                    font-size: 0.95rem;
                    opacity: 0;
                    transition: opacity 0.3s ease, transform 0.3s ease;
                    z-index: 1000;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
                }
                .toast.show {
                    opacity: 1;
                    transform: translate(-50%, 0);
                }
                .toast.error { background: #dc2626; }
                "#}
            </style>
        </ContextProvider<ToastHandle>>
    }
}

/// Falls back to logging when rendered outside a `ToastProvider`.
#[hook]
pub fn use_toast() -> Callback<Toast> {
    let handle = use_context::<ToastHandle>();
    Callback::from(move |toast: Toast| match &handle {
        Some(handle) => handle.show(toast),
        None => log::warn!("No toast provider for: {}", toast.message),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_reflects_visibility() {
        assert_eq!(toast_class(false), "toast error");
        assert_eq!(toast_class(true), "toast error show");
    }

    #[test]
    fn error_keeps_message() {
        assert_eq!(Toast::error("Please enter your email address").message, "Please enter your email address");
    }
}
