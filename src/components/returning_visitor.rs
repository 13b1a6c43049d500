use yew::prelude::*;

use crate::storage::{KeyValueStore, EMAIL_KEY, ENTERED_KEY};

/// Email of a visitor who already entered from this browser.
pub fn returning_visitor(store: &impl KeyValueStore) -> Option<String> {
    store.get(ENTERED_KEY).filter(|flag| !flag.is_empty())?;
    store.get(EMAIL_KEY).filter(|email| !email.trim().is_empty())
}

#[derive(Properties, PartialEq)]
pub struct ReturningVisitorNoticeProps {
    pub email: AttrValue,
}

#[function_component(ReturningVisitorNotice)]
pub fn returning_visitor_notice(props: &ReturningVisitorNoticeProps) -> Html {
    html! {
        <div class="returning-visitor-notice">
            <p style="background: rgba(0, 168, 89, 0.1); color: var(--color-primary); padding: 1rem; border-radius: 0.5rem; margin-bottom: 1rem; font-size: 0.875rem; text-align: center;">
                {"✅ You've already entered with "}<strong>{&props.email}</strong>{". Good luck in the draw!"}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn flag_and_email_mark_a_returning_visitor() {
        let store = MemoryStore::with(&[(ENTERED_KEY, "true"), (EMAIL_KEY, "a@b.co")]);
        assert_eq!(returning_visitor(&store).as_deref(), Some("a@b.co"));
    }

    #[test]
    fn both_values_are_required() {
        assert_eq!(returning_visitor(&MemoryStore::with(&[(ENTERED_KEY, "true")])), None);
        assert_eq!(returning_visitor(&MemoryStore::with(&[(EMAIL_KEY, "a@b.co")])), None);
        assert_eq!(returning_visitor(&MemoryStore::with(&[(ENTERED_KEY, ""), (EMAIL_KEY, "a@b.co")])), None);
        assert_eq!(returning_visitor(&MemoryStore::new()), None);
    }

    async fn render_notice(email: &str) -> String {
        yew::LocalServerRenderer::<ReturningVisitorNotice>::with_props(ReturningVisitorNoticeProps {
            email: AttrValue::from(email.to_string()),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn notice_shows_the_stored_email() {
        let store = MemoryStore::with(&[(ENTERED_KEY, "true"), (EMAIL_KEY, "a@b.co")]);
        let email = returning_visitor(&store).unwrap();

        let html = render_notice(&email).await;

        assert!(html.contains("<strong>a@b.co</strong>"));
        assert!(html.contains("Good luck in the draw!"));
    }

    #[tokio::test]
    async fn notice_escapes_markup_in_the_email() {
        let html = render_notice("<b>x</b>@b.co").await;

        assert!(!html.contains("<b>x</b>"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
