use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::window;

use crate::config::GiveawayConfig;
use crate::entry::validation::{EntryForm, ValidEntry, ValidationError};
use crate::storage::{KeyValueStore, StorageError, EMAIL_KEY, ENTERED_KEY, ENTRIES_KEY};

const DEMO_DELAY_MS: u32 = 1500;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("endpoint rejected the entry with status {status}")]
    Rejected { status: u16 },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Body posted to the form endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPayload {
    pub email: String,
    pub name: String,
    pub newsletter: bool,
    pub timestamp: String,
    pub source: String,
    pub referrer: String,
}

/// Where the visitor is and how they got here.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    pub source: String,
    pub referrer: String,
}

impl PageContext {
    pub fn current() -> Self {
        let source = window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let referrer = window()
            .and_then(|w| w.document())
            .map(|d| d.referrer())
            .unwrap_or_default();
        Self { source, referrer }
    }
}

/// A validated entry ready to leave the browser. There is no way to build one
/// from an `EntryForm` that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    payload: EntryPayload,
}

impl Submission {
    pub fn new(entry: ValidEntry, context: PageContext, now: DateTime<Utc>) -> Self {
        let referrer = if context.referrer.is_empty() {
            "direct".to_string()
        } else {
            context.referrer
        };

        Self {
            payload: EntryPayload {
                email: entry.email,
                name: entry.name,
                newsletter: entry.newsletter,
                timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
                source: context.source,
                referrer,
            },
        }
    }

    pub fn payload(&self) -> &EntryPayload {
        &self.payload
    }
}

/// Builds a submission from the raw form. Anything that fails validation stops
/// here, before a request can exist.
pub fn prepare(
    form: &EntryForm,
    config: &GiveawayConfig,
    context: PageContext,
    now: DateTime<Utc>,
) -> Result<Submission, ValidationError> {
    let entry = form.validate(config)?;
    Ok(Submission::new(entry, context, now))
}

/// Sends the entry, or stores it locally when no endpoint is configured.
/// Storage is only needed for demo mode; a live entry goes out without it.
pub async fn submit<S: KeyValueStore>(
    config: &GiveawayConfig,
    submission: Submission,
    store: Option<&S>,
) -> Result<(), SubmitError> {
    let payload = submission.payload;

    if config.is_demo_mode() {
        let dump = serde_json::to_string(&payload).unwrap_or_default();
        gloo_console::log!("Demo mode - form data:", dump);
        TimeoutFuture::new(DEMO_DELAY_MS).await;

        let store = store.ok_or(StorageError::Unavailable)?;
        record_demo_entry(store, &payload)?;
        return Ok(());
    }

    let request = Request::post(&config.form_endpoint)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .json(&payload)
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    match request.send().await {
        Ok(response) => finish_live(response.ok(), response.status(), &payload.email, store),
        Err(e) => {
            error!("Form submission error: {}", e);
            Err(SubmitError::Network(e.to_string()))
        }
    }
}

/// Outcome of a live POST. Confirmation bookkeeping is best effort.
fn finish_live<S: KeyValueStore>(
    ok: bool,
    status: u16,
    email: &str,
    store: Option<&S>,
) -> Result<(), SubmitError> {
    if !ok {
        error!("Form submission failed with status: {}", status);
        return Err(SubmitError::Rejected { status });
    }

    info!("Entry accepted");
    match store {
        Some(store) => {
            if let Err(e) = record_confirmation(store, email) {
                warn!("Entry accepted but confirmation was not stored: {}", e);
            }
        }
        None => warn!("Entry accepted but storage is unavailable, confirmation skipped"),
    }
    Ok(())
}

/// Appends to the demo entry list. An unreadable list is started over.
pub fn record_demo_entry(store: &impl KeyValueStore, payload: &EntryPayload) -> Result<(), StorageError> {
    let mut entries: Vec<EntryPayload> = match store.get(ENTRIES_KEY) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Discarding unreadable demo entries: {}", e);
            Vec::new()
        }),
        None => Vec::new(),
    };
    entries.push(payload.clone());
    store.set(ENTRIES_KEY, &serde_json::to_string(&entries)?)
}

pub fn record_confirmation(store: &impl KeyValueStore, email: &str) -> Result<(), StorageError> {
    store.set(ENTERED_KEY, "true")?;
    store.set(EMAIL_KEY, email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn entry() -> ValidEntry {
        ValidEntry {
            email: "a@b.co".to_string(),
            name: "Ada".to_string(),
            newsletter: false,
        }
    }

    fn at_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn payload_carries_page_context() {
        let context = PageContext {
            source: "https://naijawins.ng/?utm_source=x".to_string(),
            referrer: "https://t.co/abc".to_string(),
        };
        let submission = Submission::new(entry(), context, at_noon());
        let payload = submission.payload();

        assert_eq!(payload.email, "a@b.co");
        assert_eq!(payload.timestamp, "2026-10-19T12:00:00.000Z");
        assert_eq!(payload.source, "https://naijawins.ng/?utm_source=x");
        assert_eq!(payload.referrer, "https://t.co/abc");
    }

    #[test]
    fn missing_referrer_is_direct() {
        let context = PageContext { source: "https://naijawins.ng/".to_string(), referrer: String::new() };
        let submission = Submission::new(entry(), context, at_noon());
        assert_eq!(submission.payload().referrer, "direct");
    }

    #[test]
    fn payload_uses_wire_field_names() {
        let context = PageContext { source: "s".to_string(), referrer: String::new() };
        let value = serde_json::to_value(Submission::new(entry(), context, at_noon()).payload()).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["email", "name", "newsletter", "referrer", "source", "timestamp"]);
    }

    #[test]
    fn demo_entries_accumulate() {
        let store = MemoryStore::new();
        let context = PageContext { source: "s".to_string(), referrer: String::new() };
        let payload = Submission::new(entry(), context, at_noon()).payload().clone();

        record_demo_entry(&store, &payload).unwrap();
        record_demo_entry(&store, &payload).unwrap();

        let stored: Vec<EntryPayload> = serde_json::from_str(&store.get(ENTRIES_KEY).unwrap()).unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1], payload);
    }

    #[test]
    fn corrupt_demo_list_is_replaced() {
        let store = MemoryStore::with(&[(ENTRIES_KEY, "{not json")]);
        let context = PageContext { source: "s".to_string(), referrer: String::new() };
        let payload = Submission::new(entry(), context, at_noon()).payload().clone();

        record_demo_entry(&store, &payload).unwrap();

        let stored: Vec<EntryPayload> = serde_json::from_str(&store.get(ENTRIES_KEY).unwrap()).unwrap();
        assert_eq!(stored, vec![payload]);
    }

    #[test]
    fn demo_entry_is_not_a_confirmation() {
        let store = MemoryStore::new();
        let context = PageContext { source: "s".to_string(), referrer: String::new() };
        let payload = Submission::new(entry(), context, at_noon()).payload().clone();

        record_demo_entry(&store, &payload).unwrap();

        assert_eq!(store.get(ENTERED_KEY), None);
        assert_eq!(store.get(EMAIL_KEY), None);
    }

    #[test]
    fn unchecked_consent_builds_no_submission() {
        let form = EntryForm {
            email: "a@b.co".to_string(),
            name: String::new(),
            terms_accepted: false,
            newsletter: true,
        };
        let context = PageContext { source: "s".to_string(), referrer: String::new() };

        let result = prepare(&form, &GiveawayConfig::default(), context, at_noon());

        assert_eq!(result, Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn accepted_form_builds_a_submission() {
        let form = EntryForm {
            email: " a@b.co ".to_string(),
            name: "Ada".to_string(),
            terms_accepted: true,
            newsletter: false,
        };
        let context = PageContext { source: "s".to_string(), referrer: String::new() };

        let submission = prepare(&form, &GiveawayConfig::default(), context, at_noon()).unwrap();

        assert_eq!(submission.payload().email, "a@b.co");
    }

    #[test]
    fn live_success_without_storage_still_succeeds() {
        assert!(finish_live::<MemoryStore>(true, 200, "a@b.co", None).is_ok());
    }

    #[test]
    fn live_success_records_confirmation_when_storage_exists() {
        let store = MemoryStore::new();
        finish_live(true, 201, "a@b.co", Some(&store)).unwrap();
        assert_eq!(store.get(ENTERED_KEY).as_deref(), Some("true"));
        assert_eq!(store.get(EMAIL_KEY).as_deref(), Some("a@b.co"));
    }

    #[test]
    fn rejected_status_is_an_error_and_records_nothing() {
        let store = MemoryStore::new();
        let result = finish_live(false, 500, "a@b.co", Some(&store));
        assert!(matches!(result, Err(SubmitError::Rejected { status: 500 })));
        assert_eq!(store.get(ENTERED_KEY), None);
    }

    #[test]
    fn confirmation_sets_flag_and_email() {
        let store = MemoryStore::new();
        record_confirmation(&store, "a@b.co").unwrap();
        assert_eq!(store.get(ENTERED_KEY).as_deref(), Some("true"));
        assert_eq!(store.get(EMAIL_KEY).as_deref(), Some("a@b.co"));
    }
}
