//! Campaign parameters from the landing URL, kept for the browser session.

use log::info;
use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StorageError, UTM_KEY};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UtmParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|value| value.into_owned())
        .unwrap_or(spaced)
}

impl UtmParams {
    /// Accepts the query with or without its leading `?`. The first occurrence
    /// of a key wins even when its value is empty.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        let mut seen = [false; 5];
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let (index, slot) = match decode(key).as_str() {
                "utm_source" => (0, &mut params.utm_source),
                "utm_medium" => (1, &mut params.utm_medium),
                "utm_campaign" => (2, &mut params.utm_campaign),
                "utm_term" => (3, &mut params.utm_term),
                "utm_content" => (4, &mut params.utm_content),
                _ => continue,
            };
            if seen[index] {
                continue;
            }
            seen[index] = true;
            let value = decode(value);
            if !value.is_empty() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Stores the query's UTM values, if it has any.
pub fn capture(store: &impl KeyValueStore, query: &str) -> Result<Option<UtmParams>, StorageError> {
    let params = UtmParams::from_query(query);
    if params.is_empty() {
        return Ok(None);
    }
    store.set(UTM_KEY, &serde_json::to_string(&params)?)?;
    info!("Captured campaign parameters: {:?}", params);
    Ok(Some(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn picks_utm_values_only() {
        let params = UtmParams::from_query("?utm_source=whatsapp&ref=abc&utm_campaign=oct+promo&utm_medium=");
        assert_eq!(params.utm_source.as_deref(), Some("whatsapp"));
        assert_eq!(params.utm_campaign.as_deref(), Some("oct promo"));
        assert_eq!(params.utm_medium, None);
        assert_eq!(params.utm_term, None);
    }

    #[test]
    fn values_are_percent_decoded_and_first_wins() {
        let params = UtmParams::from_query("utm_content=hero%20banner&utm_content=footer");
        assert_eq!(params.utm_content.as_deref(), Some("hero banner"));
    }

    #[test]
    fn empty_first_value_shadows_later_ones() {
        let params = UtmParams::from_query("?utm_source=&utm_source=x");
        assert_eq!(params.utm_source, None);

        let store = MemoryStore::new();
        assert_eq!(capture(&store, "?utm_source=&utm_source=x").unwrap(), None);
        assert_eq!(store.get(UTM_KEY), None);
    }

    #[test]
    fn nothing_stored_without_utm() {
        let store = MemoryStore::new();
        assert_eq!(capture(&store, "?page=2").unwrap(), None);
        assert_eq!(store.get(UTM_KEY), None);
        assert_eq!(capture(&store, "").unwrap(), None);
    }

    #[test]
    fn captured_params_are_stored_as_json() {
        let store = MemoryStore::new();
        capture(&store, "?utm_source=ig&utm_term=phones").unwrap();
        assert_eq!(
            store.get(UTM_KEY).as_deref(),
            Some(r#"{"utm_source":"ig","utm_term":"phones"}"#)
        );
    }
}
