use chrono::Weekday;

#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("GIVEAWAY_FORM_ENDPOINT") {
        Some(endpoint) => endpoint,
        None => "https://script.google.com/macros/s/YOUR_SCRIPT_ID/exec", // Demo mode when running locally
    }
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("GIVEAWAY_FORM_ENDPOINT") {
        Some(endpoint) => endpoint,
        None => "https://script.google.com/macros/s/AKfycbyMrZJzxW0ipDIHEqa8YgVoH2mdZfkY9UEuoTKNP6AN5-oto77_mmdZefMq72qUCQTrlQ/exec",
    }
}

/// Everything the page needs to know about the running giveaway.
#[derive(Clone, Debug, PartialEq)]
pub struct GiveawayConfig {
    /// Apps Script (or any webhook) that receives entries as JSON.
    pub form_endpoint: String,
    /// Route the browser is sent to after a successful entry.
    pub success_route: String,
    pub validate_email: bool,
    /// Fake counter starts here when nothing is stored yet.
    pub base_entry_count: u64,
    pub draw_day: Weekday,
    /// On the draw day the countdown rolls over to next week from this hour.
    pub draw_cutoff_hour: u32,
    pub toast_duration_ms: u32,
}

impl Default for GiveawayConfig {
    fn default() -> Self {
        Self {
            form_endpoint: get_form_endpoint().to_string(),
            success_route: "/success".to_string(),
            validate_email: true,
            base_entry_count: 2847,
            draw_day: Weekday::Sun,
            draw_cutoff_hour: 18,
            toast_duration_ms: 4000,
        }
    }
}

impl GiveawayConfig {
    /// No real endpoint configured, entries stay in local storage.
    pub fn is_demo_mode(&self) -> bool {
        let endpoint = self.form_endpoint.trim();
        endpoint.is_empty()
            || endpoint.contains("YOUR_FORM_ID")
            || endpoint.contains("YOUR_SCRIPT_ID")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_endpoints_select_demo_mode() {
        let mut config = GiveawayConfig::default();

        config.form_endpoint = "https://formspree.io/f/YOUR_FORM_ID".to_string();
        assert!(config.is_demo_mode());

        config.form_endpoint = "https://script.google.com/macros/s/YOUR_SCRIPT_ID/exec".to_string();
        assert!(config.is_demo_mode());

        config.form_endpoint = "   ".to_string();
        assert!(config.is_demo_mode());
    }

    #[test]
    fn real_endpoint_is_live() {
        let config = GiveawayConfig {
            form_endpoint: "https://script.google.com/macros/s/AKfycbx/exec".to_string(),
            ..GiveawayConfig::default()
        };
        assert!(!config.is_demo_mode());
    }

    #[test]
    fn defaults_match_the_running_campaign() {
        let config = GiveawayConfig::default();
        assert_eq!(config.base_entry_count, 2847);
        assert_eq!(config.draw_day, Weekday::Sun);
        assert_eq!(config.draw_cutoff_hour, 18);
        assert_eq!(config.success_route, "/success");
        assert!(config.validate_email);
    }
}
