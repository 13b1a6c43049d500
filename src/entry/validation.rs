use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::GiveawayConfig;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Display text is what the visitor sees in the toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please agree to the Terms and Privacy Policy")]
    TermsNotAccepted,
}

impl ValidationError {
    pub fn focus_email(&self) -> bool {
        matches!(self, ValidationError::MissingEmail | ValidationError::InvalidEmail)
    }
}

/// Raw field values as read from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryForm {
    pub email: String,
    pub name: String,
    pub terms_accepted: bool,
    pub newsletter: bool,
}

/// A form that passed validation. Only this can be turned into a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry {
    pub email: String,
    pub name: String,
    pub newsletter: bool,
}

impl EntryForm {
    pub fn validate(&self, config: &GiveawayConfig) -> Result<ValidEntry, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if config.validate_email && !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !self.terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }

        Ok(ValidEntry {
            email: email.to_string(),
            name: self.name.trim().to_string(),
            newsletter: self.newsletter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, terms_accepted: bool) -> EntryForm {
        EntryForm {
            email: email.to_string(),
            name: "  Ada  ".to_string(),
            terms_accepted,
            newsletter: true,
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("chidi.okafor@mail.example.ng"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn valid_form_is_trimmed() {
        let entry = form("  a@b.co ", true).validate(&GiveawayConfig::default()).unwrap();
        assert_eq!(entry.email, "a@b.co");
        assert_eq!(entry.name, "Ada");
        assert!(entry.newsletter);
    }

    #[test]
    fn checks_run_in_order() {
        let config = GiveawayConfig::default();
        assert_eq!(form("   ", false).validate(&config), Err(ValidationError::MissingEmail));
        assert_eq!(form("abc", false).validate(&config), Err(ValidationError::InvalidEmail));
        assert_eq!(form("a@b.co", false).validate(&config), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn format_check_can_be_disabled() {
        let config = GiveawayConfig { validate_email: false, ..GiveawayConfig::default() };
        assert!(form("abc", true).validate(&config).is_ok());
    }

    #[test]
    fn only_email_errors_take_focus() {
        assert!(ValidationError::MissingEmail.focus_email());
        assert!(ValidationError::InvalidEmail.focus_email());
        assert!(!ValidationError::TermsNotAccepted.focus_email());
        assert_eq!(
            ValidationError::TermsNotAccepted.to_string(),
            "Please agree to the Terms and Privacy Policy"
        );
    }
}
