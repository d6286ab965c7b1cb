use thiserror::Error;

pub const CONFIGURATION_ALERT: &str = "Form is not configured yet. To receive demo requests:\n\n\
1. Go to https://formspree.io and create a free account.\n\
2. Create a new form and copy its form ID.\n\
3. In src/config.rs, replace \"yourFormId\" in FORM_ENDPOINT with your form ID (e.g. https://formspree.io/f/abcdexyz).\n\n\
For UI-only testing, keep FORM_DEMO_MODE = true.";

pub const RETRY_ALERT: &str = "There was an issue sending your request. Please try again in a moment.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form endpoint is still the placeholder: {0}")]
    Configuration(String),
    #[error("delivery failed: {0}")]
    Delivery(String),
}

impl SubmitError {
    /// Text for the blocking dialog shown to the user.
    pub fn alert_message(&self) -> &'static str {
        match self {
            SubmitError::Configuration(_) => CONFIGURATION_ALERT,
            SubmitError::Delivery(_) => RETRY_ALERT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_points_at_setup_steps() {
        let err = SubmitError::Configuration("https://formspree.io/f/yourFormId".into());
        assert!(err.alert_message().starts_with("Form is not configured yet."));
        assert!(err.alert_message().contains("FORM_DEMO_MODE = true"));
    }

    #[test]
    fn delivery_error_asks_for_retry() {
        let err = SubmitError::Delivery("status 500".into());
        assert_eq!(err.alert_message(), RETRY_ALERT);
        assert_eq!(err.to_string(), "delivery failed: status 500");
    }
}
