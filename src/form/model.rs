use serde::Serialize;

pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_LABEL: &str = "Request Sent!";
pub const SUCCESS_BACKGROUND: &str = "linear-gradient(135deg, #4CAF50 0%, #45a049 100%)";

/// One demo request, built from the form inputs on submit.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
}

impl FormSubmission {
    /// Trims every field. Empty values are kept as empty strings.
    pub fn from_raw(name: &str, email: &str, company: &str, phone: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            company: company.trim().to_string(),
            phone: phone.trim().to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        // Plain string fields always serialize
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Idle,
    Sending,
    Succeeded,
}

impl ButtonState {
    pub fn is_disabled(&self) -> bool {
        !matches!(self, ButtonState::Idle)
    }

    /// Label to render, falling back to the button's own label when idle.
    pub fn label<'a>(&self, idle_label: &'a str) -> &'a str {
        match self {
            ButtonState::Idle => idle_label,
            ButtonState::Sending => SENDING_LABEL,
            ButtonState::Succeeded => SUCCESS_LABEL,
        }
    }

    pub fn background(&self) -> Option<&'static str> {
        match self {
            ButtonState::Succeeded => Some(SUCCESS_BACKGROUND),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_raw_trims_and_keeps_empty_fields() {
        let submission = FormSubmission::from_raw("  Jane ", "jane@x.com\n", "   ", "");
        assert_eq!(
            submission,
            FormSubmission {
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                company: String::new(),
                phone: String::new(),
            }
        );
    }

    #[test]
    fn json_keeps_field_order_and_empty_strings() {
        let submission = FormSubmission::from_raw("Jane", "jane@x.com", "", "");
        assert_eq!(
            submission.to_json(),
            r#"{"name":"Jane","email":"jane@x.com","company":"","phone":""}"#
        );
    }

    #[test]
    fn button_states_render_expected_labels() {
        assert_eq!(ButtonState::Idle.label("Request Demo"), "Request Demo");
        assert_eq!(ButtonState::Sending.label("Request Demo"), "Sending...");
        assert_eq!(ButtonState::Succeeded.label("Request Demo"), "Request Sent!");
        assert!(!ButtonState::Idle.is_disabled());
        assert!(ButtonState::Sending.is_disabled());
        assert!(ButtonState::Succeeded.is_disabled());
        assert_eq!(ButtonState::Succeeded.background(), Some(SUCCESS_BACKGROUND));
        assert_eq!(ButtonState::Sending.background(), None);
    }
}
