// Demo request form delivery.
// - Formspree: create a form at https://formspree.io and put its id into FORM_ENDPOINT.
// - Leave FORM_DEMO_MODE on to simulate success while the endpoint is still the placeholder.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/yourFormId";
pub const FORM_DEMO_MODE: bool = true;

pub const PLACEHOLDER_FORM_ID: &str = "yourFormId";

// Form feedback timings in milliseconds
pub const SIMULATED_DELAY_MS: u32 = 800;
pub const REVERT_DELAY_MS: u32 = 3_000;

// Height of the fixed top nav, used when scrolling to anchors
pub const NAV_OFFSET_PX: f64 = 80.0;
// A section becomes active this many pixels before its top reaches the viewport
pub const ACTIVE_SECTION_LEAD_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryRoute {
    Simulated,
    Network,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionConfig {
    pub endpoint: String,
    pub demo_mode: bool,
}

impl SubmissionConfig {
    pub fn new(endpoint: impl Into<String>, demo_mode: bool) -> Self {
        Self {
            endpoint: endpoint.into(),
            demo_mode,
        }
    }

    /// Config compiled into the site.
    pub fn from_constants() -> Self {
        Self::new(FORM_ENDPOINT, FORM_DEMO_MODE)
    }

    pub fn is_placeholder(&self) -> bool {
        self.endpoint.contains(PLACEHOLDER_FORM_ID)
    }

    pub fn route(&self) -> DeliveryRoute {
        if self.demo_mode && self.is_placeholder() {
            DeliveryRoute::Simulated
        } else {
            DeliveryRoute::Network
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self::from_constants()
    }
}
