use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use log::info;

use crate::form::error::SubmitError;
use crate::form::model::FormSubmission;

/// Sends a submission somewhere. Futures stay on the browser thread, hence `?Send`.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait Deliverer {
    async fn deliver(&self, submission: &FormSubmission) -> Result<(), SubmitError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, ms: u32);
}

pub struct TimeoutSleeper;

#[async_trait(?Send)]
impl Sleeper for TimeoutSleeper {
    async fn sleep(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

/// Pretends the request went through after a short pause. Used while the
/// endpoint is still the placeholder and demo mode is on.
pub struct SimulatedDelivery {
    sleeper: Rc<dyn Sleeper>,
    delay_ms: u32,
}

impl SimulatedDelivery {
    pub fn new(sleeper: Rc<dyn Sleeper>, delay_ms: u32) -> Self {
        Self { sleeper, delay_ms }
    }
}

/// Console line written for a simulated submission.
pub fn demo_log_line(submission: &FormSubmission) -> String {
    format!("Demo form submitted (no backend): {}", submission.to_json())
}

#[async_trait(?Send)]
impl Deliverer for SimulatedDelivery {
    async fn deliver(&self, submission: &FormSubmission) -> Result<(), SubmitError> {
        info!("{}", demo_log_line(submission));
        self.sleeper.sleep(self.delay_ms).await;
        Ok(())
    }
}

pub const REQUEST_HEADERS: &[(&str, &str)] = &[
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
];

/// JSON body posted to the form endpoint.
pub fn request_body(submission: &FormSubmission) -> String {
    submission.to_json()
}

pub struct NetworkDelivery {
    endpoint: String,
}

impl NetworkDelivery {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl Deliverer for NetworkDelivery {
    async fn deliver(&self, submission: &FormSubmission) -> Result<(), SubmitError> {
        let request = REQUEST_HEADERS
            .iter()
            .fold(Request::post(&self.endpoint), |request, (name, value)| {
                request.header(name, value)
            })
            .body(request_body(submission));

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Delivery(e.to_string()))?;

        check_status(response.status())
    }
}

/// Any 2xx counts as delivered.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Delivery(format!(
            "Network response was not ok (status {})",
            status
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use mockall::predicate::eq;

    #[test]
    fn only_2xx_statuses_are_delivered() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert!(check_status(299).is_ok());
        assert!(matches!(check_status(199), Err(SubmitError::Delivery(_))));
        assert!(matches!(check_status(301), Err(SubmitError::Delivery(_))));
        assert!(matches!(check_status(404), Err(SubmitError::Delivery(_))));
        assert_eq!(
            check_status(500),
            Err(SubmitError::Delivery(
                "Network response was not ok (status 500)".to_string()
            ))
        );
    }

    fn jane() -> FormSubmission {
        FormSubmission::from_raw("Jane", "jane@x.com", "", "")
    }

    #[test]
    fn request_declares_json_both_ways() {
        assert_eq!(
            REQUEST_HEADERS,
            &[
                ("Content-Type", "application/json"),
                ("Accept", "application/json"),
            ]
        );
    }

    #[test]
    fn request_body_carries_fields_verbatim() {
        assert_eq!(
            request_body(&jane()),
            r#"{"name":"Jane","email":"jane@x.com","company":"","phone":""}"#
        );

        let body: serde_json::Value =
            serde_json::from_str(&request_body(&FormSubmission::from_raw(" Ada ", "", "", " 555 ")))
                .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Ada", "email": "", "company": "", "phone": "555"})
        );
    }

    #[test]
    fn demo_log_line_shows_the_submitted_object() {
        assert_eq!(
            demo_log_line(&jane()),
            r#"Demo form submitted (no backend): {"name":"Jane","email":"jane@x.com","company":"","phone":""}"#
        );
    }

    #[test]
    fn simulated_delivery_waits_the_configured_delay() {
        let mut sleeper = MockSleeper::new();
        sleeper.expect_sleep().with(eq(800)).times(1).return_const(());

        let delivery = SimulatedDelivery::new(Rc::new(sleeper), 800);
        let submission = jane();

        assert_eq!(block_on(delivery.deliver(&submission)), Ok(()));
    }
}
