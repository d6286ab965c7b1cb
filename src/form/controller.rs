use std::cell::Cell;
use std::rc::Rc;

use log::{error, info};

use crate::config::{self, DeliveryRoute, SubmissionConfig};
use crate::form::delivery::{Deliverer, NetworkDelivery, SimulatedDelivery, Sleeper, TimeoutSleeper};
use crate::form::error::SubmitError;
use crate::form::model::{ButtonState, FormSubmission};

/// What the controller needs from the page: button rendering, field reset and a
/// blocking dialog.
pub trait FormView {
    fn show_button(&self, state: ButtonState);
    fn clear_fields(&self);
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed(SubmitError),
}

pub struct FormSubmissionController {
    config: SubmissionConfig,
    simulated: Box<dyn Deliverer>,
    network: Box<dyn Deliverer>,
    sleeper: Rc<dyn Sleeper>,
    view: Rc<dyn FormView>,
    state: Cell<ButtonState>,
    revert_delay_ms: u32,
}

impl FormSubmissionController {
    /// Controller wired to browser timers and the configured endpoint.
    pub fn new(config: SubmissionConfig, view: Rc<dyn FormView>) -> Self {
        let sleeper: Rc<dyn Sleeper> = Rc::new(TimeoutSleeper);
        let simulated = SimulatedDelivery::new(sleeper.clone(), config::SIMULATED_DELAY_MS);
        let network = NetworkDelivery::new(config.endpoint.clone());
        Self::with_strategies(config, Box::new(simulated), Box::new(network), sleeper, view)
    }

    pub fn with_strategies(
        config: SubmissionConfig,
        simulated: Box<dyn Deliverer>,
        network: Box<dyn Deliverer>,
        sleeper: Rc<dyn Sleeper>,
        view: Rc<dyn FormView>,
    ) -> Self {
        Self {
            config,
            simulated,
            network,
            sleeper,
            view,
            state: Cell::new(ButtonState::Idle),
            revert_delay_ms: config::REVERT_DELAY_MS,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ButtonState {
        self.state.get()
    }

    /// Runs one submission to completion, including the success revert.
    /// `None` when the button was still disabled.
    #[cfg(test)]
    pub async fn submit(&self, submission: FormSubmission) -> Option<SubmitOutcome> {
        if !self.begin() {
            return None;
        }
        Some(self.dispatch(submission).await)
    }

    /// Claims the button for a new submission. Returns false while a previous
    /// one (or its revert timer) is still pending.
    pub fn begin(&self) -> bool {
        if self.state.get().is_disabled() {
            info!("Submit ignored, previous request still pending");
            return false;
        }
        self.transition(ButtonState::Sending);
        true
    }

    /// Delivers a submission already claimed with `begin`.
    pub async fn dispatch(&self, submission: FormSubmission) -> SubmitOutcome {
        let deliverer = match self.config.route() {
            DeliveryRoute::Simulated => &self.simulated,
            DeliveryRoute::Network => &self.network,
        };

        match deliverer.deliver(&submission).await {
            Ok(()) => {
                self.transition(ButtonState::Succeeded);
                self.view.clear_fields();
                self.sleeper.sleep(self.revert_delay_ms).await;
                self.transition(ButtonState::Idle);
                SubmitOutcome::Delivered
            }
            Err(err) => {
                error!("Form submit failed: {}", err);
                let err = if self.config.is_placeholder() {
                    SubmitError::Configuration(self.config.endpoint.clone())
                } else {
                    err
                };
                self.transition(ButtonState::Idle);
                self.view.alert(err.alert_message());
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn transition(&self, state: ButtonState) {
        self.state.set(state);
        self.view.show_button(state);
    }
}
