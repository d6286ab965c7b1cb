use std::rc::Rc;

use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{DeliveryRoute, SubmissionConfig};
use crate::form::controller::{FormSubmissionController, FormView, SubmitOutcome};
use crate::form::model::{ButtonState, FormSubmission};

const SUBMIT_LABEL: &str = "Request a Demo";

/// Pushes controller transitions into the component's state.
struct StateFormView {
    button: UseStateSetter<ButtonState>,
    fields: [UseStateSetter<String>; 4],
}

impl FormView for StateFormView {
    fn show_button(&self, state: ButtonState) {
        self.button.set(state);
    }

    fn clear_fields(&self) {
        for field in &self.fields {
            field.set(String::new());
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DemoFormProps {
    #[prop_or_default]
    pub config: Option<SubmissionConfig>,
}

#[function_component(DemoForm)]
pub fn demo_form(props: &DemoFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let company = use_state(String::new);
    let phone = use_state(String::new);
    let button = use_state(ButtonState::default);

    let controller = {
        let view = StateFormView {
            button: button.setter(),
            fields: [
                name.setter(),
                email.setter(),
                company.setter(),
                phone.setter(),
            ],
        };
        let config = props.config.clone().unwrap_or_default();
        use_memo(
            move |_| {
                let route = match config.route() {
                    DeliveryRoute::Simulated => "simulated",
                    DeliveryRoute::Network => "network",
                };
                info!("Demo form ready, delivery: {}", route);
                FormSubmissionController::new(config, Rc::new(view))
            },
            (),
        )
    };

    let onsubmit = {
        let controller = controller.clone();
        let (name, email, company, phone) = (name.clone(), email.clone(), company.clone(), phone.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !controller.begin() {
                return;
            }
            let submission = FormSubmission::from_raw(&name, &email, &company, &phone);
            let controller = controller.clone();
            spawn_local(async move {
                match controller.dispatch(submission).await {
                    SubmitOutcome::Delivered => info!("Demo request delivered"),
                    SubmitOutcome::Failed(err) => info!("Demo request not delivered: {}", err),
                }
            });
        })
    };

    let input_handler = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let button_style = button
        .background()
        .map(|background| format!("background: {};", background))
        .unwrap_or_default();

    html! {
        <form id="demoForm" class="demo-form" onsubmit={onsubmit}>
            <div class="form-group">
                <label for="name">{"Name"}</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    placeholder="Your name"
                    value={(*name).clone()}
                    oninput={input_handler(&name)}
                />
            </div>
            <div class="form-group">
                <label for="email">{"Work email"}</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    placeholder="you@company.com"
                    value={(*email).clone()}
                    oninput={input_handler(&email)}
                />
            </div>
            <div class="form-group">
                <label for="company">{"Company"}</label>
                <input
                    type="text"
                    id="company"
                    name="company"
                    placeholder="Company name"
                    value={(*company).clone()}
                    oninput={input_handler(&company)}
                />
            </div>
            <div class="form-group">
                <label for="phone">{"Phone"}</label>
                <input
                    type="tel"
                    id="phone"
                    name="phone"
                    placeholder="+91 98765 43210"
                    value={(*phone).clone()}
                    oninput={input_handler(&phone)}
                />
            </div>
            <button
                type="submit"
                class="btn btn-primary"
                style={button_style}
                disabled={button.is_disabled()}
            >
                {button.label(SUBMIT_LABEL)}
            </button>
        </form>
    }
}
