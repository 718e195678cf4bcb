use yew::prelude::*;
use web_sys::{HtmlInputElement, InputEvent, MouseEvent};
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use gloo_console::log;

use crate::config;
use crate::state::submit::{DeliveryConfig, SendFailure, SendLifecycle, SendStatus};

/// Field names the delivery template expects.
#[derive(Serialize)]
struct TemplateParams {
    from_name: String,
    from_email: String,
    message: String,
}

fn delivery_config() -> DeliveryConfig {
    DeliveryConfig {
        service_id: config::mail_service_id().to_string(),
        template_id: config::mail_template_id().to_string(),
        account_id: config::mail_account_id().to_string(),
    }
}

async fn deliver(config: DeliveryConfig, params: TemplateParams) -> Result<(), String> {
    let body = json!({
        "service_id": config.service_id,
        "template_id": config.template_id,
        "user_id": config.account_id,
        "template_params": params,
    });

    let response = Request::post(config::mail_endpoint())
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("delivery rejected with status {}", response.status()))
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(SendStatus::default);
    let lifecycle = use_mut_ref(SendLifecycle::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();
        let lifecycle = lifecycle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();

            let delivery = delivery_config();
            if !delivery.is_complete() {
                lifecycle.borrow_mut().reject(SendFailure::MissingConfig);
                status.set(lifecycle.borrow().status());
                log!("contact send skipped: delivery identifiers are not configured");
                return;
            }

            let ticket = match lifecycle.borrow_mut().begin() {
                Some(ticket) => ticket,
                // An attempt is already in flight.
                None => return,
            };
            status.set(SendStatus::Sending);

            let params = TemplateParams {
                from_name: (*name).clone(),
                from_email: (*email).clone(),
                message: (*message).clone(),
            };

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let status = status.clone();
            let lifecycle = lifecycle.clone();
            spawn_local(async move {
                let outcome = deliver(delivery, params).await;
                if let Err(ref err) = outcome {
                    log!("contact send failed:", err.clone());
                }

                if !lifecycle.borrow_mut().settle(ticket, outcome.is_ok()) {
                    // A newer attempt owns the status now.
                    return;
                }
                let settled = lifecycle.borrow().status();
                if settled == SendStatus::Sent {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                status.set(settled);
            });
        })
    };

    let sending = *status == SendStatus::Sending;

    html! {
        <div class="contact-form">
            <input
                type="text"
                placeholder="Your Name"
                value={(*name).clone()}
                oninput={on_name}
            />
            <input
                type="email"
                placeholder="Your Email"
                value={(*email).clone()}
                oninput={on_email}
            />
            <textarea
                placeholder="Your Message"
                value={(*message).clone()}
                oninput={on_message}
            />
            <button class="send-button" onclick={on_submit} disabled={sending}>
                { if sending { "Sending..." } else { "Send Message" } }
            </button>
            {
                match *status {
                    SendStatus::Sending => html! {
                        <div class="send-note">{"Hang on, your message is on its way."}</div>
                    },
                    SendStatus::Sent => html! {
                        <div class="success-message">{"Message sent! We'll get back to you shortly."}</div>
                    },
                    SendStatus::Failed(SendFailure::MissingConfig) => html! {
                        <div class="error-message">{"Sending isn't set up on this build. Reach us at hello@socialstudioz.example instead."}</div>
                    },
                    SendStatus::Failed(SendFailure::Delivery) => html! {
                        <div class="error-message">{"Something went wrong on the way out. Your message is still here, give it another try."}</div>
                    },
                    SendStatus::Idle => html! {},
                }
            }
            <style>
                {r#".contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    max-width: 28rem;
                    margin: 0 auto;
                }
                .contact-form input,
                .contact-form textarea {
                    border: none;
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    font-size: 1rem;
                    font-family: inherit;
                    background: rgba(30, 58, 138, 0.2);
                    color: #fff;
                }
                .theme-light .contact-form input,
                .theme-light .contact-form textarea {
                    background: #fff;
                    color: #1f2937;
                }
                .contact-form input::placeholder,
                .contact-form textarea::placeholder {
                    color: #9ca3af;
                }
                .contact-form textarea {
                    min-height: 8rem;
                    resize: vertical;
                }
                .send-button {
                    border: none;
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    background: #3B82F6;
                    color: #fff;
                    transition: background 0.2s ease;
                }
                .send-button:hover {
                    background: #2563EB;
                }
                .send-button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .send-note {
                    color: #9ca3af;
                    font-size: 0.9rem;
                    text-align: center;
                }
                .success-message {
                    color: #34d399;
                    text-align: center;
                }
                .error-message {
                    color: #f87171;
                    text-align: center;
                }"#}
            </style>
        </div>
    }
}
