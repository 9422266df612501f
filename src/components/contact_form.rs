use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{RelayConfig, SUCCESS_RESET_MS};
use crate::contact::{submit_message, ContactFields, GlooRelay, Submission, SubmissionState};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let config = use_memo(|_| RelayConfig::default(), ());
    // The machine is the only writer; `status` mirrors it for rendering.
    let machine = use_mut_ref(Submission::default);
    let status = use_state(SubmissionState::default);
    let reset_timer = use_mut_ref(|| None::<Timeout>);
    let is_mounted = use_is_mounted();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);

    {
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    reset_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_submit = {
        let config = config.clone();
        let machine = machine.clone();
        let status = status.clone();
        let reset_timer = reset_timer.clone();
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let fields = ContactFields {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            if let Err(err) = fields.validate() {
                debug!("Not submitting: {}", err);
                return;
            }

            let attempt = match machine.borrow_mut().begin() {
                Ok(attempt) => attempt,
                Err(err) => {
                    debug!("Ignoring submit: {}", err);
                    return;
                }
            };
            status.set(machine.borrow().state());

            let config = config.clone();
            let machine = machine.clone();
            let status = status.clone();
            let reset_timer = reset_timer.clone();
            let is_mounted = is_mounted.clone();
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            spawn_local(async move {
                let outcome = submit_message(&GlooRelay, &config, &fields).await;
                if !is_mounted() {
                    return;
                }

                match &outcome {
                    Ok(()) => info!("Contact message #{} sent", attempt),
                    Err(err) => warn!("Contact message #{} failed: {}", attempt, err),
                }

                let next = match machine.borrow_mut().finish(&outcome) {
                    Ok(next) => next,
                    Err(err) => {
                        warn!("Dropping relay reply for #{}: {}", attempt, err);
                        return;
                    }
                };
                status.set(next);

                let mut fields = fields;
                if fields.settle(next) {
                    name.set(fields.name);
                    email.set(fields.email);
                    message.set(fields.message);
                }

                if next == SubmissionState::Success {
                    let machine = machine.clone();
                    let status = status.clone();
                    let timeout = Timeout::new(SUCCESS_RESET_MS, move || {
                        if machine.borrow_mut().expire(attempt) {
                            status.set(SubmissionState::Idle);
                        }
                    });
                    *reset_timer.borrow_mut() = Some(timeout);
                }
            });
        })
    };

    let on_dismiss = {
        let machine = machine.clone();
        let status = status.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |_: MouseEvent| {
            reset_timer.borrow_mut().take();
            if machine.borrow_mut().dismiss() {
                status.set(machine.borrow().state());
            }
        })
    };

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
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    if *status == SubmissionState::Success {
        return html! {
            <div class="contact-success">
                <div class="success-badge">{"✓"}</div>
                <h3>{"Message Sent!"}</h3>
                <p>{"Thank you, I'll get back to you shortly."}</p>
                <button class="success-dismiss" onclick={on_dismiss}>{"Send another message"}</button>
            </div>
        };
    }

    let sending = machine.borrow().is_sending();

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            <div class="form-row">
                <div class="form-field">
                    <label>{"Name"}</label>
                    <input required={true} name="name" type="text" placeholder="Your Name"
                        value={(*name).clone()} oninput={on_name} />
                </div>
                <div class="form-field">
                    <label>{"Email"}</label>
                    <input required={true} name="email" type="email" placeholder="Email"
                        value={(*email).clone()} oninput={on_email} />
                </div>
            </div>
            <div class="form-field">
                <label>{"Message"}</label>
                <textarea required={true} name="message" rows="4" placeholder="How can I help?"
                    value={(*message).clone()} oninput={on_message} />
            </div>
            if *status == SubmissionState::Error {
                <div class="form-error">{"⚠ Something went wrong. Please try again."}</div>
            }
            <button type="submit" class="form-submit" disabled={sending}>
                if sending {
                    <span class="loading-spinner"></span>{" Sending..."}
                } else {
                    {"Send Message ➤"}
                }
            </button>
        </form>
    }
}
