use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::lead::{submit_lead, LeadForm, SubmissionStatus, SubmitError};
use crate::reveal::use_scroll_reveal;

pub fn headline(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Success => "Welcome to the Lab.",
        _ => "Ready to Start?",
    }
}

/// Transport failures and rejected requests read the same to the visitor.
pub fn message(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Success => {
            "Your application for the 2026 Pilot has been received. We will contact you shortly."
        }
        SubmissionStatus::Error => "Something went wrong. Please check your connection and try again.",
        SubmissionStatus::Idle | SubmissionStatus::Submitting => {
            "Secure your place in the future of dementia care."
        }
    }
}

pub fn button_label(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Submitting => "Sending...",
        _ => "Contact Us",
    }
}

pub enum LeadCaptureMsg {
    SetEmail(String),
    Submit,
    Completed(Result<(), SubmitError>),
    Reset,
}

pub struct LeadCapture {
    form: LeadForm,
}

impl Component for LeadCapture {
    type Message = LeadCaptureMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: LeadForm::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadCaptureMsg::SetEmail(email) => {
                self.form.set_email(email);
                true
            }
            LeadCaptureMsg::Submit => match self.form.begin_submit() {
                Some(payload) => {
                    debug!("sending pilot signup");
                    ctx.link().send_future(async move {
                        let outcome = submit_lead(config::get_form_endpoint(), &payload).await;
                        LeadCaptureMsg::Completed(outcome)
                    });
                    true
                }
                None => false,
            },
            LeadCaptureMsg::Completed(outcome) => {
                self.form.complete(outcome);
                true
            }
            LeadCaptureMsg::Reset => self.form.reset(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let status = self.form.status();

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadCaptureMsg::Submit
        });
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            LeadCaptureMsg::SetEmail(input.value())
        });
        let onreset = ctx.link().callback(|_: MouseEvent| LeadCaptureMsg::Reset);

        html! {
            <>
                <h2 class="contact-title">{ headline(status) }</h2>
                <p class="contact-message">{ message(status) }</p>
                if status == SubmissionStatus::Success {
                    <button class="contact-reset" onclick={onreset}>
                        {"Submit Another Application"}
                    </button>
                } else {
                    <form class="contact-form" {onsubmit}>
                        <input
                            type="email"
                            required=true
                            value={self.form.email().to_string()}
                            {oninput}
                            placeholder="Your email address"
                            class="contact-input"
                        />
                        <button
                            type="submit"
                            class="contact-submit"
                            style={format!("background-color: {};", config::BRAND_GREEN)}
                            disabled={status == SubmissionStatus::Submitting}
                        >
                            { button_label(status) }
                        </button>
                    </form>
                }
            </>
        }
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let reveal = use_scroll_reveal();

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                    .contact-section {
                        padding: 8rem 2rem;
                    }
                    .contact-card {
                        position: relative;
                        overflow: hidden;
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 5rem;
                        border-radius: 4rem;
                        background: #0f172a;
                        color: #fff;
                        text-align: center;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .contact-glow {
                        position: absolute;
                        border-radius: 50%;
                        background: #9DA352;
                        pointer-events: none;
                    }
                    .contact-glow.top {
                        top: 0;
                        right: 0;
                        width: 16rem;
                        height: 16rem;
                        filter: blur(120px);
                        opacity: 0.2;
                    }
                    .contact-glow.bottom {
                        bottom: 0;
                        left: 0;
                        width: 12rem;
                        height: 12rem;
                        filter: blur(100px);
                        opacity: 0.1;
                    }
                    .contact-title {
                        position: relative;
                        font-size: 3.75rem;
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        margin-bottom: 2rem;
                    }
                    .contact-message {
                        position: relative;
                        max-width: 36rem;
                        margin: 0 auto 3rem;
                        font-size: 1.25rem;
                        line-height: 1.6;
                        color: #94a3b8;
                    }
                    .contact-form {
                        position: relative;
                        display: flex;
                        gap: 1rem;
                        max-width: 36rem;
                        margin: 0 auto;
                    }
                    .contact-input {
                        flex-grow: 1;
                        padding: 1.25rem 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                        font-size: 1.125rem;
                    }
                    .contact-input:focus {
                        outline: none;
                        border-color: rgba(255, 255, 255, 0.3);
                    }
                    .contact-submit {
                        padding: 1.25rem 2.5rem;
                        border: none;
                        border-radius: 1rem;
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 900;
                        cursor: pointer;
                    }
                    .contact-submit:disabled {
                        opacity: 0.5;
                        cursor: default;
                    }
                    .contact-reset {
                        position: relative;
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.5);
                        font-size: 0.75rem;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        text-decoration: underline;
                        text-underline-offset: 8px;
                        cursor: pointer;
                    }
                    .contact-reset:hover {
                        color: #fff;
                    }
                    @media (max-width: 640px) {
                        .contact-card {
                            padding: 4rem 1.5rem;
                        }
                        .contact-form {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
            <div ref={reveal.node.clone()} class={reveal.classes("contact-card")}>
                <div class="contact-glow top"></div>
                <div class="contact-glow bottom"></div>
                <LeadCapture />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_swaps_copy() {
        assert_eq!(headline(SubmissionStatus::Idle), "Ready to Start?");
        assert_eq!(headline(SubmissionStatus::Error), "Ready to Start?");
        assert_eq!(headline(SubmissionStatus::Success), "Welcome to the Lab.");
    }

    #[test]
    fn error_copy_is_generic() {
        assert_eq!(
            message(SubmissionStatus::Error),
            "Something went wrong. Please check your connection and try again."
        );
        assert_eq!(message(SubmissionStatus::Idle), message(SubmissionStatus::Submitting));
    }

    #[test]
    fn button_reflects_in_flight_request() {
        assert_eq!(button_label(SubmissionStatus::Idle), "Contact Us");
        assert_eq!(button_label(SubmissionStatus::Submitting), "Sending...");
        assert_eq!(button_label(SubmissionStatus::Error), "Contact Us");
    }
}
