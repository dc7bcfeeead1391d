use gloo_net::http::Request;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

/// Fixed label telling the intake service what the address was left for.
pub const PILOT_INTEREST: &str = "Pilot 2026 Interest";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode submission: {0}")]
    Encode(gloo_net::Error),
    #[error("request failed: {0}")]
    Transport(gloo_net::Error),
    #[error("intake service answered with status {status}")]
    Rejected { status: u16 },
}

#[derive(Debug, Serialize, PartialEq)]
struct Block {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'static str,
    value: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct LeadPayload {
    blocks: Vec<Block>,
}

impl LeadPayload {
    pub fn new(email: &str) -> Self {
        Self {
            blocks: vec![
                Block {
                    kind: "email",
                    name: "email",
                    value: email.to_string(),
                },
                Block {
                    kind: "text",
                    name: "message",
                    value: PILOT_INTEREST.to_string(),
                },
            ],
        }
    }
}

/// Email field plus submission status. Every transition goes through here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    email: String,
    status: SubmissionStatus,
}

impl LeadForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    /// Moves to `Submitting` and hands back the body to send, or `None` when
    /// nothing may be sent (empty email, request in flight, already accepted).
    pub fn begin_submit(&mut self) -> Option<LeadPayload> {
        if self.email.is_empty() {
            return None;
        }
        match self.status {
            SubmissionStatus::Idle | SubmissionStatus::Error => {
                self.status = SubmissionStatus::Submitting;
                Some(LeadPayload::new(&self.email))
            }
            SubmissionStatus::Submitting | SubmissionStatus::Success => None,
        }
    }

    /// Applies the outcome of the in-flight request. Ignored unless submitting.
    pub fn complete(&mut self, outcome: Result<(), SubmitError>) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.email.clear();
                self.status = SubmissionStatus::Success;
            }
            Err(err) => {
                warn!("pilot signup failed: {}", err);
                self.status = SubmissionStatus::Error;
            }
        }
    }

    /// Back to the empty form after a successful signup. Returns whether it applied.
    pub fn reset(&mut self) -> bool {
        if self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
            true
        } else {
            false
        }
    }
}

pub async fn submit_lead(endpoint: &str, payload: &LeadPayload) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .json(payload)
        .map_err(SubmitError::Encode)?
        .send()
        .await
        .map_err(SubmitError::Transport)?;

    if response.ok() {
        info!("pilot signup accepted");
        Ok(())
    } else {
        Err(SubmitError::Rejected {
            status: response.status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(email: &str) -> LeadForm {
        let mut form = LeadForm::default();
        form.set_email(email.to_string());
        form
    }

    #[test]
    fn payload_matches_intake_format() {
        let body = serde_json::to_string(&LeadPayload::new("a@b.com")).unwrap();
        assert_eq!(
            body,
            r#"{"blocks":[{"type":"email","name":"email","value":"a@b.com"},{"type":"text","name":"message","value":"Pilot 2026 Interest"}]}"#
        );
    }

    #[test]
    fn empty_email_sends_nothing() {
        let mut form = LeadForm::default();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn accepted_signup_clears_email() {
        let mut form = form_with("a@b.com");

        let payload = form.begin_submit().expect("payload");
        assert_eq!(payload, LeadPayload::new("a@b.com"));
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        form.complete(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.email(), "");
    }

    #[test]
    fn rejected_signup_keeps_email() {
        let mut form = form_with("a@b.com");
        form.begin_submit().expect("payload");

        form.complete(Err(SubmitError::Rejected { status: 422 }));
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.email(), "a@b.com");
    }

    #[test]
    fn transport_failure_keeps_email() {
        let mut form = form_with("a@b.com");
        form.begin_submit().expect("payload");

        let unreachable = gloo_net::Error::GlooError("network unreachable".to_string());
        form.complete(Err(SubmitError::Transport(unreachable)));
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.email(), "a@b.com");
    }

    #[test]
    fn no_second_request_while_in_flight() {
        let mut form = form_with("a@b.com");
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn error_allows_manual_resubmit() {
        let mut form = form_with("a@b.com");
        form.begin_submit();
        form.complete(Err(SubmitError::Rejected { status: 500 }));

        assert!(form.begin_submit().is_some());
        assert_eq!(form.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn stray_outcome_is_ignored() {
        let mut form = form_with("a@b.com");
        form.complete(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.email(), "a@b.com");
    }

    #[test]
    fn reset_only_from_success() {
        let mut form = form_with("a@b.com");
        assert!(!form.reset());
        assert_eq!(form.status(), SubmissionStatus::Idle);

        form.begin_submit();
        assert!(!form.reset());
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        form.complete(Ok(()));
        assert!(form.reset());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn rejection_message_names_status() {
        let err = SubmitError::Rejected { status: 503 };
        assert_eq!(err.to_string(), "intake service answered with status 503");
    }
}
