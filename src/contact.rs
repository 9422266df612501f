use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;

use crate::config::RelayConfig;
use crate::error::{FormError, SubmitError, TransitionError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// The contact form lifecycle.
///
/// ```text
/// Idle  --begin-->  Loading --finish(ok)--> Success --dismiss/expire--> Idle
/// Error --begin-->  Loading --finish(err)-> Error
/// ```
///
/// Every `begin` opens a new attempt. A reset timer scheduled for one attempt is
/// ignored once a later attempt has started or the success card was dismissed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    state: SubmissionState,
    attempt: u64,
}

impl Submission {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmissionState::Loading
    }

    pub fn begin(&mut self) -> Result<u64, TransitionError> {
        match self.state {
            SubmissionState::Loading => Err(TransitionError::AlreadySending),
            SubmissionState::Success => Err(TransitionError::AwaitingDismissal),
            SubmissionState::Idle | SubmissionState::Error => {
                self.state = SubmissionState::Loading;
                self.attempt += 1;
                Ok(self.attempt)
            }
        }
    }

    pub fn finish(
        &mut self,
        outcome: &Result<(), SubmitError>,
    ) -> Result<SubmissionState, TransitionError> {
        if self.state != SubmissionState::Loading {
            return Err(TransitionError::NotSending);
        }
        self.state = match outcome {
            Ok(()) => SubmissionState::Success,
            Err(_) => SubmissionState::Error,
        };
        Ok(self.state)
    }

    /// User closed the success card.
    pub fn dismiss(&mut self) -> bool {
        if self.state != SubmissionState::Success {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }

    /// The reset timer for `attempt` fired.
    pub fn expire(&mut self, attempt: u64) -> bool {
        if attempt != self.attempt {
            return false;
        }
        self.dismiss()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ];
        match required.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(FormError::MissingField(field)),
            None => Ok(()),
        }
    }

    /// Applies the form's reaction to a finished submission: a sent message
    /// empties every field, a failed one leaves them for another try. Returns
    /// whether anything changed.
    pub fn settle(&mut self, next: SubmissionState) -> bool {
        if next != SubmissionState::Success {
            return false;
        }
        *self = Self::default();
        true
    }
}

/// JSON body posted to the relay. Hidden control fields come first, as in the
/// form markup.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ContactPayload {
    #[serde(rename = "_subject")]
    pub subject: String,
    #[serde(rename = "_template")]
    pub template: String,
    #[serde(rename = "_captcha")]
    pub captcha: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    pub fn new(config: &RelayConfig, fields: &ContactFields) -> Self {
        Self {
            subject: config.subject.clone(),
            template: config.template.clone(),
            captcha: config.captcha.clone(),
            name: fields.name.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RelayReply {
    pub status: u16,
    pub ok: bool,
    pub body: Value,
}

impl RelayReply {
    /// Reads a raw relay response. A body that is not JSON is a failure even
    /// when the status is ok.
    pub fn parse(status: u16, ok: bool, body: &str) -> Result<Self, SubmitError> {
        let body = serde_json::from_str(body).map_err(|e| SubmitError::Decode(e.to_string()))?;
        Ok(Self { status, ok, body })
    }

    /// The relay's own success flag. Only a JSON boolean `true` counts.
    pub fn reports_success(&self) -> bool {
        self.body.get("success") == Some(&Value::Bool(true))
    }

    /// Either an ok status or an explicit success flag is enough.
    pub fn into_outcome(self) -> Result<(), SubmitError> {
        if self.ok || self.reports_success() {
            Ok(())
        } else {
            Err(SubmitError::Rejected {
                status: self.status,
            })
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait RelayTransport {
    async fn post(&self, endpoint: &str, payload: &ContactPayload) -> Result<RelayReply, SubmitError>;
}

/// Browser `fetch` via gloo-net.
pub struct GlooRelay;

impl RelayTransport for GlooRelay {
    async fn post(&self, endpoint: &str, payload: &ContactPayload) -> Result<RelayReply, SubmitError> {
        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| SubmitError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        RelayReply::parse(response.status(), response.ok(), &body)
    }
}

/// Sends one message. No retries and no dedup: each call is one POST.
pub async fn submit_message<T>(
    transport: &T,
    config: &RelayConfig,
    fields: &ContactFields,
) -> Result<(), SubmitError>
where
    T: RelayTransport,
{
    let payload = ContactPayload::new(config, fields);
    transport.post(&config.endpoint, &payload).await?.into_outcome()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    struct MockRelay {
        replies: RefCell<VecDeque<Result<RelayReply, SubmitError>>>,
        sent: RefCell<Vec<(String, ContactPayload)>>,
    }

    impl MockRelay {
        fn new(replies: Vec<Result<RelayReply, SubmitError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl RelayTransport for MockRelay {
        async fn post(&self, endpoint: &str, payload: &ContactPayload) -> Result<RelayReply, SubmitError> {
            self.sent
                .borrow_mut()
                .push((endpoint.to_string(), payload.clone()));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(SubmitError::Transport("no reply queued".into())))
        }
    }

    fn reply(status: u16, body: Value) -> Result<RelayReply, SubmitError> {
        Ok(RelayReply {
            status,
            ok: (200..300).contains(&status),
            body,
        })
    }

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there".into(),
        }
    }

    /// Mirrors what the form component does with one submit click.
    fn run(
        relay: &MockRelay,
        machine: &mut Submission,
        fields: &mut ContactFields,
    ) -> Vec<SubmissionState> {
        let mut seen = vec![machine.state()];
        machine.begin().unwrap();
        seen.push(machine.state());
        let outcome = block_on(submit_message(relay, &RelayConfig::default(), fields));
        let next = machine.finish(&outcome).unwrap();
        fields.settle(next);
        seen.push(machine.state());
        seen
    }

    #[test]
    fn success_reply_clears_fields() {
        let relay = MockRelay::new(vec![reply(200, json!({ "success": true }))]);
        let mut machine = Submission::default();
        let mut fields = filled();

        let seen = run(&relay, &mut machine, &mut fields);

        assert_eq!(
            seen,
            vec![
                SubmissionState::Idle,
                SubmissionState::Loading,
                SubmissionState::Success
            ]
        );
        assert_eq!(fields, ContactFields::default());
        assert_eq!(relay.sent.borrow().len(), 1);
    }

    #[test]
    fn network_failure_keeps_fields() {
        let relay = MockRelay::new(vec![Err(SubmitError::Transport("connection refused".into()))]);
        let mut machine = Submission::default();
        let mut fields = filled();

        let seen = run(&relay, &mut machine, &mut fields);

        assert_eq!(
            seen,
            vec![
                SubmissionState::Idle,
                SubmissionState::Loading,
                SubmissionState::Error
            ]
        );
        assert_eq!(fields, filled());
    }

    #[test]
    fn undecodable_body_is_an_error_even_with_ok_status() {
        let parsed = RelayReply::parse(200, true, "<html>");
        assert!(matches!(parsed, Err(SubmitError::Decode(_))));

        let relay = MockRelay::new(vec![RelayReply::parse(200, true, "")]);
        let outcome = block_on(submit_message(&relay, &RelayConfig::default(), &filled()));
        assert!(matches!(outcome, Err(SubmitError::Decode(_))));
    }

    #[test]
    fn parsed_reply_keeps_status_and_body() {
        let parsed = RelayReply::parse(500, false, r#"{"success":true}"#).unwrap();
        assert_eq!(parsed.status, 500);
        assert!(!parsed.ok);
        assert!(parsed.reports_success());
        assert_eq!(parsed.into_outcome(), Ok(()));
    }

    #[test]
    fn settle_clears_only_after_success() {
        let mut fields = filled();
        assert!(!fields.settle(SubmissionState::Error));
        assert!(!fields.settle(SubmissionState::Loading));
        assert_eq!(fields, filled());

        assert!(fields.settle(SubmissionState::Success));
        assert_eq!(fields, ContactFields::default());
    }

    #[test]
    fn ok_status_or_success_flag_is_enough() {
        assert!(reply(200, json!({})).unwrap().into_outcome().is_ok());
        assert!(reply(200, json!({ "success": false })).unwrap().into_outcome().is_ok());
        assert!(reply(500, json!({ "success": true })).unwrap().into_outcome().is_ok());
        assert_eq!(
            reply(422, json!({ "success": false })).unwrap().into_outcome(),
            Err(SubmitError::Rejected { status: 422 })
        );
    }

    #[test]
    fn string_success_flag_does_not_count() {
        let outcome = reply(400, json!({ "success": "true" })).unwrap().into_outcome();
        assert_eq!(outcome, Err(SubmitError::Rejected { status: 400 }));
    }

    #[test]
    fn non_object_body_without_ok_status_is_rejected() {
        let outcome = reply(503, json!("maintenance")).unwrap().into_outcome();
        assert_eq!(outcome, Err(SubmitError::Rejected { status: 503 }));
    }

    #[test]
    fn payload_carries_form_and_hidden_fields() {
        let relay = MockRelay::new(vec![reply(200, json!({ "success": true }))]);
        let config = RelayConfig::default();
        block_on(submit_message(&relay, &config, &filled())).unwrap();

        let sent = relay.sent.borrow();
        let (endpoint, payload) = &sent[0];
        assert_eq!(endpoint, &config.endpoint);

        let body = serde_json::to_value(payload).unwrap();
        assert_eq!(
            body,
            json!({
                "_subject": "New Portfolio Contact Submission",
                "_template": "table",
                "_captcha": "false",
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello there",
            })
        );
    }

    #[test]
    fn identical_submissions_are_independent() {
        let relay = MockRelay::new(vec![
            reply(500, json!({ "success": false })),
            reply(200, json!({ "success": true })),
        ]);
        let config = RelayConfig::default();

        let first = block_on(submit_message(&relay, &config, &filled()));
        let second = block_on(submit_message(&relay, &config, &filled()));

        assert_eq!(first, Err(SubmitError::Rejected { status: 500 }));
        assert_eq!(second, Ok(()));
        let sent = relay.sent.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].1, sent[1].1);
    }

    #[test]
    fn duplicate_begin_is_rejected_while_loading() {
        let mut machine = Submission::default();
        assert_eq!(machine.begin(), Ok(1));
        assert_eq!(machine.begin(), Err(TransitionError::AlreadySending));
        assert!(machine.is_sending());
    }

    #[test]
    fn error_allows_resubmit() {
        let mut machine = Submission::default();
        machine.begin().unwrap();
        machine
            .finish(&Err(SubmitError::Rejected { status: 500 }))
            .unwrap();
        assert_eq!(machine.state(), SubmissionState::Error);
        assert_eq!(machine.begin(), Ok(2));
        assert_eq!(machine.state(), SubmissionState::Loading);
    }

    #[test]
    fn success_must_be_dismissed_before_next_submit() {
        let mut machine = Submission::default();
        machine.begin().unwrap();
        machine.finish(&Ok(())).unwrap();
        assert_eq!(machine.begin(), Err(TransitionError::AwaitingDismissal));
    }

    #[test]
    fn finish_without_begin_is_refused() {
        let mut machine = Submission::default();
        assert_eq!(machine.finish(&Ok(())), Err(TransitionError::NotSending));
        assert_eq!(machine.state(), SubmissionState::Idle);
    }

    #[test]
    fn reset_timer_returns_to_idle() {
        let mut machine = Submission::default();
        let attempt = machine.begin().unwrap();
        machine.finish(&Ok(())).unwrap();
        assert!(machine.expire(attempt));
        assert_eq!(machine.state(), SubmissionState::Idle);
    }

    #[test]
    fn stale_timer_after_dismissal_is_ignored() {
        let mut machine = Submission::default();
        let first = machine.begin().unwrap();
        machine.finish(&Ok(())).unwrap();
        assert!(machine.dismiss());

        machine.begin().unwrap();
        machine.finish(&Ok(())).unwrap();
        assert!(!machine.expire(first));
        assert_eq!(machine.state(), SubmissionState::Success);
    }

    #[test]
    fn timer_does_not_touch_error_state() {
        let mut machine = Submission::default();
        let attempt = machine.begin().unwrap();
        machine
            .finish(&Err(SubmitError::Transport("offline".into())))
            .unwrap();
        assert!(!machine.expire(attempt));
        assert_eq!(machine.state(), SubmissionState::Error);
    }

    #[test]
    fn empty_required_fields_are_reported_in_form_order() {
        let mut fields = filled();
        fields.email.clear();
        fields.message = "   ".into();
        assert_eq!(fields.validate(), Err(FormError::MissingField("email")));

        fields.email = "ada@example.com".into();
        assert_eq!(fields.validate(), Err(FormError::MissingField("message")));

        assert_eq!(filled().validate(), Ok(()));
    }
}
