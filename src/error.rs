use thiserror::Error;

/// Why a contact submission failed. The form shows all of these the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("relay unreachable: {0}")]
    Transport(String),

    #[error("relay returned a body that is not JSON: {0}")]
    Decode(String),

    #[error("relay rejected the message (status {status})")]
    Rejected { status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
}

/// A transition the submission state machine refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("a submission is already in flight")]
    AlreadySending,

    #[error("the success message has not been dismissed yet")]
    AwaitingDismissal,

    #[error("no submission is in flight")]
    NotSending,
}
