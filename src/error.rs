//! Error taxonomy for predictions.
//!
//! Everything a caller can get back from a prediction falls into one of two
//! classes: the conditions were bad ([`PredictError::InvalidInput`]) or the
//! call never produced an answer ([`PredictError::Transport`]). The engine
//! itself only ever raises the first.

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";

/// Problems with the condition fields of a request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Field {field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("Field {field} must be finite")]
    NonFinite { field: &'static str },

    #[error("Field {field} out of range: {value} (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// Raised by a remote prediction service; carries its message.
    #[error("{0}")]
    Rejected(String),
}

/// Failures of the collaborator that carries a request to the engine.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("prediction endpoint unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("prediction endpoint returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode prediction response: {0}")]
    Decode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl PredictError {
    pub fn code(&self) -> &'static str {
        match self {
            PredictError::InvalidInput(_) => INVALID_INPUT,
            PredictError::Transport(_) => TRANSPORT_ERROR,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PredictError::InvalidInput(_))
    }
}
