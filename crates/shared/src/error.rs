use thiserror::Error;

/// Failure taxonomy for one prediction request. All variants collapse into
/// the same user-visible error terminal state; the distinction exists for
/// operator-facing logs and the event stream only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PredictionError {
    #[error("failed to reach prediction endpoint: {reason}")]
    Transport { reason: String },
    #[error("prediction endpoint rejected the request with status {status}")]
    RejectedStatus { status: u16 },
    #[error("prediction endpoint returned an undecodable body: {reason}")]
    MalformedResponse { reason: String },
}

impl PredictionError {
    pub fn kind(&self) -> &'static str {
        match self {
            PredictionError::Transport { .. } => "transport",
            PredictionError::RejectedStatus { .. } => "rejected_status",
            PredictionError::MalformedResponse { .. } => "malformed_response",
        }
    }
}
