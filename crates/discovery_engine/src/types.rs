use std::fmt;

use thiserror::Error;

pub type QueryId = u64;
pub type PipelineId = u64;

/// User-facing text for a dispatch that outlived its time window.
pub const TIMEOUT_MESSAGE: &str = "Request timeout - please try again";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A dispatched query settled; exactly one per dispatch.
    QueryCompleted {
        query_id: QueryId,
        result: Result<String, DispatchError>,
    },
    /// A pipeline ticker fired.
    PipelineTick { pipeline_id: PipelineId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DispatchError {
    pub kind: FailureKind,
    /// Ready to show to the user.
    pub message: String,
}

impl DispatchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn timeout() -> Self {
        Self::new(FailureKind::Timeout, TIMEOUT_MESSAGE)
    }

    pub(crate) fn http_status(status: reqwest::StatusCode) -> Self {
        let message = format!(
            "API Error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default()
        );
        Self::new(
            FailureKind::HttpStatus(status.as_u16()),
            message.trim_end().to_string(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    HttpStatus(u16),
    Network,
    InvalidResponse,
    InvalidConfig,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
            FailureKind::InvalidConfig => write!(f, "invalid configuration"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("invalid dispatch settings: {0}")]
    Dispatch(#[from] DispatchError),
}
