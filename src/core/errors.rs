use serde::ser::SerializeStruct;
use thiserror::Error;

use crate::core::types::{ContentKind, SubmissionOutcome};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("network error: {0}")]
    Network(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("AppError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Config(_) => "CONFIG_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Io(_) => "IO_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        if value.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(value.to_string())
        } else {
            Self::Io(value.to_string())
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidInput(value.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// How far a submission got before failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStage {
    /// The request body could not be assembled; nothing was sent.
    Encode,
    /// No response was received.
    Deliver,
    /// The backend answered with a non-2xx status.
    Respond,
}

/// A request that was sent (or attempted) and did not succeed.
///
/// `status` and `server_message` are only set at `SubmissionStage::Respond`;
/// without a response there is no body to read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe_failure(.kind, .stage, .status, .server_message))]
pub struct SubmissionError {
    pub kind: ContentKind,
    pub stage: SubmissionStage,
    pub status: Option<u16>,
    pub server_message: Option<String>,
}

fn describe_failure(
    kind: &ContentKind,
    stage: &SubmissionStage,
    status: &Option<u16>,
    server_message: &Option<String>,
) -> String {
    let message = server_message
        .as_deref()
        .unwrap_or_else(|| kind.default_failure_message());
    match (stage, status) {
        (SubmissionStage::Respond, Some(status)) => {
            format!("{} rejected with status {status}: {message}", kind.as_str())
        }
        (SubmissionStage::Encode, _) => format!("{} not encoded: {message}", kind.as_str()),
        _ => format!("{} not delivered: {message}", kind.as_str()),
    }
}

impl SubmissionError {
    pub fn encoding(kind: ContentKind) -> Self {
        Self {
            kind,
            stage: SubmissionStage::Encode,
            status: None,
            server_message: None,
        }
    }

    pub fn transport(kind: ContentKind) -> Self {
        Self {
            kind,
            stage: SubmissionStage::Deliver,
            status: None,
            server_message: None,
        }
    }

    pub fn rejected(kind: ContentKind, status: u16, server_message: Option<String>) -> Self {
        Self {
            kind,
            stage: SubmissionStage::Respond,
            status: Some(status),
            server_message: server_message.filter(|message| !message.trim().is_empty()),
        }
    }

    pub fn message(&self) -> &str {
        self.server_message
            .as_deref()
            .unwrap_or_else(|| self.kind.default_failure_message())
    }

    pub fn code(&self) -> &'static str {
        match self.stage {
            SubmissionStage::Encode => "ENCODING_ERROR",
            SubmissionStage::Deliver => "NETWORK_ERROR",
            SubmissionStage::Respond => "SERVER_REJECTED",
        }
    }
}

impl From<Result<(), SubmissionError>> for SubmissionOutcome {
    fn from(value: Result<(), SubmissionError>) -> Self {
        match value {
            Ok(()) => Self::Success,
            Err(err) => Self::Failure {
                message: err.message().to_string(),
            },
        }
    }
}
