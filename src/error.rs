use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Every failure an admin call can surface.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),

    /// The backend answered with `status: false` or a non-2xx code.
    #[error("{message}")]
    Backend { status: Option<u16>, message: String },

    #[error("Rate limit exceeded. Try again in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Access denied: Admin role required")]
    AccessDenied,

    #[error("Not signed in")]
    Unauthenticated,

    #[error("{0}")]
    Validation(String),

    #[error("session store error: {0}")]
    Session(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// The three failure families an admin view distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Backend,
    RateLimited,
}

impl ClientError {
    pub fn backend(message: impl Into<String>) -> Self {
        ClientError::Backend {
            status: None,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Transport(_) | ClientError::Decode(_) => ErrorKind::Transport,
            ClientError::RateLimited { .. } => ErrorKind::RateLimited,
            ClientError::Backend { .. }
            | ClientError::AccessDenied
            | ClientError::Unauthenticated
            | ClientError::Validation(_)
            | ClientError::Session(_)
            | ClientError::Config(_) => ErrorKind::Backend,
        }
    }

    /// Inline message for the affected view. Transport failures are generic,
    /// everything else is shown as-is.
    pub fn user_message(&self, mutating: bool) -> String {
        match self.kind() {
            ErrorKind::Transport if mutating => "Failed to save changes. Please retry.".into(),
            ErrorKind::Transport => "Failed to load data. Please retry.".into(),
            _ => self.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::Session(e.to_string())
    }
}
