use thiserror::Error;

pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed. Please wait a moment and try again.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials and try again.";
pub const NETWORK_FAILED_MESSAGE: &str = "Could not reach the server.";
pub const CONFIG_FAILED_MESSAGE: &str =
    "The application is not configured correctly. Please contact your administrator.";

/// Unified error type for the front-end forms
#[derive(Error, Debug)]
pub enum FrontendError {
    // Client-side errors
    #[error("Form has {0} invalid field(s)")]
    InvalidForm(usize),
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    // Submission errors
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    // Setup errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FrontendError {
    /// Get user-friendly error message. A rejection shows the server's own
    /// message when it sent one, otherwise the form's `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            FrontendError::InvalidForm(_) => "Please correct the highlighted fields".to_string(),
            FrontendError::SubmissionInFlight => "Sending… please wait".to_string(),
            FrontendError::Network(_) => NETWORK_FAILED_MESSAGE.to_string(),
            FrontendError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            FrontendError::Rejected { message: None, .. } => fallback.to_string(),
            FrontendError::InvalidConfig(_) => CONFIG_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Result type for front-end operations
pub type FrontendResult<T> = Result<T, FrontendError>;

/// Convert specific error types to FrontendError
pub trait ToFrontendError {
    fn to_frontend_error(self) -> FrontendError;
}

impl ToFrontendError for reqwest::Error {
    fn to_frontend_error(self) -> FrontendError {
        // Builder errors come from a bad URL or client setup, not the network
        if self.is_builder() {
            FrontendError::InvalidConfig(self.to_string())
        } else {
            FrontendError::Network(self.to_string())
        }
    }
}
