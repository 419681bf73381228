use crate::errors::{FrontendError, FrontendResult};

use serde::Deserialize;

/// Body shape returned by the API. Every field is optional and anything
/// unparseable is treated as an empty object.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str::<ApiMessage>(body).unwrap_or_default()
    }
}

/// Map a status and raw body onto the submission outcome.
pub fn interpret_response(status: u16, body: &str) -> FrontendResult<Option<String>> {
    let message = ApiMessage::from_body(body)
        .message
        .filter(|m| !m.is_empty());

    if (200..300).contains(&status) {
        Ok(message)
    } else {
        Err(FrontendError::Rejected { status, message })
    }
}
