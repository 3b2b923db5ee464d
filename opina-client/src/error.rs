use opina_types::GatewayError;
use reqwest::StatusCode;
use reqwest::blocking::Response;

use crate::wire;

/// Error type for backend requests.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure or undecodable payload.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The resource does not exist (404).
    #[error("Resource not found")]
    NotFound,

    /// Missing or expired credentials (401). The session is cleared.
    #[error("Authentication required")]
    Unauthorized,

    /// Any other non-success status.
    #[error("Server rejected the request with status {status}")]
    Status { status: u16 },

    /// The editor cap: a questionnaire holds at most
    /// [`MAX_QUESTIONS`](opina_types::MAX_QUESTIONS) items.
    #[error("A questionnaire holds at most {max} questions, got {got}")]
    TooManyQuestions { max: usize, got: usize },
}

impl From<ClientError> for GatewayError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound => GatewayError::NotFound,
            other => GatewayError::backend(other),
        }
    }
}

/// Map a non-success status to the error taxonomy, passing successes through.
pub(crate) fn check_status(response: Response) -> Result<Response, ClientError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(ClientError::NotFound),
        StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
        status => {
            tracing::warn!(status = status.as_u16(), "backend rejected request");
            Err(ClientError::Status {
                status: status.as_u16(),
            })
        }
    }
}

/// Decode a JSON body after the status check.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, ClientError> {
    Ok(response.json::<T>()?)
}

/// Convenience for endpoints returning form lists.
pub(crate) fn decode_items(
    response: Response,
) -> Result<Vec<opina_types::QuestionnaireItem>, ClientError> {
    let forms: Vec<wire::FormDto> = decode(response)?;
    Ok(forms.into_iter().map(Into::into).collect())
}
