use crate::{AnswerRecord, Company, QuestionnaireItem};

/// Error type for remote gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The requested company id does not resolve.
    #[error("Company not found")]
    NotFound,

    /// Transport or backend failure (network, server error, bad payload).
    #[error("Gateway error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl GatewayError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}

/// The remote data gateway consumed by the survey runner's driver.
///
/// The gateway is stateless from the runner's perspective: no caching of
/// questionnaire or company data across sessions.
pub trait SurveyGateway {
    /// Fetch the company's public record.
    ///
    /// Fails with [`GatewayError::NotFound`] if the id does not resolve.
    fn fetch_company(&self, company_id: &str) -> Result<Company, GatewayError>;

    /// Fetch the company's questionnaire, ordered by display position.
    ///
    /// An empty list is a valid, non-error response.
    fn fetch_questionnaire(
        &self,
        company_id: &str,
    ) -> Result<Vec<QuestionnaireItem>, GatewayError>;

    /// Submit a completed answer batch.
    ///
    /// All-or-nothing: there is no partial acknowledgment, and a failure
    /// must not be treated as having persisted anything.
    fn submit_answers(&self, batch: &[AnswerRecord]) -> Result<(), GatewayError>;
}
