use opina_types::{AnswerRecord, Company, GatewayError, QuestionnaireItem, SurveyGateway};
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{check_status, decode, decode_items};
use crate::wire::{CompanyDto, SubmitBatchDto};
use crate::{ApiConfig, ClientError};

/// Anonymous client for the public survey page.
///
/// No credentials, no caching: every respondent session fetches fresh data.
#[derive(Debug, Clone)]
pub struct PublicClient {
    http: Client,
    config: ApiConfig,
}

impl PublicClient {
    /// Create a client against the configured backend.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let http = Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// Fetch the company's public record.
    pub fn company(&self, company_id: &str) -> Result<Company, ClientError> {
        debug!(company_id, "fetching public company record");
        let url = self.config.url(&format!("/companies/public/{company_id}"));
        let response = check_status(self.http.get(url).send()?)?;
        let dto: CompanyDto = decode(response)?;
        Ok(dto.into())
    }

    /// Fetch the company's questionnaire, sorted by display position.
    ///
    /// An empty questionnaire is a valid response, not an error.
    pub fn questionnaire(&self, company_id: &str) -> Result<Vec<QuestionnaireItem>, ClientError> {
        debug!(company_id, "fetching public questionnaire");
        let url = self
            .config
            .url(&format!("/forms/public/company/{company_id}"));
        let response = check_status(self.http.get(url).send()?)?;
        let mut items = decode_items(response)?;
        items.sort_by_key(QuestionnaireItem::order);
        Ok(items)
    }

    /// Submit a completed answer batch, all-or-nothing.
    pub fn submit(&self, batch: &[AnswerRecord]) -> Result<(), ClientError> {
        debug!(answers = batch.len(), "submitting answer batch");
        let url = self.config.url("/satisfaction-surveys/multiple");
        let body = SubmitBatchDto::from_records(batch);
        check_status(self.http.post(url).json(&body).send()?)?;
        Ok(())
    }
}

impl SurveyGateway for PublicClient {
    fn fetch_company(&self, company_id: &str) -> Result<Company, GatewayError> {
        Ok(self.company(company_id)?)
    }

    fn fetch_questionnaire(
        &self,
        company_id: &str,
    ) -> Result<Vec<QuestionnaireItem>, GatewayError> {
        Ok(self.questionnaire(company_id)?)
    }

    fn submit_answers(&self, batch: &[AnswerRecord]) -> Result<(), GatewayError> {
        Ok(self.submit(batch)?)
    }
}
