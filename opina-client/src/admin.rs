use opina_types::{Company, ItemId, ItemKind, MAX_QUESTIONS, QuestionnaireItem};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder, Response};
use tracing::debug;

use crate::error::{check_status, decode, decode_items};
use crate::stats::{SessionResponses, Statistics};
use crate::wire::{
    CompanyDto, CompanyUpdateDto, ExistsDto, FormDto, LoginRequestDto, LoginResponseDto,
    LogoUploadDto, NewFormBatchDto, NewFormDto, RegisterRequestDto, UpdateFormDto,
};
use crate::{ApiConfig, ClientError, Identity, Session};

/// A question to be created through the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    /// The question text.
    pub question: String,

    /// What kind of answer the question collects.
    pub kind: ItemKind,

    /// Display position; the backend appends when absent.
    pub order: Option<u32>,

    /// Whether respondents may skip it.
    pub optional: bool,
}

impl NewQuestion {
    /// Create a required question with backend-assigned order.
    pub fn new(question: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            question: question.into(),
            kind,
            order: None,
            optional: false,
        }
    }
}

/// A partial update to an existing question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionUpdate {
    pub question: Option<String>,
    pub kind: Option<ItemKind>,
    pub order: Option<u32>,
    pub optional: Option<bool>,
}

/// A partial update to the company profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cnpj: Option<String>,
    pub address: Option<String>,
}

/// A new company registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub login: String,
    pub password: String,
    pub name: String,
    pub description: Option<String>,
    pub cnpj: String,
    pub address: Option<String>,
    pub logo_path: Option<String>,
}

/// Authenticated client for company staff: questionnaire editing, company
/// profile, and the results statistics feed.
///
/// Carries an explicit [`Session`]; a 401 from the backend clears it and
/// surfaces [`ClientError::Unauthorized`].
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    session: Session,
}

impl ApiClient {
    /// Create an unauthenticated client; call [`login`](Self::login) next.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        Self::with_session(config, Session::new())
    }

    /// Create a client resuming an existing session.
    pub fn with_session(config: ApiConfig, session: Session) -> Result<Self, ClientError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            config,
            session,
        })
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    // === Auth ===

    /// Exchange credentials for a bearer token and install it in the session.
    pub fn login(&mut self, login: &str, password: &str) -> Result<Identity, ClientError> {
        debug!(login, "logging in");
        let url = self.config.url("/auth/login");
        let body = LoginRequestDto {
            login: login.to_string(),
            password: password.to_string(),
        };
        let response = check_status(self.http.post(url).json(&body).send()?)?;
        let data: LoginResponseDto = decode(response)?;
        let identity = Identity {
            id: data.user.id,
            company_id: data.user.company_id,
            login: data.user.login,
        };
        self.session
            .authenticate(data.access_token, identity.clone());
        Ok(identity)
    }

    /// Register a new company account.
    pub fn register(&self, registration: &Registration) -> Result<(), ClientError> {
        let url = self.config.url("/auth/register");
        let body = RegisterRequestDto {
            login: registration.login.clone(),
            password: registration.password.clone(),
            name: registration.name.clone(),
            description: registration.description.clone(),
            cnpj: registration.cnpj.clone(),
            address: registration.address.clone(),
            logo_path: registration.logo_path.clone(),
        };
        check_status(self.http.post(url).json(&body).send()?)?;
        Ok(())
    }

    /// Drop the session's credentials.
    pub fn logout(&mut self) {
        self.session.clear();
    }

    // === Questionnaire editor ===

    /// Create one question.
    pub fn create_question(
        &mut self,
        question: &NewQuestion,
    ) -> Result<QuestionnaireItem, ClientError> {
        let url = self.config.url("/forms");
        let body = new_form_dto(question);
        let response = self.send(self.http.post(url).json(&body))?;
        let dto: FormDto = decode(response)?;
        Ok(dto.into())
    }

    /// Create several questions at once. At most
    /// [`MAX_QUESTIONS`] per questionnaire; checked before any request.
    pub fn create_questions(
        &mut self,
        questions: &[NewQuestion],
    ) -> Result<Vec<QuestionnaireItem>, ClientError> {
        if questions.len() > MAX_QUESTIONS {
            return Err(ClientError::TooManyQuestions {
                max: MAX_QUESTIONS,
                got: questions.len(),
            });
        }
        let url = self.config.url("/forms/multiple");
        let body = NewFormBatchDto {
            forms: questions.iter().map(new_form_dto).collect(),
        };
        let response = self.send(self.http.post(url).json(&body))?;
        decode_items(response)
    }

    /// List the company's questions.
    pub fn questions(&mut self) -> Result<Vec<QuestionnaireItem>, ClientError> {
        let url = self.config.url("/forms");
        let response = self.send(self.http.get(url))?;
        decode_items(response)
    }

    /// Fetch one question by id.
    pub fn question(&mut self, id: &ItemId) -> Result<QuestionnaireItem, ClientError> {
        let url = self.config.url(&format!("/forms/{id}"));
        let response = self.send(self.http.get(url))?;
        let dto: FormDto = decode(response)?;
        Ok(dto.into())
    }

    /// Apply a partial update to a question.
    pub fn update_question(
        &mut self,
        id: &ItemId,
        update: &QuestionUpdate,
    ) -> Result<QuestionnaireItem, ClientError> {
        let url = self.config.url(&format!("/forms/{id}"));
        let body = UpdateFormDto {
            question: update.question.clone(),
            question_type: update.kind.map(Into::into),
            order: update.order,
            is_optional: update.optional,
        };
        let response = self.send(self.http.patch(url).json(&body))?;
        let dto: FormDto = decode(response)?;
        Ok(dto.into())
    }

    /// Delete a question.
    pub fn delete_question(&mut self, id: &ItemId) -> Result<(), ClientError> {
        let url = self.config.url(&format!("/forms/{id}"));
        self.send(self.http.delete(url))?;
        Ok(())
    }

    /// Check whether the company already has a questionnaire.
    pub fn has_questionnaire(&mut self) -> Result<bool, ClientError> {
        let url = self.config.url("/forms/check/exists");
        let response = self.send(self.http.get(url))?;
        let dto: ExistsDto = decode(response)?;
        Ok(dto.exists)
    }

    // === Company profile ===

    /// Fetch the authenticated company's own record.
    pub fn company(&mut self) -> Result<Company, ClientError> {
        let url = self.config.url("/companies/me");
        let response = self.send(self.http.get(url))?;
        let dto: CompanyDto = decode(response)?;
        Ok(dto.into())
    }

    /// Apply a partial update to the company profile.
    pub fn update_company(&mut self, update: &CompanyUpdate) -> Result<Company, ClientError> {
        let url = self.config.url("/companies/me");
        let body = CompanyUpdateDto {
            name: update.name.clone(),
            description: update.description.clone(),
            cnpj: update.cnpj.clone(),
            address: update.address.clone(),
        };
        let response = self.send(self.http.put(url).json(&body))?;
        let dto: CompanyDto = decode(response)?;
        Ok(dto.into())
    }

    /// Replace the company logo. Returns the stored logo path, which the
    /// backend also writes into the company record.
    ///
    /// The image goes up as one multipart `logo` part; callers are expected
    /// to compress it beforehand.
    pub fn upload_logo(
        &mut self,
        file_name: &str,
        content_type: &str,
        image: Vec<u8>,
    ) -> Result<String, ClientError> {
        debug!(file_name, bytes = image.len(), "uploading company logo");
        let url = self.config.url("/companies/me/upload-logo");
        let part = Part::bytes(image)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("logo", part);
        let response = self.send(self.http.post(url).multipart(form))?;
        let dto: LogoUploadDto = decode(response)?;
        Ok(dto.logo_path)
    }

    // === Results ===

    /// Fetch the server-computed response statistics. The client does no
    /// aggregation of its own.
    pub fn statistics(&mut self) -> Result<Statistics, ClientError> {
        let url = self.config.url("/satisfaction-surveys/company/statistics");
        let response = self.send(self.http.get(url))?;
        decode(response)
    }

    /// Fetch every answer of one submitted batch, for the per-session
    /// drill-down in the results viewer.
    pub fn session_responses(&mut self, survey_id: &str) -> Result<SessionResponses, ClientError> {
        let url = self
            .config
            .url(&format!("/satisfaction-surveys/session/{survey_id}"));
        let response = self.send(self.http.get(url))?;
        decode(response)
    }

    // === Plumbing ===

    /// Attach the bearer token, send, and map the status. A 401 clears the
    /// session before surfacing.
    fn send(&mut self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let builder = match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        match check_status(builder.send()?) {
            Err(ClientError::Unauthorized) => {
                self.session.clear();
                Err(ClientError::Unauthorized)
            }
            other => other,
        }
    }
}

fn new_form_dto(question: &NewQuestion) -> NewFormDto {
    NewFormDto {
        question: question.question.clone(),
        question_type: question.kind.into(),
        order: question.order,
        is_optional: question.optional,
    }
}
