//! # opina-client
//!
//! HTTP gateway for the opina satisfaction-survey backend.
//!
//! Two entry points:
//! - [`PublicClient`] - anonymous access for the public survey page:
//!   company record, questionnaire, batch submission. Implements
//!   [`opina_types::SurveyGateway`], so it plugs directly into a
//!   survey-runner driver.
//! - [`ApiClient`] - authenticated access for company staff: login,
//!   questionnaire editing, company profile, and the precomputed results
//!   statistics. Carries an explicit [`Session`] instead of ambient
//!   global state; the public flow never touches it.
//!
//! The base URL comes from [`ApiConfig`], built explicitly or from the
//! `OPINA_API_URL` environment variable.

mod config;
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};

mod error;
pub use error::ClientError;

mod session;
pub use session::{Identity, Session};

mod wire;

mod public;
pub use public::PublicClient;

mod admin;
pub use admin::{ApiClient, CompanyUpdate, NewQuestion, QuestionUpdate, Registration};

mod stats;
pub use stats::{
    DailyCount, QuestionStatistics, SessionAnswer, SessionResponses, Statistics,
    TextResponseEntry,
};
