//! Core types for the opina satisfaction-survey client.
//!
//! This crate provides the foundational types shared by the survey runner
//! and the HTTP gateway:
//! - `QuestionnaireItem` and `ItemKind` - Individual questions and their types
//! - `AnswerDraft`, `AnswerValue` and `AnswerRecord` - In-progress and finalized answers
//! - `AnswerSheet` - One respondent session's collected answers
//! - `Company` - The surveyed company's public record
//! - `SurveyGateway` trait - For implementing remote data gateways

mod item;
pub use item::{ItemId, ItemKind, MAX_QUESTIONS, QuestionnaireItem};

mod answer;
pub use answer::{AnswerDraft, AnswerRecord, AnswerValue};

mod sheet;
pub use sheet::{AnswerSheet, SheetError};

mod company;
pub use company::Company;

mod gateway;
pub use gateway::{GatewayError, SurveyGateway};
