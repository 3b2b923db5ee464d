//! Wire DTOs and their conversions to and from the domain types.
//!
//! The backend speaks a duck-typed answer shape (`scale_value` xor
//! `text_response`); the conversion from [`AnswerRecord`] guarantees
//! exactly one of the two fields is serialized.

use opina_types::{AnswerRecord, AnswerValue, Company, ItemKind, QuestionnaireItem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum QuestionTypeDto {
    #[serde(rename = "scale_0_5")]
    Scale0To5,

    #[serde(rename = "scale_0_10")]
    Scale0To10,

    #[serde(rename = "text_opinion")]
    TextOpinion,
}

impl From<QuestionTypeDto> for ItemKind {
    fn from(dto: QuestionTypeDto) -> Self {
        match dto {
            QuestionTypeDto::Scale0To5 => ItemKind::ScaleZeroToFive,
            QuestionTypeDto::Scale0To10 => ItemKind::ScaleZeroToTen,
            QuestionTypeDto::TextOpinion => ItemKind::FreeText,
        }
    }
}

impl From<ItemKind> for QuestionTypeDto {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::ScaleZeroToFive => QuestionTypeDto::Scale0To5,
            ItemKind::ScaleZeroToTen => QuestionTypeDto::Scale0To10,
            ItemKind::FreeText => QuestionTypeDto::TextOpinion,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FormDto {
    pub(crate) id: String,
    pub(crate) question: String,
    pub(crate) question_type: QuestionTypeDto,
    pub(crate) order: u32,
    #[serde(default)]
    pub(crate) is_optional: bool,
}

impl From<FormDto> for QuestionnaireItem {
    fn from(dto: FormDto) -> Self {
        let item = QuestionnaireItem::new(dto.id, dto.question, dto.question_type.into(), dto.order);
        if dto.is_optional { item.optional() } else { item }
    }
}

/// Deserialize a wire question-type token directly into the domain kind.
pub(crate) fn item_kind_from_wire<'de, D>(deserializer: D) -> Result<ItemKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    QuestionTypeDto::deserialize(deserializer).map(Into::into)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompanyDto {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) logo_path: Option<String>,
}

impl From<CompanyDto> for Company {
    fn from(dto: CompanyDto) -> Self {
        Company {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            logo_path: dto.logo_path,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SurveyAnswerDto {
    pub(crate) form_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) scale_value: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) text_response: Option<String>,
}

impl From<&AnswerRecord> for SurveyAnswerDto {
    fn from(record: &AnswerRecord) -> Self {
        let (scale_value, text_response) = match &record.value {
            AnswerValue::Scale(value) => (Some(*value), None),
            AnswerValue::Text(text) => (None, Some(text.clone())),
        };
        Self {
            form_id: record.item.to_string(),
            scale_value,
            text_response,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitBatchDto {
    pub(crate) surveys: Vec<SurveyAnswerDto>,
}

impl SubmitBatchDto {
    pub(crate) fn from_records(batch: &[AnswerRecord]) -> Self {
        Self {
            surveys: batch.iter().map(Into::into).collect(),
        }
    }
}

// === Editor payloads ===

#[derive(Debug, Serialize)]
pub(crate) struct NewFormDto {
    pub(crate) question: String,
    pub(crate) question_type: QuestionTypeDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) order: Option<u32>,
    pub(crate) is_optional: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewFormBatchDto {
    pub(crate) forms: Vec<NewFormDto>,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct UpdateFormDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) question_type: Option<QuestionTypeDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) is_optional: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExistsDto {
    pub(crate) exists: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LogoUploadDto {
    pub(crate) logo_path: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompanyUpdateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) address: Option<String>,
}

// === Auth payloads ===

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequestDto {
    pub(crate) login: String,
    pub(crate) password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserDto {
    pub(crate) id: String,
    pub(crate) company_id: Option<String>,
    pub(crate) login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponseDto {
    pub(crate) access_token: String,
    pub(crate) user: UserDto,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequestDto {
    pub(crate) login: String,
    pub(crate) password: String,
    pub(crate) name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    pub(crate) cnpj: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) logo_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_answer_serializes_without_text_field() {
        let record = AnswerRecord::new("q1", AnswerValue::Scale(4));
        let json = serde_json::to_value(SurveyAnswerDto::from(&record)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "form_id": "q1", "scale_value": 4 })
        );
    }

    #[test]
    fn text_answer_serializes_without_scale_field() {
        let record = AnswerRecord::new("q2", AnswerValue::Text("mais bolo".to_string()));
        let json = serde_json::to_value(SurveyAnswerDto::from(&record)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "form_id": "q2", "text_response": "mais bolo" })
        );
    }

    #[test]
    fn batch_wraps_records_in_surveys() {
        let batch = vec![AnswerRecord::new("q1", AnswerValue::Scale(0))];
        let json = serde_json::to_value(SubmitBatchDto::from_records(&batch)).unwrap();
        assert_eq!(json["surveys"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn form_dto_maps_question_types() {
        let dto: FormDto = serde_json::from_value(serde_json::json!({
            "id": "f1",
            "question": "Rate the service",
            "question_type": "scale_0_10",
            "order": 3,
            "is_optional": true,
        }))
        .unwrap();
        let item = QuestionnaireItem::from(dto);
        assert_eq!(item.kind(), ItemKind::ScaleZeroToTen);
        assert_eq!(item.order(), 3);
        assert!(item.is_optional());
    }

    #[test]
    fn logo_upload_response_carries_the_stored_path() {
        let dto: LogoUploadDto =
            serde_json::from_value(serde_json::json!({ "logo_path": "/uploads/logo.webp" }))
                .unwrap();
        assert_eq!(dto.logo_path, "/uploads/logo.webp");
    }

    #[test]
    fn missing_is_optional_defaults_to_required() {
        let dto: FormDto = serde_json::from_value(serde_json::json!({
            "id": "f1",
            "question": "Rate the service",
            "question_type": "text_opinion",
            "order": 1,
        }))
        .unwrap();
        assert!(!QuestionnaireItem::from(dto).is_optional());
    }
}
