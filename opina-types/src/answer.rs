use crate::ItemId;

/// An in-progress answer for one questionnaire item.
///
/// The variant is fixed by the item's declared kind when the sheet is
/// initialized, so "both absent" and "both present" states of the wire
/// shape are unrepresentable here.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerDraft {
    /// A scale rating; `None` until the respondent picks a value.
    Scale(Option<u8>),

    /// Free-form text; empty until the respondent types something.
    Text(String),
}

impl AnswerDraft {
    /// Create the empty draft for the given scale/text shape.
    pub fn empty_scale() -> Self {
        Self::Scale(None)
    }

    /// Create the empty free-text draft.
    pub fn empty_text() -> Self {
        Self::Text(String::new())
    }

    /// Check if the respondent genuinely provided a value.
    ///
    /// Whitespace-only text counts as not provided.
    pub fn has_value(&self) -> bool {
        match self {
            Self::Scale(value) => value.is_some(),
            Self::Text(text) => !text.trim().is_empty(),
        }
    }

    /// Finalize this draft into a submittable value, if one was provided.
    pub fn finalize(&self) -> Option<AnswerValue> {
        match self {
            Self::Scale(Some(value)) => Some(AnswerValue::Scale(*value)),
            Self::Scale(None) => None,
            Self::Text(text) if !text.trim().is_empty() => {
                Some(AnswerValue::Text(text.clone()))
            }
            Self::Text(_) => None,
        }
    }
}

/// A finalized answer value, tagged by the item's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    /// The selected scale rating.
    Scale(u8),

    /// The entered opinion text.
    Text(String),
}

impl AnswerValue {
    /// Try to get this value as a scale rating.
    pub fn as_scale(&self) -> Option<u8> {
        match self {
            Self::Scale(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Try to get this value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Scale(_) => None,
        }
    }
}

/// One entry of a batch submission: an item id with its finalized value.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    /// The answered item.
    pub item: ItemId,

    /// The provided value.
    pub value: AnswerValue,
}

impl AnswerRecord {
    /// Create a new record.
    pub fn new(item: impl Into<ItemId>, value: AnswerValue) -> Self {
        Self {
            item: item.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_has_no_value() {
        assert!(!AnswerDraft::Text("   ".to_string()).has_value());
        assert!(AnswerDraft::Text("fine".to_string()).has_value());
    }

    #[test]
    fn finalize_empty_scale_is_none() {
        assert_eq!(AnswerDraft::Scale(None).finalize(), None);
        assert_eq!(
            AnswerDraft::Scale(Some(4)).finalize(),
            Some(AnswerValue::Scale(4))
        );
    }
}
