use std::collections::HashMap;

use crate::{AnswerDraft, AnswerRecord, ItemId, QuestionnaireItem};

/// Error type for answer sheet mutations.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("No slot for item: {0}")]
    UnknownItem(ItemId),

    #[error("Kind mismatch for item '{item}': expected {expected}")]
    KindMismatch { item: ItemId, expected: &'static str },

    #[error("Scale value {value} out of range for item '{item}' (max {max})")]
    OutOfRange { item: ItemId, value: u8, max: u8 },
}

/// One respondent session's collected answers.
///
/// Holds exactly one draft slot per questionnaire item, keyed by item id.
/// The slot's shape (scale or text) is fixed at initialization from the
/// item's declared kind. The sheet is owned exclusively by one runner
/// session and is never shared across respondents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSheet {
    slots: HashMap<ItemId, AnswerDraft>,
}

impl AnswerSheet {
    /// Create a sheet with one empty slot per item.
    pub fn for_items(items: &[QuestionnaireItem]) -> Self {
        let slots = items
            .iter()
            .map(|item| {
                let draft = if item.kind().is_scale() {
                    AnswerDraft::empty_scale()
                } else {
                    AnswerDraft::empty_text()
                };
                (item.id().clone(), draft)
            })
            .collect();
        Self { slots }
    }

    /// Record a scale rating for the given item.
    pub fn set_scale(&mut self, item: &QuestionnaireItem, value: u8) -> Result<(), SheetError> {
        let Some(max) = item.kind().scale_max() else {
            return Err(SheetError::KindMismatch {
                item: item.id().clone(),
                expected: "Text",
            });
        };
        if value > max {
            return Err(SheetError::OutOfRange {
                item: item.id().clone(),
                value,
                max,
            });
        }
        let slot = self
            .slots
            .get_mut(item.id())
            .ok_or_else(|| SheetError::UnknownItem(item.id().clone()))?;
        *slot = AnswerDraft::Scale(Some(value));
        Ok(())
    }

    /// Record (or clear) the opinion text for the given item.
    pub fn set_text(
        &mut self,
        item: &QuestionnaireItem,
        text: impl Into<String>,
    ) -> Result<(), SheetError> {
        if item.kind().is_scale() {
            return Err(SheetError::KindMismatch {
                item: item.id().clone(),
                expected: "Scale",
            });
        }
        let slot = self
            .slots
            .get_mut(item.id())
            .ok_or_else(|| SheetError::UnknownItem(item.id().clone()))?;
        *slot = AnswerDraft::Text(text.into());
        Ok(())
    }

    /// Get the draft for an item id.
    pub fn draft(&self, id: &ItemId) -> Option<&AnswerDraft> {
        self.slots.get(id)
    }

    /// Get the recorded scale rating for an item id, if any.
    pub fn scale(&self, id: &ItemId) -> Option<u8> {
        match self.slots.get(id) {
            Some(AnswerDraft::Scale(value)) => *value,
            _ => None,
        }
    }

    /// Get the recorded text for an item id.
    pub fn text(&self, id: &ItemId) -> Option<&str> {
        match self.slots.get(id) {
            Some(AnswerDraft::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Check if the respondent genuinely provided a value for this item.
    pub fn has_value(&self, item: &QuestionnaireItem) -> bool {
        self.slots
            .get(item.id())
            .is_some_and(AnswerDraft::has_value)
    }

    /// The submit-affordance predicate: optional items are always satisfied,
    /// independent of emptiness; required items need a provided value.
    pub fn is_answered(&self, item: &QuestionnaireItem) -> bool {
        item.is_optional() || self.has_value(item)
    }

    /// Required items that still lack a valid answer.
    pub fn missing_required<'a>(
        &self,
        items: &'a [QuestionnaireItem],
    ) -> Vec<&'a QuestionnaireItem> {
        items
            .iter()
            .filter(|item| !item.is_optional() && !self.has_value(item))
            .collect()
    }

    /// Build the batch to submit, in item order.
    ///
    /// Contains one entry for every item with a provided value. Unanswered
    /// optional items are dropped, never submitted as empty.
    pub fn batch(&self, items: &[QuestionnaireItem]) -> Vec<AnswerRecord> {
        items
            .iter()
            .filter_map(|item| {
                let value = self.slots.get(item.id())?.finalize()?;
                Some(AnswerRecord::new(item.id().clone(), value))
            })
            .collect()
    }

    /// Number of slots in the sheet.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the sheet has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemKind;

    fn items() -> Vec<QuestionnaireItem> {
        vec![
            QuestionnaireItem::new("q1", "Service quality?", ItemKind::ScaleZeroToFive, 1),
            QuestionnaireItem::new("q2", "Anything to add?", ItemKind::FreeText, 2).optional(),
        ]
    }

    #[test]
    fn initializes_one_empty_slot_per_item() {
        let items = items();
        let sheet = AnswerSheet::for_items(&items);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.scale(items[0].id()), None);
        assert_eq!(sheet.text(items[1].id()), Some(""));
    }

    #[test]
    fn set_scale_checks_kind_and_bounds() {
        let items = items();
        let mut sheet = AnswerSheet::for_items(&items);

        sheet.set_scale(&items[0], 4).unwrap();
        assert_eq!(sheet.scale(items[0].id()), Some(4));

        assert!(matches!(
            sheet.set_scale(&items[0], 6),
            Err(SheetError::OutOfRange { max: 5, .. })
        ));
        assert!(matches!(
            sheet.set_scale(&items[1], 3),
            Err(SheetError::KindMismatch { .. })
        ));
    }

    #[test]
    fn set_text_rejects_scale_items() {
        let items = items();
        let mut sheet = AnswerSheet::for_items(&items);

        sheet.set_text(&items[1], "lovely").unwrap();
        assert_eq!(sheet.text(items[1].id()), Some("lovely"));

        assert!(matches!(
            sheet.set_text(&items[0], "nope"),
            Err(SheetError::KindMismatch { .. })
        ));
    }

    #[test]
    fn optional_items_always_count_as_answered() {
        let items = items();
        let sheet = AnswerSheet::for_items(&items);

        assert!(!sheet.is_answered(&items[0]));
        assert!(sheet.is_answered(&items[1]));
    }

    #[test]
    fn missing_required_ignores_optionals() {
        let items = items();
        let mut sheet = AnswerSheet::for_items(&items);

        let missing = sheet.missing_required(&items);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].id().as_str(), "q1");

        sheet.set_scale(&items[0], 0).unwrap();
        assert!(sheet.missing_required(&items).is_empty());
    }

    #[test]
    fn batch_drops_unanswered_optionals() {
        let items = items();
        let mut sheet = AnswerSheet::for_items(&items);
        sheet.set_scale(&items[0], 4).unwrap();

        let batch = sheet.batch(&items);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].item.as_str(), "q1");
        assert_eq!(batch[0].value.as_scale(), Some(4));
    }

    #[test]
    fn batch_keeps_answered_optionals_in_item_order() {
        let items = items();
        let mut sheet = AnswerSheet::for_items(&items);
        sheet.set_scale(&items[0], 2).unwrap();
        sheet.set_text(&items[1], "more cake").unwrap();

        let batch = sheet.batch(&items);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].item.as_str(), "q1");
        assert_eq!(batch[1].item.as_str(), "q2");
        assert_eq!(batch[1].value.as_text(), Some("more cake"));
    }

    #[test]
    fn whitespace_only_text_is_not_submitted() {
        let items = items();
        let mut sheet = AnswerSheet::for_items(&items);
        sheet.set_scale(&items[0], 1).unwrap();
        sheet.set_text(&items[1], "   ").unwrap();

        let batch = sheet.batch(&items);
        assert_eq!(batch.len(), 1);
    }
}
