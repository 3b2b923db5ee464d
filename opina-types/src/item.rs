use std::fmt;

/// Maximum number of questions a company's questionnaire may hold.
pub const MAX_QUESTIONS: usize = 20;

/// Identifier of a questionnaire item, assigned by the backend.
///
/// Used as the key in `AnswerSheet` and carried on every submitted answer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemId {
    id: String,
}

impl ItemId {
    /// Create an item id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// The kind of a questionnaire item, determining what a respondent provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A rating on a discrete 0..=5 scale.
    ScaleZeroToFive,

    /// A rating on a discrete 0..=10 scale.
    ScaleZeroToTen,

    /// Free-form opinion text.
    FreeText,
}

impl ItemKind {
    /// The inclusive upper bound for scale items, `None` for free text.
    pub fn scale_max(&self) -> Option<u8> {
        match self {
            Self::ScaleZeroToFive => Some(5),
            Self::ScaleZeroToTen => Some(10),
            Self::FreeText => None,
        }
    }

    /// Check if this is a bounded-scale kind.
    pub fn is_scale(&self) -> bool {
        self.scale_max().is_some()
    }

    /// Check if this is the free-text kind.
    pub fn is_text(&self) -> bool {
        self == &Self::FreeText
    }
}

/// A single question definition within a company's questionnaire.
///
/// Items are created and edited through the authenticated editor surface
/// and are immutable during a respondent session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireItem {
    /// Backend-assigned identifier.
    id: ItemId,

    /// The question text shown to the respondent.
    question: String,

    /// What kind of answer this item collects.
    kind: ItemKind,

    /// Display position, unique per questionnaire, ascending.
    order: u32,

    /// Optional items may be skipped; their empty answers are never submitted.
    optional: bool,
}

impl QuestionnaireItem {
    /// Create a new required item.
    pub fn new(
        id: impl Into<ItemId>,
        question: impl Into<String>,
        kind: ItemKind,
        order: u32,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            kind,
            order,
            optional: false,
        }
    }

    /// Mark this item as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Get the item id.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Get the question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Get the item kind.
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Get the display position.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Check whether the item may be skipped.
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}
