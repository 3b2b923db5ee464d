/// The surveyed company's public record, display-only.
///
/// Fetched once per respondent session alongside the questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    /// Backend-assigned identifier; also the public survey route parameter.
    pub id: String,

    /// Display name shown in the survey header.
    pub name: String,

    /// Optional introductory description.
    pub description: Option<String>,

    /// Optional logo reference (absolute URL or backend-relative path).
    pub logo_path: Option<String>,
}

impl Company {
    /// Create a company record with just an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            logo_path: None,
        }
    }
}
