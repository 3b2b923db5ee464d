use opina_types::{Company, GatewayError, ItemId, QuestionnaireItem};

use crate::TimerId;

/// An input to the survey runner: a user action, a resolved gateway call,
/// or a fired timer.
///
/// Events that do not fit the current phase are ignored (the runner returns
/// no commands), mirroring inputs being disabled while a submission is in
/// flight.
#[derive(Debug)]
pub enum Event {
    /// The company fetch resolved.
    CompanyLoaded(Result<Company, GatewayError>),

    /// The questionnaire fetch resolved.
    QuestionnaireLoaded(Result<Vec<QuestionnaireItem>, GatewayError>),

    /// The respondent pressed "begin" on the welcome screen.
    Begin,

    /// The respondent picked a scale value (button or slider; both feed
    /// the same canonical answer).
    ScaleSelected { item: ItemId, value: u8 },

    /// The respondent edited a free-text answer.
    TextEdited { item: ItemId, text: String },

    /// The respondent pressed "next" under a free-text question.
    Next,

    /// The respondent pressed "submit".
    Submit,

    /// The batch submission resolved.
    SubmitFinished(Result<(), GatewayError>),

    /// A previously scheduled timer fired.
    TimerFired(TimerId),
}
