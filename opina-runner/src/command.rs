use std::time::Duration;

use opina_types::AnswerRecord;

use crate::TimerId;

/// A user-visible message the driver should surface in-page.
///
/// No failure propagates as an uncaught fault; everything becomes one of
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Loading the survey failed; the page is a dead end until reload.
    LoadFailed,

    /// At least one required question lacks an answer; submission aborted.
    RequiredMissing,

    /// The batch submission failed; entered answers are kept for retry.
    SubmitFailed,

    /// The batch was accepted; thank the respondent.
    Submitted,
}

/// An effect the driver must perform on the runner's behalf.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Fetch the company record (concurrently with the questionnaire).
    FetchCompany,

    /// Fetch the questionnaire items (concurrently with the company).
    FetchQuestionnaire,

    /// Send the validated answer batch; resolve with
    /// [`Event::SubmitFinished`](crate::Event::SubmitFinished).
    SubmitBatch(Vec<AnswerRecord>),

    /// Schedule a timer; fire [`Event::TimerFired`](crate::Event::TimerFired)
    /// with the token after the delay.
    Schedule { timer: TimerId, after: Duration },

    /// Cancel a previously scheduled timer. Firing it anyway is harmless;
    /// stale tokens are ignored.
    Cancel(TimerId),

    /// Bring the question at this index into view.
    ScrollTo(usize),

    /// Scroll back to the top of the page.
    ScrollToTop,

    /// Surface a message to the respondent.
    Notify(Notice),
}
