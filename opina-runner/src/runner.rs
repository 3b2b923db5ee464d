use std::time::Duration;

use opina_types::{AnswerSheet, Company, ItemId, QuestionnaireItem};

use crate::timer::TimerLedger;
use crate::{Command, Event, Notice, TimerId};

/// Delay between answering a scale question and revealing the next one.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(500);

/// How long the thank-you screen dwells before the session resets for the
/// next respondent (the shared-tablet case).
pub const THANK_YOU_DWELL: Duration = Duration::from_secs(5);

/// Where the respondent is in the survey flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the company and questionnaire fetches to both resolve.
    Loading,

    /// Introductory framing; "begin" reveals the first question.
    Welcome,

    /// Questions up to the reveal cursor are visible and editable.
    Answering,

    /// The batch is in flight; interaction is blocked.
    Submitting,

    /// Submission accepted; dwells, then resets to `Welcome`.
    ThankYou,

    /// Terminal dead end; the only escape is reloading the page.
    Unavailable(Unavailable),
}

/// Why the survey page is a dead end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    /// A fetch failed or resolved to an unusable shape.
    LoadFailed,

    /// The questionnaire loaded fine but has nothing to answer.
    NoQuestions,
}

#[derive(Debug, Default)]
struct LoadProgress {
    company: Option<Company>,
    items: Option<Vec<QuestionnaireItem>>,
}

#[derive(Debug, Clone, Copy)]
struct PendingAdvance {
    timer: TimerId,
    /// Index of the item whose answer armed the timer.
    index: usize,
}

/// One respondent session of the public survey flow.
///
/// Owns the answer sheet and the reveal cursor exclusively; nothing is
/// shared across sessions. Feed it [`Event`]s via [`handle`](Self::handle)
/// and execute the returned [`Command`]s.
///
/// The reveal cursor counts revealed questions and only ever grows within
/// a session; the sole decrease is the reset back to zero after the
/// thank-you dwell.
#[derive(Debug)]
pub struct SurveyRunner {
    phase: Phase,
    company: Option<Company>,
    items: Vec<QuestionnaireItem>,
    sheet: AnswerSheet,
    revealed: usize,
    load: LoadProgress,
    timers: TimerLedger,
    auto_advance: Option<PendingAdvance>,
    reset: Option<TimerId>,
}

impl SurveyRunner {
    /// Start a session. The returned commands kick off the two concurrent
    /// fetches; the transition out of `Loading` waits for both.
    pub fn new() -> (Self, Vec<Command>) {
        let runner = Self {
            phase: Phase::Loading,
            company: None,
            items: Vec::new(),
            sheet: AnswerSheet::default(),
            revealed: 0,
            load: LoadProgress::default(),
            timers: TimerLedger::default(),
            auto_advance: None,
            reset: None,
        };
        (
            runner,
            vec![Command::FetchCompany, Command::FetchQuestionnaire],
        )
    }

    /// Apply one event and return the effects the driver must perform.
    ///
    /// Events that do not fit the current phase are no-ops.
    pub fn handle(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::CompanyLoaded(result) => self.on_company_loaded(result),
            Event::QuestionnaireLoaded(result) => self.on_questionnaire_loaded(result),
            Event::Begin => self.on_begin(),
            Event::ScaleSelected { item, value } => self.on_scale_selected(&item, value),
            Event::TextEdited { item, text } => self.on_text_edited(&item, text),
            Event::Next => self.on_next(),
            Event::Submit => self.on_submit(),
            Event::SubmitFinished(result) => self.on_submit_finished(result),
            Event::TimerFired(timer) => self.on_timer_fired(timer),
        }
    }

    // === Accessors ===

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The company record, once loaded.
    pub fn company(&self) -> Option<&Company> {
        self.company.as_ref()
    }

    /// The questionnaire, ordered by display position.
    pub fn items(&self) -> &[QuestionnaireItem] {
        &self.items
    }

    /// The session's answer sheet.
    pub fn sheet(&self) -> &AnswerSheet {
        &self.sheet
    }

    /// The reveal cursor: how many questions have been revealed.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Number of questions currently rendered.
    pub fn visible_count(&self) -> usize {
        self.revealed.min(self.items.len())
    }

    /// Whether the submit affordance should be shown: every question is
    /// revealed and the tail question is answered (optional tail questions
    /// are always satisfied, even when empty).
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Answering
            && self.revealed >= self.items.len()
            && self
                .items
                .last()
                .is_some_and(|tail| self.sheet.is_answered(tail))
    }

    // === Loading ===

    fn on_company_loaded(
        &mut self,
        result: Result<Company, opina_types::GatewayError>,
    ) -> Vec<Command> {
        if self.phase != Phase::Loading {
            return Vec::new();
        }
        match result {
            Ok(company) => {
                self.load.company = Some(company);
                self.try_finish_load()
            }
            Err(_) => self.fail_load(),
        }
    }

    fn on_questionnaire_loaded(
        &mut self,
        result: Result<Vec<QuestionnaireItem>, opina_types::GatewayError>,
    ) -> Vec<Command> {
        if self.phase != Phase::Loading {
            return Vec::new();
        }
        match result {
            Ok(items) => {
                self.load.items = Some(items);
                self.try_finish_load()
            }
            Err(_) => self.fail_load(),
        }
    }

    fn try_finish_load(&mut self) -> Vec<Command> {
        if self.load.company.is_none() || self.load.items.is_none() {
            return Vec::new();
        }
        self.company = self.load.company.take();
        let mut items = self.load.items.take().unwrap_or_default();
        items.sort_by_key(QuestionnaireItem::order);

        if items.is_empty() {
            // Distinct from a failed load: there is simply nothing to answer.
            self.phase = Phase::Unavailable(Unavailable::NoQuestions);
            return Vec::new();
        }

        self.sheet = AnswerSheet::for_items(&items);
        self.items = items;
        self.revealed = 0;
        self.phase = Phase::Welcome;
        Vec::new()
    }

    fn fail_load(&mut self) -> Vec<Command> {
        self.phase = Phase::Unavailable(Unavailable::LoadFailed);
        vec![Command::Notify(Notice::LoadFailed)]
    }

    // === Answering ===

    fn on_begin(&mut self) -> Vec<Command> {
        if self.phase != Phase::Welcome {
            return Vec::new();
        }
        self.revealed = 1;
        self.phase = Phase::Answering;
        vec![Command::ScrollTo(0)]
    }

    fn on_scale_selected(&mut self, item_id: &ItemId, value: u8) -> Vec<Command> {
        if self.phase != Phase::Answering {
            return Vec::new();
        }
        let Some(index) = self.visible_index_of(item_id) else {
            return Vec::new();
        };
        if self.sheet.set_scale(&self.items[index], value).is_err() {
            return Vec::new();
        }

        let mut commands = Vec::new();
        // Re-selecting supersedes any pending advance; the old token fires
        // stale if the driver misses the cancel.
        if let Some(pending) = self.auto_advance.take() {
            commands.push(Command::Cancel(pending.timer));
        }
        if index + 1 < self.items.len() {
            let timer = self.timers.arm();
            self.auto_advance = Some(PendingAdvance { timer, index });
            commands.push(Command::Schedule {
                timer,
                after: AUTO_ADVANCE_DELAY,
            });
        }
        commands
    }

    fn on_text_edited(&mut self, item_id: &ItemId, text: String) -> Vec<Command> {
        if self.phase != Phase::Answering {
            return Vec::new();
        }
        if let Some(index) = self.visible_index_of(item_id) {
            let _ = self.sheet.set_text(&self.items[index], text);
        }
        Vec::new()
    }

    fn on_next(&mut self) -> Vec<Command> {
        if self.phase != Phase::Answering {
            return Vec::new();
        }
        if self.revealed == 0 || self.revealed >= self.items.len() {
            return Vec::new();
        }
        let tail = &self.items[self.revealed - 1];
        if !self.sheet.is_answered(tail) {
            return Vec::new();
        }
        self.revealed += 1;
        vec![Command::ScrollTo(self.revealed - 1)]
    }

    // === Submission ===

    fn on_submit(&mut self) -> Vec<Command> {
        if self.phase != Phase::Answering {
            return Vec::new();
        }
        if !self.sheet.missing_required(&self.items).is_empty() {
            return vec![Command::Notify(Notice::RequiredMissing)];
        }

        let mut commands = Vec::new();
        if let Some(pending) = self.auto_advance.take() {
            commands.push(Command::Cancel(pending.timer));
        }
        self.phase = Phase::Submitting;
        commands.push(Command::SubmitBatch(self.sheet.batch(&self.items)));
        commands
    }

    fn on_submit_finished(
        &mut self,
        result: Result<(), opina_types::GatewayError>,
    ) -> Vec<Command> {
        if self.phase != Phase::Submitting {
            return Vec::new();
        }
        match result {
            Ok(()) => {
                self.phase = Phase::ThankYou;
                let timer = self.timers.arm();
                self.reset = Some(timer);
                vec![
                    Command::Notify(Notice::Submitted),
                    Command::Schedule {
                        timer,
                        after: THANK_YOU_DWELL,
                    },
                ]
            }
            Err(_) => {
                // Answers stay untouched so the respondent can retry.
                self.phase = Phase::Answering;
                vec![Command::Notify(Notice::SubmitFailed)]
            }
        }
    }

    // === Timers ===

    fn on_timer_fired(&mut self, timer: TimerId) -> Vec<Command> {
        if let Some(pending) = self.auto_advance
            && pending.timer == timer
        {
            self.auto_advance = None;
            return self.auto_advance_from(pending.index);
        }
        if self.reset == Some(timer) {
            self.reset = None;
            return self.reset_session();
        }
        // Stale token: superseded, cancelled late, or from a previous session.
        Vec::new()
    }

    fn auto_advance_from(&mut self, index: usize) -> Vec<Command> {
        if self.phase != Phase::Answering {
            return Vec::new();
        }
        // Advance only if the answered question is still the open tail;
        // answering an earlier question never moves the cursor back.
        if self.revealed != index + 1 || self.revealed >= self.items.len() {
            return Vec::new();
        }
        self.revealed += 1;
        vec![Command::ScrollTo(self.revealed - 1)]
    }

    fn reset_session(&mut self) -> Vec<Command> {
        if self.phase != Phase::ThankYou {
            return Vec::new();
        }
        self.sheet = AnswerSheet::for_items(&self.items);
        self.revealed = 0;
        self.auto_advance = None;
        self.phase = Phase::Welcome;
        vec![Command::ScrollToTop]
    }

    /// Index of the item if it is currently revealed and editable.
    fn visible_index_of(&self, item_id: &ItemId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.id() == item_id)
            .filter(|&index| index < self.revealed)
    }
}
