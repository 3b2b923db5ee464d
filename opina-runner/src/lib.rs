//! # opina-runner
//!
//! The public survey-taking flow as a driver-agnostic state machine.
//!
//! [`SurveyRunner`] drives one anonymous respondent through a company's
//! fixed, ordered questionnaire: progressive question reveal, answer
//! collection, required-item validation, one atomic batch submission, and
//! an automatic reset for the next respondent.
//!
//! The runner performs no I/O of its own. Drivers feed it [`Event`]s and
//! execute the [`Command`]s it returns: the two concurrent fetches during
//! loading, the batch submission, timer scheduling, and view scrolling.
//! Timers are explicit cancellable tokens; a token that outlives its
//! purpose fires into a no-op, so a torn-down or re-mounted driver can
//! never act on stale state.
//!
//! ## Usage
//!
//! ```rust
//! use opina_runner::{Command, Event, Phase, SurveyRunner};
//! use opina_types::{Company, ItemKind, QuestionnaireItem};
//!
//! let (mut runner, commands) = SurveyRunner::new();
//! assert!(commands.contains(&Command::FetchCompany));
//!
//! let items = vec![QuestionnaireItem::new(
//!     "q1",
//!     "How satisfied are you?",
//!     ItemKind::ScaleZeroToFive,
//!     1,
//! )];
//! runner.handle(Event::CompanyLoaded(Ok(Company::new("c1", "Acme"))));
//! runner.handle(Event::QuestionnaireLoaded(Ok(items)));
//! assert_eq!(runner.phase(), Phase::Welcome);
//! ```

mod command;
pub use command::{Command, Notice};

mod event;
pub use event::Event;

mod timer;
pub use timer::TimerId;

mod runner;
pub use runner::{AUTO_ADVANCE_DELAY, Phase, SurveyRunner, THANK_YOU_DWELL, Unavailable};
