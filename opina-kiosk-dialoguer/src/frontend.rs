//! Dialoguer frontend driving the survey runner.

use std::collections::VecDeque;
use std::thread;

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use opina_runner::{Command, Event, Notice, Phase, SurveyRunner, Unavailable};
use opina_types::{QuestionnaireItem, SurveyGateway};
use thiserror::Error;

/// Error type for the kiosk frontend.
#[derive(Debug, Error)]
pub enum KioskError {
    /// The attendant cancelled at the terminal (Ctrl+C / Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// Terminal kiosk for the public survey flow.
///
/// Gateway calls and timers resolve synchronously between prompts: a
/// scheduled timer is honored by sleeping for its delay and firing the
/// token straight back into the runner, so the auto-advance pacing and the
/// thank-you dwell feel the same as on the web page.
#[derive(Debug, Default, Clone)]
pub struct Kiosk {
    /// Keep serving respondents after each completed survey.
    looping: bool,
}

impl Kiosk {
    /// A kiosk that resets for the next respondent after every submission.
    pub fn looping() -> Self {
        Self { looping: true }
    }

    /// A kiosk that exits after one completed survey.
    pub fn once() -> Self {
        Self { looping: false }
    }

    /// Serve the survey for the given company until done or cancelled.
    pub fn run<G: SurveyGateway>(&self, gateway: &G, company_id: &str) -> Result<(), KioskError> {
        let theme = ColorfulTheme::default();
        let (mut runner, commands) = SurveyRunner::new();
        self.pump(&mut runner, gateway, company_id, commands);

        let mut completed = 0usize;
        loop {
            match runner.phase() {
                Phase::Unavailable(Unavailable::LoadFailed) => {
                    println!("This survey is not available. Check the link and try again.");
                    return Ok(());
                }
                Phase::Unavailable(Unavailable::NoQuestions) => {
                    println!("This survey has no questions to answer yet.");
                    return Ok(());
                }
                Phase::Welcome => {
                    if completed > 0 && !self.looping {
                        return Ok(());
                    }
                    self.print_welcome(&runner);
                    let begin = Confirm::with_theme(&theme)
                        .with_prompt("Begin the survey?")
                        .default(true)
                        .interact()
                        .map_err(cancellation)?;
                    if begin {
                        let commands = runner.handle(Event::Begin);
                        self.pump(&mut runner, gateway, company_id, commands);
                    } else if !self.looping {
                        return Err(KioskError::Cancelled);
                    }
                }
                Phase::Answering => {
                    if runner.can_submit() {
                        let send = Confirm::with_theme(&theme)
                            .with_prompt("Send your answers?")
                            .default(true)
                            .interact()
                            .map_err(cancellation)?;
                        if send {
                            let commands = runner.handle(Event::Submit);
                            self.pump(&mut runner, gateway, company_id, commands);
                            if runner.phase() == Phase::Welcome {
                                completed += 1;
                            }
                            continue;
                        }
                    }
                    self.ask_open_question(&theme, &mut runner, gateway, company_id)?;
                }
                // Every gateway call and timer resolves inside pump, so
                // these phases cannot persist between prompts.
                Phase::Loading | Phase::Submitting | Phase::ThankYou => return Ok(()),
            }
        }
    }

    /// Prompt for the question at the open tail of the reveal cursor.
    fn ask_open_question<G: SurveyGateway>(
        &self,
        theme: &ColorfulTheme,
        runner: &mut SurveyRunner,
        gateway: &G,
        company_id: &str,
    ) -> Result<(), KioskError> {
        let index = runner.revealed().saturating_sub(1);
        let Some(item) = runner.items().get(index).cloned() else {
            return Ok(());
        };
        let number = index + 1;
        let total = runner.items().len();
        let suffix = if item.is_optional() { " (optional)" } else { "" };
        let prompt = format!("[{number}/{total}] {}{suffix}", item.question());

        let events = match item.kind().scale_max() {
            Some(max) => vec![self.ask_scale(theme, &item, &prompt, max)?],
            None => self.ask_text(theme, runner, &item, &prompt)?,
        };
        for event in events {
            let commands = runner.handle(event);
            self.pump(runner, gateway, company_id, commands);
        }
        Ok(())
    }

    fn ask_scale(
        &self,
        theme: &ColorfulTheme,
        item: &QuestionnaireItem,
        prompt: &str,
        max: u8,
    ) -> Result<Event, KioskError> {
        let labels: Vec<String> = (0..=max).map(|value| value.to_string()).collect();
        let picked = Select::with_theme(theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact()
            .map_err(cancellation)?;
        Ok(Event::ScaleSelected {
            item: item.id().clone(),
            value: picked as u8,
        })
    }

    fn ask_text(
        &self,
        theme: &ColorfulTheme,
        runner: &SurveyRunner,
        item: &QuestionnaireItem,
        prompt: &str,
    ) -> Result<Vec<Event>, KioskError> {
        let optional = item.is_optional();
        let text: String = Input::with_theme(theme)
            .with_prompt(prompt)
            .allow_empty(optional)
            .validate_with(move |input: &String| {
                if optional || !input.trim().is_empty() {
                    Ok(())
                } else {
                    Err("An answer is required for this question")
                }
            })
            .interact_text()
            .map_err(cancellation)?;

        let mut events = vec![Event::TextEdited {
            item: item.id().clone(),
            text,
        }];
        // Text never auto-advances; the entered line doubles as "next".
        if runner.revealed() < runner.items().len() {
            events.push(Event::Next);
        }
        Ok(events)
    }

    /// Execute the runner's commands synchronously until none remain.
    fn pump<G: SurveyGateway>(
        &self,
        runner: &mut SurveyRunner,
        gateway: &G,
        company_id: &str,
        commands: Vec<Command>,
    ) {
        let mut queue = VecDeque::from(commands);
        while let Some(command) = queue.pop_front() {
            match command {
                Command::FetchCompany => {
                    let result = gateway.fetch_company(company_id);
                    queue.extend(runner.handle(Event::CompanyLoaded(result)));
                }
                Command::FetchQuestionnaire => {
                    let result = gateway.fetch_questionnaire(company_id);
                    queue.extend(runner.handle(Event::QuestionnaireLoaded(result)));
                }
                Command::SubmitBatch(batch) => {
                    let result = gateway.submit_answers(&batch);
                    queue.extend(runner.handle(Event::SubmitFinished(result)));
                }
                Command::Schedule { timer, after } => {
                    thread::sleep(after);
                    queue.extend(runner.handle(Event::TimerFired(timer)));
                }
                // The sequential flow fires every timer it schedules before
                // another one can supersede it.
                Command::Cancel(_) => {}
                // No viewport to move in a terminal.
                Command::ScrollTo(_) | Command::ScrollToTop => {}
                Command::Notify(notice) => print_notice(notice),
            }
        }
    }

    fn print_welcome(&self, runner: &SurveyRunner) {
        println!();
        if let Some(company) = runner.company() {
            println!("=== {} - Satisfaction Survey ===", company.name);
            if let Some(description) = &company.description {
                println!("{description}");
            }
        } else {
            println!("=== Satisfaction Survey ===");
        }
        println!("This survey is completely anonymous.");
    }
}

fn print_notice(notice: Notice) {
    match notice {
        Notice::LoadFailed => println!("Could not load the survey."),
        Notice::RequiredMissing => println!("Please answer all required questions."),
        Notice::SubmitFailed => println!("Sending your answers failed. Please try again."),
        Notice::Submitted => println!("Thank you! Your answers were recorded."),
    }
}

fn cancellation(err: dialoguer::Error) -> KioskError {
    if is_cancelled(&err) {
        KioskError::Cancelled
    } else {
        KioskError::Dialoguer(err)
    }
}
