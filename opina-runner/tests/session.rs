//! Integration tests for the public survey session flow.

use std::time::Duration;

use opina_runner::{
    AUTO_ADVANCE_DELAY, Command, Event, Notice, Phase, SurveyRunner, THANK_YOU_DWELL, TimerId,
    Unavailable,
};
use opina_types::{AnswerSheet, AnswerValue, Company, GatewayError, ItemKind, QuestionnaireItem};

fn questionnaire() -> Vec<QuestionnaireItem> {
    vec![
        QuestionnaireItem::new("q1", "How satisfied are you?", ItemKind::ScaleZeroToFive, 1),
        QuestionnaireItem::new("q2", "Anything else?", ItemKind::FreeText, 2).optional(),
    ]
}

fn loaded(items: Vec<QuestionnaireItem>) -> SurveyRunner {
    let (mut runner, _) = SurveyRunner::new();
    runner.handle(Event::CompanyLoaded(Ok(Company::new("c1", "Acme"))));
    runner.handle(Event::QuestionnaireLoaded(Ok(items)));
    runner
}

/// Pull the scheduled timer with the given delay out of a command list.
fn scheduled(commands: &[Command], expected: Duration) -> TimerId {
    commands
        .iter()
        .find_map(|command| match command {
            Command::Schedule { timer, after } if *after == expected => Some(*timer),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no timer scheduled for {expected:?} in {commands:?}"))
}

fn contains_batch(commands: &[Command]) -> bool {
    commands
        .iter()
        .any(|command| matches!(command, Command::SubmitBatch(_)))
}

#[test]
fn rendered_questions_track_the_reveal_cursor() {
    let mut runner = loaded(questionnaire());
    assert_eq!(runner.visible_count(), 0);

    runner.handle(Event::Begin);
    assert_eq!(runner.visible_count(), 1);

    let commands = runner.handle(Event::ScaleSelected {
        item: "q1".into(),
        value: 4,
    });
    let timer = scheduled(&commands, AUTO_ADVANCE_DELAY);
    runner.handle(Event::TimerFired(timer));
    assert_eq!(runner.visible_count(), 2);

    // The cursor never exceeds the item count.
    runner.handle(Event::Next);
    assert_eq!(runner.visible_count(), 2);
}

#[test]
fn reveal_cursor_is_monotonic_until_reset() {
    let items = vec![
        QuestionnaireItem::new("q1", "First", ItemKind::ScaleZeroToFive, 1),
        QuestionnaireItem::new("q2", "Second", ItemKind::ScaleZeroToFive, 2),
        QuestionnaireItem::new("q3", "Third", ItemKind::ScaleZeroToFive, 3),
    ];
    let mut runner = loaded(items);
    runner.handle(Event::Begin);

    let commands = runner.handle(Event::ScaleSelected {
        item: "q1".into(),
        value: 3,
    });
    runner.handle(Event::TimerFired(scheduled(&commands, AUTO_ADVANCE_DELAY)));
    let commands = runner.handle(Event::ScaleSelected {
        item: "q2".into(),
        value: 5,
    });
    runner.handle(Event::TimerFired(scheduled(&commands, AUTO_ADVANCE_DELAY)));
    assert_eq!(runner.revealed(), 3);

    // Re-answering an earlier question must not pull the cursor back.
    let commands = runner.handle(Event::ScaleSelected {
        item: "q1".into(),
        value: 1,
    });
    let timer = scheduled(&commands, AUTO_ADVANCE_DELAY);
    runner.handle(Event::TimerFired(timer));
    assert_eq!(runner.revealed(), 3);
}

#[test]
fn stale_auto_advance_token_is_a_no_op() {
    let mut runner = loaded(questionnaire());
    runner.handle(Event::Begin);

    let first = runner.handle(Event::ScaleSelected {
        item: "q1".into(),
        value: 2,
    });
    let stale = scheduled(&first, AUTO_ADVANCE_DELAY);

    // Re-selecting supersedes the first timer and asks for its cancellation.
    let second = runner.handle(Event::ScaleSelected {
        item: "q1".into(),
        value: 4,
    });
    assert!(second.contains(&Command::Cancel(stale)));
    let fresh = scheduled(&second, AUTO_ADVANCE_DELAY);

    runner.handle(Event::TimerFired(stale));
    assert_eq!(runner.revealed(), 1);
    runner.handle(Event::TimerFired(fresh));
    assert_eq!(runner.revealed(), 2);

    // Double fire of the consumed token is also a no-op.
    runner.handle(Event::TimerFired(fresh));
    assert_eq!(runner.revealed(), 2);
}

#[test]
fn submission_is_blocked_while_a_required_item_is_unanswered() {
    let mut runner = loaded(questionnaire());
    runner.handle(Event::Begin);

    let commands = runner.handle(Event::Submit);
    assert!(!contains_batch(&commands));
    assert!(commands.contains(&Command::Notify(Notice::RequiredMissing)));
    assert_eq!(runner.phase(), Phase::Answering);
}

#[test]
fn batch_omits_unanswered_optionals_and_covers_all_required() {
    let mut runner = loaded(questionnaire());
    runner.handle(Event::Begin);

    let commands = runner.handle(Event::ScaleSelected {
        item: "q1".into(),
        value: 4,
    });
    runner.handle(Event::TimerFired(scheduled(&commands, AUTO_ADVANCE_DELAY)));
    assert!(runner.can_submit(), "optional unanswered tail must satisfy");

    let commands = runner.handle(Event::Submit);
    let batch = commands
        .iter()
        .find_map(|command| match command {
            Command::SubmitBatch(batch) => Some(batch),
            _ => None,
        })
        .expect("a valid sheet must produce a submission");

    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].item.as_str(), "q1");
    assert_eq!(batch[0].value, AnswerValue::Scale(4));
}

#[test]
fn answered_optional_text_is_included() {
    let mut runner = loaded(questionnaire());
    runner.handle(Event::Begin);

    let commands = runner.handle(Event::ScaleSelected {
        item: "q1".into(),
        value: 5,
    });
    runner.handle(Event::TimerFired(scheduled(&commands, AUTO_ADVANCE_DELAY)));
    runner.handle(Event::TextEdited {
        item: "q2".into(),
        text: "keep it up".to_string(),
    });

    let commands = runner.handle(Event::Submit);
    let batch = commands
        .iter()
        .find_map(|command| match command {
            Command::SubmitBatch(batch) => Some(batch),
            _ => None,
        })
        .unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[1].value, AnswerValue::Text("keep it up".to_string()));
}

#[test]
fn thank_you_dwell_resets_to_the_initial_session_state() {
    let mut runner = loaded(questionnaire());
    runner.handle(Event::Begin);

    let commands = runner.handle(Event::ScaleSelected {
        item: "q1".into(),
        value: 3,
    });
    runner.handle(Event::TimerFired(scheduled(&commands, AUTO_ADVANCE_DELAY)));
    runner.handle(Event::Submit);
    assert_eq!(runner.phase(), Phase::Submitting);

    let commands = runner.handle(Event::SubmitFinished(Ok(())));
    assert!(commands.contains(&Command::Notify(Notice::Submitted)));
    assert_eq!(runner.phase(), Phase::ThankYou);

    let reset = scheduled(&commands, THANK_YOU_DWELL);
    let commands = runner.handle(Event::TimerFired(reset));
    assert!(commands.contains(&Command::ScrollToTop));

    assert_eq!(runner.phase(), Phase::Welcome);
    assert_eq!(runner.revealed(), 0);
    assert_eq!(*runner.sheet(), AnswerSheet::for_items(runner.items()));
}

#[test]
fn free_text_advances_only_on_explicit_next() {
    let items = vec![
        QuestionnaireItem::new("q1", "Your thoughts?", ItemKind::FreeText, 1),
        QuestionnaireItem::new("q2", "Rate us", ItemKind::ScaleZeroToTen, 2),
    ];
    let mut runner = loaded(items);
    runner.handle(Event::Begin);

    // Typing never advances, and "next" needs a non-blank answer.
    runner.handle(Event::TextEdited {
        item: "q1".into(),
        text: "  ".to_string(),
    });
    runner.handle(Event::Next);
    assert_eq!(runner.revealed(), 1);

    runner.handle(Event::TextEdited {
        item: "q1".into(),
        text: "could be faster".to_string(),
    });
    let commands = runner.handle(Event::Next);
    assert_eq!(runner.revealed(), 2);
    assert!(commands.contains(&Command::ScrollTo(1)));
}

#[test]
fn empty_questionnaire_never_reaches_answering() {
    let mut runner = {
        let (mut runner, _) = SurveyRunner::new();
        runner.handle(Event::CompanyLoaded(Ok(Company::new("c1", "Acme"))));
        runner.handle(Event::QuestionnaireLoaded(Ok(Vec::new())));
        runner
    };
    assert_eq!(runner.phase(), Phase::Unavailable(Unavailable::NoQuestions));

    runner.handle(Event::Begin);
    assert_eq!(runner.phase(), Phase::Unavailable(Unavailable::NoQuestions));
}

#[test]
fn submit_failure_keeps_the_session_at_the_tail_with_answers_intact() {
    let mut runner = loaded(questionnaire());
    runner.handle(Event::Begin);

    let commands = runner.handle(Event::ScaleSelected {
        item: "q1".into(),
        value: 4,
    });
    runner.handle(Event::TimerFired(scheduled(&commands, AUTO_ADVANCE_DELAY)));
    runner.handle(Event::Submit);

    let commands = runner.handle(Event::SubmitFinished(Err(GatewayError::backend(
        anyhow::anyhow!("503"),
    ))));
    assert!(commands.contains(&Command::Notify(Notice::SubmitFailed)));
    assert_eq!(runner.phase(), Phase::Answering);
    assert_eq!(runner.revealed(), 2);
    assert_eq!(runner.sheet().scale(&"q1".into()), Some(4));

    // Manual retry succeeds with the same batch.
    let commands = runner.handle(Event::Submit);
    assert!(contains_batch(&commands));
}

#[test]
fn interaction_is_blocked_while_submitting() {
    let mut runner = loaded(questionnaire());
    runner.handle(Event::Begin);

    let commands = runner.handle(Event::ScaleSelected {
        item: "q1".into(),
        value: 1,
    });
    runner.handle(Event::TimerFired(scheduled(&commands, AUTO_ADVANCE_DELAY)));
    runner.handle(Event::Submit);

    runner.handle(Event::ScaleSelected {
        item: "q1".into(),
        value: 5,
    });
    runner.handle(Event::TextEdited {
        item: "q2".into(),
        text: "late".to_string(),
    });
    assert_eq!(runner.sheet().scale(&"q1".into()), Some(1));
    assert_eq!(runner.sheet().text(&"q2".into()), Some(""));
}

#[test]
fn hidden_questions_reject_answers() {
    let mut runner = loaded(questionnaire());
    runner.handle(Event::Begin);

    // q2 is not revealed yet.
    runner.handle(Event::TextEdited {
        item: "q2".into(),
        text: "too early".to_string(),
    });
    assert_eq!(runner.sheet().text(&"q2".into()), Some(""));
}

#[test]
fn answering_the_global_tail_schedules_no_advance() {
    let items = vec![QuestionnaireItem::new(
        "q1",
        "Rate us",
        ItemKind::ScaleZeroToFive,
        1,
    )];
    let mut runner = loaded(items);
    runner.handle(Event::Begin);

    let commands = runner.handle(Event::ScaleSelected {
        item: "q1".into(),
        value: 0,
    });
    assert!(
        !commands
            .iter()
            .any(|command| matches!(command, Command::Schedule { .. }))
    );
    assert!(runner.can_submit());
}
