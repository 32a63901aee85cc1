use std::collections::BTreeMap;
use std::sync::Once;

use polyglot_core::{
    update, AppState, Effect, JobSeq, LanguageId, Msg, TranslationJob, TranslationOutcome,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(polyglot_logging::initialize_for_tests);
}

fn settle(state: AppState, code: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::CodeSettled(code.to_string()))
}

fn dispatched(effects: &[Effect]) -> (JobSeq, TranslationJob) {
    effects
        .iter()
        .map(|effect| match effect {
            Effect::DispatchJob { seq, job } => (*seq, job.clone()),
        })
        .next()
        .expect("dispatch effect")
}

fn outcome_with(lang: LanguageId, text: &str) -> TranslationOutcome {
    TranslationOutcome {
        translations: BTreeMap::from([(lang, text.to_string())]),
        errors: BTreeMap::new(),
    }
}

#[test]
fn settled_code_dispatches_job_and_marks_loading() {
    init_logging();
    let (mut state, effects) = settle(AppState::new(LanguageId::CSharp), "int x = 1;");

    let (seq, job) = dispatched(&effects);
    assert_eq!(seq, 1);
    assert_eq!(job.code(), "int x = 1;");
    assert_eq!(job.source_language(), LanguageId::CSharp);
    assert_eq!(
        job.target_languages(),
        &[
            LanguageId::Python,
            LanguageId::Rust,
            LanguageId::Java,
            LanguageId::Cpp
        ]
    );
    assert!(state.session().is_loading);
    assert!(state.consume_dirty());
}

#[test]
fn accepted_outcome_replaces_session() {
    init_logging();
    let state = AppState::new(LanguageId::CSharp);
    let (state, _) = update(
        state,
        Msg::TargetsOverridden(Some(vec![LanguageId::Python, LanguageId::Rust])),
    );
    let (state, effects) = settle(state, "Console.WriteLine(\"Hello\");");
    let (seq, _) = dispatched(&effects);

    let outcome = TranslationOutcome {
        translations: BTreeMap::from([(LanguageId::Python, "print(\"Hello\")".to_string())]),
        errors: BTreeMap::from([(LanguageId::Rust, "overloaded".to_string())]),
    };
    let (state, effects) = update(
        state,
        Msg::JobDone {
            seq,
            result: Ok(outcome.clone()),
        },
    );

    assert!(effects.is_empty());
    let session = state.session();
    assert!(!session.is_loading);
    assert_eq!(session.targets, vec![LanguageId::Python, LanguageId::Rust]);
    assert_eq!(session.outcome, outcome);
}

#[test]
fn late_response_from_superseded_job_is_discarded() {
    init_logging();
    let state = AppState::new(LanguageId::CSharp);
    let (state, effects_a) = settle(state, "int a = 1;");
    let (seq_a, _) = dispatched(&effects_a);
    let (state, effects_b) = settle(state, "int b = 2;");
    let (seq_b, _) = dispatched(&effects_b);
    assert!(seq_b > seq_a);

    // B completes first, then A's stale response arrives.
    let (state, _) = update(
        state,
        Msg::JobDone {
            seq: seq_b,
            result: Ok(outcome_with(LanguageId::Python, "b = 2")),
        },
    );
    let (mut state, _) = update(
        state,
        Msg::JobDone {
            seq: seq_a,
            result: Ok(outcome_with(LanguageId::Python, "a = 1")),
        },
    );

    assert_eq!(
        state.session().outcome,
        outcome_with(LanguageId::Python, "b = 2")
    );
    assert!(!state.session().is_loading);
    state.consume_dirty();

    // A duplicate completion for B is also ignored once applied.
    let (mut state, _) = update(
        state,
        Msg::JobDone {
            seq: seq_b,
            result: Err("late duplicate".to_string()),
        },
    );
    assert!(!state.consume_dirty());
    assert_eq!(
        state.session().outcome,
        outcome_with(LanguageId::Python, "b = 2")
    );
}

#[test]
fn superseded_response_arriving_before_newer_one_keeps_loading() {
    init_logging();
    let (state, effects_a) = settle(AppState::new(LanguageId::CSharp), "int a = 1;");
    let (seq_a, _) = dispatched(&effects_a);
    let (state, effects_b) = settle(state, "int b = 2;");
    let (seq_b, _) = dispatched(&effects_b);

    let (state, _) = update(
        state,
        Msg::JobDone {
            seq: seq_a,
            result: Ok(outcome_with(LanguageId::Python, "a = 1")),
        },
    );
    assert!(state.session().is_loading);
    assert!(state.session().outcome.is_empty());

    let (state, _) = update(
        state,
        Msg::JobDone {
            seq: seq_b,
            result: Ok(outcome_with(LanguageId::Python, "b = 2")),
        },
    );
    assert_eq!(
        state.session().outcome,
        outcome_with(LanguageId::Python, "b = 2")
    );
}

#[test]
fn gateway_failure_fans_out_to_every_target() {
    init_logging();
    let (state, effects) = settle(AppState::new(LanguageId::Rust), "fn main() {}");
    let (seq, job) = dispatched(&effects);

    let (state, _) = update(
        state,
        Msg::JobDone {
            seq,
            result: Err("connection refused".to_string()),
        },
    );

    let session = state.session();
    assert!(session.outcome.translations.is_empty());
    assert_eq!(
        session.outcome.errors.keys().copied().collect::<Vec<_>>(),
        {
            let mut expected = job.target_languages().to_vec();
            expected.sort();
            expected
        }
    );
    assert!(session
        .outcome
        .errors
        .values()
        .all(|message| message == "connection refused"));
}

#[test]
fn previous_results_stay_visible_while_next_job_loads() {
    init_logging();
    let (state, effects) = settle(AppState::new(LanguageId::CSharp), "int a = 1;");
    let (seq, _) = dispatched(&effects);
    let (state, _) = update(
        state,
        Msg::JobDone {
            seq,
            result: Ok(outcome_with(LanguageId::Python, "a = 1")),
        },
    );

    let (state, _) = settle(state, "int a = 2;");
    assert!(state.session().is_loading);
    assert_eq!(
        state.session().outcome,
        outcome_with(LanguageId::Python, "a = 1")
    );
}

#[test]
fn sequence_numbers_increase_monotonically() {
    init_logging();
    let mut state = AppState::new(LanguageId::Java);
    let mut seen = Vec::new();
    for code in ["a", "b", "c"] {
        let (next, effects) = settle(state, code);
        seen.push(dispatched(&effects).0);
        state = next;
    }
    assert_eq!(seen, vec![1, 2, 3]);
    assert_eq!(state.last_issued(), 3);
}
