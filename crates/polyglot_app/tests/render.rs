use std::collections::BTreeMap;

use polyglot_app::render;
use polyglot_core::{AppViewModel, LanguageId, SessionState, TranslationOutcome};
use pretty_assertions::assert_eq;

fn view(session: SessionState, rejection: Option<&str>) -> AppViewModel {
    AppViewModel {
        source_language: LanguageId::CSharp,
        session,
        rejection: rejection.map(str::to_string),
        dirty: true,
    }
}

#[test]
fn renders_translations_and_errors_per_target() {
    let session = SessionState {
        is_loading: false,
        targets: vec![LanguageId::Python, LanguageId::Rust],
        outcome: TranslationOutcome {
            translations: BTreeMap::from([(LanguageId::Python, "print(\"Hello\")".to_string())]),
            errors: BTreeMap::from([(LanguageId::Rust, "Rate limited".to_string())]),
        },
    };

    assert_eq!(
        render(&view(session, None)),
        "=== C# -> Python, Rust\n--- Python\nprint(\"Hello\")\n--- Rust [error]\nRate limited"
    );
}

#[test]
fn loading_marks_targets_without_results() {
    let session = SessionState {
        is_loading: true,
        targets: vec![LanguageId::Python, LanguageId::Cpp],
        outcome: TranslationOutcome {
            translations: BTreeMap::from([(LanguageId::Python, "x = 1".to_string())]),
            errors: BTreeMap::new(),
        },
    };

    assert_eq!(
        render(&view(session, None)),
        "=== C# -> Python, C++ (translating...)\n--- Python\nx = 1\n--- C++\n(waiting)"
    );
}

#[test]
fn idle_session_shows_rejection() {
    let session = SessionState::idle(vec![]);

    assert_eq!(
        render(&view(session, Some("Target languages are required"))),
        "=== C# -> \n! Target languages are required"
    );
}
