use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CodeSettled(code) => {
            state.set_code(code);
            replan(&mut state)
        }
        Msg::SourceLanguageChanged(language) => {
            if !state.set_source_language(language) {
                return (state, Vec::new());
            }
            replan(&mut state)
        }
        Msg::TargetsOverridden(targets) => {
            state.set_explicit_targets(targets);
            replan(&mut state)
        }
        Msg::RetryRequested => replan(&mut state),
        Msg::JobDone { seq, result } => {
            // A superseded completion is dropped silently; the newer job owns the session.
            state.apply_done(seq, result);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn replan(state: &mut AppState) -> Vec<Effect> {
    match state.plan_job() {
        Some((seq, job)) => vec![Effect::DispatchJob { seq, job }],
        None => Vec::new(),
    }
}
