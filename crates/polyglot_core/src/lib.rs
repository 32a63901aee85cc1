//! Polyglot core: pure client-side pipeline state machine.
//!
//! Nothing in this crate performs IO or reads the clock; drivers pass in
//! settled text, elapsed instants and completed outcomes, and execute the
//! returned effects.
mod debounce;
mod effect;
mod job;
mod language;
mod msg;
mod state;
mod targets;
mod update;
mod view_model;

pub use debounce::{Debouncer, DEBOUNCE_WINDOW};
pub use effect::Effect;
pub use job::{JobError, JobSeq, TranslationJob, TranslationOutcome, MAX_TARGETS};
pub use language::{LanguageId, UnknownLanguage};
pub use msg::{JobResult, Msg};
pub use state::{AppState, SessionState};
pub use targets::{resolve_targets, DEFAULT_TARGET_COUNT};
pub use update::update;
pub use view_model::AppViewModel;
