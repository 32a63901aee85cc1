use crate::{JobSeq, LanguageId, TranslationOutcome};

/// Completion of one dispatched job: a structured outcome, or the single
/// transport-level failure message.
pub type JobResult = Result<TranslationOutcome, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Source text settled after debouncing.
    CodeSettled(String),
    /// User picked a different source language.
    SourceLanguageChanged(LanguageId),
    /// Caller supplied an explicit target set, or `None` to return to the default policy.
    TargetsOverridden(Option<Vec<LanguageId>>),
    /// Re-run the current snapshot, e.g. after a failure.
    RetryRequested,
    /// Gateway finished a job.
    JobDone { seq: JobSeq, result: JobResult },
    /// Input that changes nothing.
    NoOp,
}
