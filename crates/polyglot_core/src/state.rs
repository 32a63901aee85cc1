use crate::view_model::AppViewModel;
use crate::{resolve_targets, JobResult, JobSeq, LanguageId, TranslationJob, TranslationOutcome};

/// What the UI shows. Always replaced as a whole, never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub is_loading: bool,
    pub targets: Vec<LanguageId>,
    pub outcome: TranslationOutcome,
}

impl SessionState {
    pub fn idle(targets: Vec<LanguageId>) -> Self {
        Self {
            is_loading: false,
            targets,
            outcome: TranslationOutcome::empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlight {
    seq: JobSeq,
    targets: Vec<LanguageId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    code: String,
    source_language: LanguageId,
    explicit_targets: Option<Vec<LanguageId>>,
    last_issued: JobSeq,
    /// The only job whose completion may still be applied.
    authoritative: Option<InFlight>,
    session: SessionState,
    rejection: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LanguageId::CSharp)
    }
}

impl AppState {
    pub fn new(source_language: LanguageId) -> Self {
        Self {
            code: String::new(),
            source_language,
            explicit_targets: None,
            last_issued: 0,
            authoritative: None,
            session: SessionState::idle(resolve_targets(source_language, None)),
            rejection: None,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            source_language: self.source_language,
            session: self.session.clone(),
            rejection: self.rejection.clone(),
            dirty: self.dirty,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn source_language(&self) -> LanguageId {
        self.source_language
    }

    /// Highest sequence number issued so far; 0 before the first dispatch.
    pub fn last_issued(&self) -> JobSeq {
        self.last_issued
    }

    /// Returns whether a re-render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_code(&mut self, code: String) {
        self.code = code;
    }

    pub(crate) fn set_source_language(&mut self, source_language: LanguageId) -> bool {
        if self.source_language == source_language {
            return false;
        }
        self.source_language = source_language;
        true
    }

    pub(crate) fn set_explicit_targets(&mut self, targets: Option<Vec<LanguageId>>) {
        self.explicit_targets = targets;
    }

    /// Builds a job from the current snapshot and makes it authoritative.
    ///
    /// Returns `None` when nothing should be dispatched; the session is then
    /// reset and any in-flight job loses authority.
    pub(crate) fn plan_job(&mut self) -> Option<(JobSeq, TranslationJob)> {
        let targets = resolve_targets(self.source_language, self.explicit_targets.as_deref());
        self.dirty = true;

        if self.code.trim().is_empty() {
            self.authoritative = None;
            self.rejection = None;
            self.replace_session(SessionState::idle(targets));
            return None;
        }

        match TranslationJob::new(self.code.clone(), self.source_language, targets.clone()) {
            Ok(job) => {
                self.last_issued += 1;
                let seq = self.last_issued;
                self.authoritative = Some(InFlight {
                    seq,
                    targets: targets.clone(),
                });
                self.rejection = None;
                let previous = self.session.outcome.clone();
                self.replace_session(SessionState {
                    is_loading: true,
                    targets,
                    outcome: previous,
                });
                Some((seq, job))
            }
            Err(err) => {
                self.authoritative = None;
                self.rejection = Some(err.to_string());
                self.replace_session(SessionState::idle(targets));
                None
            }
        }
    }

    /// Applies a completion if it belongs to the authoritative job.
    ///
    /// Returns `false` when the completion was superseded and discarded.
    pub(crate) fn apply_done(&mut self, seq: JobSeq, result: JobResult) -> bool {
        let targets = match &self.authoritative {
            Some(in_flight) if in_flight.seq == seq => in_flight.targets.clone(),
            _ => return false,
        };
        self.authoritative = None;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(message) => TranslationOutcome::failed_for(&targets, &message),
        };
        self.replace_session(SessionState {
            is_loading: false,
            targets,
            outcome,
        });
        self.dirty = true;
        true
    }

    fn replace_session(&mut self, session: SessionState) {
        self.session = session;
    }
}
