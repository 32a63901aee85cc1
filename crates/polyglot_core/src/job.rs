use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::LanguageId;

/// Monotonically increasing identity of an issued job.
pub type JobSeq = u64;

/// Most target languages a single job may carry across the gateway.
pub const MAX_TARGETS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobError {
    #[error("Code is required")]
    EmptyCode,
    #[error("Target languages are required")]
    NoTargets,
}

/// One snapshot of source text bound to a fixed target set.
///
/// Serializes to the `POST /translate` request body. Only `new` constructs
/// one, so every job in existence has passed the client-side checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationJob {
    code: String,
    source_language: LanguageId,
    target_languages: Vec<LanguageId>,
}

impl TranslationJob {
    /// Checks the client-side preconditions; the backend enforces size ceilings.
    pub fn new(
        code: impl Into<String>,
        source_language: LanguageId,
        target_languages: Vec<LanguageId>,
    ) -> Result<Self, JobError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(JobError::EmptyCode);
        }
        if target_languages.is_empty() {
            return Err(JobError::NoTargets);
        }
        Ok(Self {
            code,
            source_language,
            target_languages,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn source_language(&self) -> LanguageId {
        self.source_language
    }

    pub fn target_languages(&self) -> &[LanguageId] {
        &self.target_languages
    }
}

/// Aggregated per-target result of one job.
///
/// Every target of the job appears in exactly one of the two maps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslationOutcome {
    pub translations: BTreeMap<LanguageId, String>,
    pub errors: BTreeMap<LanguageId, String>,
}

impl TranslationOutcome {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The same failure message recorded against every target.
    pub fn failed_for(targets: &[LanguageId], message: &str) -> Self {
        Self {
            translations: BTreeMap::new(),
            errors: targets
                .iter()
                .map(|lang| (*lang, message.to_string()))
                .collect(),
        }
    }

    /// Whether every one of `targets` has an entry in exactly one map and no
    /// other language appears. Repeated targets count once.
    pub fn covers_exactly(&self, targets: &[LanguageId]) -> bool {
        let expected: BTreeSet<LanguageId> = targets.iter().copied().collect();
        let overlap = self
            .translations
            .keys()
            .any(|lang| self.errors.contains_key(lang));
        let present: BTreeSet<LanguageId> = self
            .translations
            .keys()
            .chain(self.errors.keys())
            .copied()
            .collect();
        !overlap && present == expected
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty() && self.errors.is_empty()
    }
}
