use std::collections::BTreeMap;

use polyglot_core::{JobSeq, TranslationOutcome};
use serde::{Deserialize, Serialize};

use crate::GatewayError;

/// Body of `POST /translate` as received by the backend.
///
/// Fields are optional so that absent or `null` values reach validation and
/// get the matching message instead of a generic parse failure. Languages stay
/// raw strings: the backend translates into any language the caller names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub target_languages: Option<Vec<String>>,
}

/// Aggregated backend response. Keys are the requested language ids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslationReport {
    pub translations: BTreeMap<String, String>,
    pub errors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    JobCompleted {
        seq: JobSeq,
        result: Result<TranslationOutcome, GatewayError>,
    },
}
