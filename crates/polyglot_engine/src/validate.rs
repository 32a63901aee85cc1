use polyglot_core::MAX_TARGETS;

use crate::TranslateRequest;

/// Largest accepted source text, in characters.
pub const MAX_CODE_CHARS: usize = 50_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Code is required")]
    MissingCode,
    #[error("Source language is required")]
    MissingSourceLanguage,
    #[error("Target languages are required")]
    MissingTargets,
    #[error("Code exceeds maximum length (50KB)")]
    CodeTooLong { chars: usize },
    #[error("Maximum {} target languages allowed", MAX_TARGETS)]
    TooManyTargets { count: usize },
}

/// A request that passed every check, ready for fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub code: String,
    pub source_language: String,
    /// Distinct, in request order.
    pub target_languages: Vec<String>,
}

/// Checks the whole request before any translation starts.
///
/// Checks run in a fixed order and the first violation wins.
pub fn validate(request: TranslateRequest) -> Result<ValidatedRequest, ValidationError> {
    let code = request
        .code
        .filter(|code| !code.is_empty())
        .ok_or(ValidationError::MissingCode)?;
    let source_language = request
        .source_language
        .filter(|lang| !lang.trim().is_empty())
        .ok_or(ValidationError::MissingSourceLanguage)?;
    let targets = request
        .target_languages
        .filter(|targets| !targets.is_empty())
        .ok_or(ValidationError::MissingTargets)?;

    let chars = code.chars().count();
    if chars > MAX_CODE_CHARS {
        return Err(ValidationError::CodeTooLong { chars });
    }
    if targets.len() > MAX_TARGETS {
        return Err(ValidationError::TooManyTargets {
            count: targets.len(),
        });
    }

    let mut target_languages: Vec<String> = Vec::with_capacity(targets.len());
    for target in targets {
        if !target_languages.contains(&target) {
            target_languages.push(target);
        }
    }

    Ok(ValidatedRequest {
        code,
        source_language,
        target_languages,
    })
}
