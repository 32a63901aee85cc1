use crate::{build_translation_prompt, strip_code_fences, Capability, CapabilityError, ContentBlock};

pub const NO_TEXT_MESSAGE: &str = "no text response from translation capability";

/// Failure of one target. Displays as the bare cause so it can be shown in
/// place of the translation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("{source}")]
    Capability {
        target: String,
        source: CapabilityError,
    },
    #[error("no text response from translation capability")]
    NoText { target: String },
}

impl TranslateError {
    /// Display name of the target language that failed.
    pub fn target(&self) -> &str {
        match self {
            TranslateError::Capability { target, .. } | TranslateError::NoText { target } => {
                target
            }
        }
    }
}

/// Translates `code` into one target language with a single capability call.
///
/// No retry: the first failure is final for this target.
pub async fn translate_single(
    capability: &dyn Capability,
    code: &str,
    source_name: &str,
    target_name: &str,
) -> Result<String, TranslateError> {
    let prompt = build_translation_prompt(code, source_name, target_name);
    let blocks = capability
        .complete(&prompt)
        .await
        .map_err(|source| TranslateError::Capability {
            target: target_name.to_string(),
            source,
        })?;

    let text = blocks
        .into_iter()
        .find_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
        .ok_or_else(|| TranslateError::NoText {
            target: target_name.to_string(),
        })?;

    Ok(strip_code_fences(&text))
}
