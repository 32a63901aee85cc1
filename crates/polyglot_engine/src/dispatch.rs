use std::sync::Arc;

use futures_util::future::join_all;
use polyglot_core::LanguageId;
use polyglot_logging::{polyglot_debug, polyglot_info, polyglot_warn};

use crate::{translate_single, Capability, TranslationReport, ValidatedRequest};

/// Human-readable name for a wire language id; unknown ids pass through.
pub fn display_name_for(language: &str) -> &str {
    language
        .parse::<LanguageId>()
        .map(LanguageId::display_name)
        .unwrap_or(language)
}

/// Runs one single-target translation per requested language concurrently.
pub struct FanOutDispatcher {
    capability: Arc<dyn Capability>,
}

impl FanOutDispatcher {
    pub fn new(capability: Arc<dyn Capability>) -> Self {
        Self { capability }
    }

    /// Translates into every target and waits for all branches to settle.
    ///
    /// Each branch owns its result until the join completes, so a failing or
    /// slow branch never cancels or corrupts its siblings. Every target ends up
    /// in exactly one of the report's maps.
    pub async fn dispatch(&self, request: &ValidatedRequest) -> TranslationReport {
        let source_name = display_name_for(&request.source_language);
        polyglot_info!(
            "Fan-out source={} targets={} code_chars={}",
            request.source_language,
            request.target_languages.len(),
            request.code.chars().count()
        );

        let branches = request.target_languages.iter().map(|target| async move {
            let target_name = display_name_for(target);
            let result =
                translate_single(self.capability.as_ref(), &request.code, source_name, target_name)
                    .await;
            (target, result)
        });
        let settled = join_all(branches).await;

        let mut report = TranslationReport::default();
        for (target, result) in settled {
            match result {
                Ok(text) => {
                    polyglot_debug!("Translation to {} ok ({} chars)", target, text.len());
                    report.translations.insert(target.clone(), text);
                }
                Err(err) => {
                    polyglot_warn!("Translation to {} failed: {}", err.target(), err);
                    report.errors.insert(target.clone(), err.to_string());
                }
            }
        }
        report
    }
}
