use crate::{LanguageId, SessionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub source_language: LanguageId,
    pub session: SessionState,
    /// Why the last snapshot was not dispatched, if it was rejected client-side.
    pub rejection: Option<String>,
    pub dirty: bool,
}
