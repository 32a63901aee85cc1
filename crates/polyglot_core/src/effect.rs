use crate::{JobSeq, TranslationJob};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `job` through the gateway and report back with `Msg::JobDone { seq, .. }`.
    DispatchJob { seq: JobSeq, job: TranslationJob },
}
