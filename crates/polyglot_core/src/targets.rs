use crate::LanguageId;

/// Number of default targets derived from the primary list.
pub const DEFAULT_TARGET_COUNT: usize = 4;

/// Derives the target set for `source`.
///
/// An explicit set is returned verbatim; it is neither filtered nor capped here.
/// Otherwise the primary languages minus the source, first four in list order.
pub fn resolve_targets(source: LanguageId, explicit: Option<&[LanguageId]>) -> Vec<LanguageId> {
    if let Some(explicit) = explicit {
        return explicit.to_vec();
    }
    LanguageId::PRIMARY
        .into_iter()
        .filter(|lang| *lang != source)
        .take(DEFAULT_TARGET_COUNT)
        .collect()
}
