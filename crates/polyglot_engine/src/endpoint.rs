use url::Url;

/// Joins `path` below `base`, keeping every segment of `base`.
///
/// `Url::join` replaces the last segment unless the base ends in `/`, which
/// would turn `http://host/api` + `translate` into `http://host/translate`.
pub(crate) fn join_below(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path.trim_start_matches('/'))
}
