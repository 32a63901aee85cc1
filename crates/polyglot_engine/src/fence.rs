const FENCE: &str = "```";

/// Removes a Markdown code-fence wrapper from a model response.
///
/// Drops a leading fence line (with or without a language tag) and a trailing
/// closing fence, then trims surrounding whitespace. Text without a wrapper is
/// only trimmed.
pub fn strip_code_fences(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = match rest.split_once('\n') {
            // The whole opening line is the info string, e.g. "python" or "c++".
            Some((_info, body)) => body,
            None => rest,
        };
    }

    text = text.trim_end();
    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim().to_string()
}
