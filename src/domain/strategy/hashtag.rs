//! Hashtag normalization.

/// Strips surrounding whitespace and any leading `#` marks.
///
/// Idempotent: `normalize_hashtag(normalize_hashtag(t)) == normalize_hashtag(t)`.
pub fn normalize_hashtag(tag: &str) -> &str {
    tag.trim().trim_start_matches('#').trim_start()
}

/// Renders a tag with exactly one leading `#`.
pub fn format_hashtag(tag: &str) -> String {
    format!("#{}", normalize_hashtag(tag))
}
