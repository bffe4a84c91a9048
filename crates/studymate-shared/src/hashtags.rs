//! Hashtag input parsing.
//!
//! The composer takes hashtags as one free-form line ("알고리즘, #코딩테스트
//! 스터디") and normalises it into discrete `#`-prefixed tags.

/// Split a raw hashtag line on whitespace and commas, prefix each token
/// with `#` when missing, and discard empty or bare-`#` tokens.
pub fn extract_hashtags(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter_map(|tag| {
            let tag = tag.trim();
            if tag.is_empty() {
                return None;
            }
            let tag = if tag.starts_with('#') {
                tag.to_string()
            } else {
                format!("#{tag}")
            };
            // a lone "#" carries no tag
            (tag.chars().count() > 1).then_some(tag)
        })
        .collect()
}
