//! Headline tokenization shared by the resolver, the emitter and the
//! word-styling commands.

use serde::Serialize;

/// Whether a segment is a word or a whitespace run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentKind {
    Word,
    Whitespace,
}

/// Splits `text` into alternating word and whitespace runs.
///
/// Concatenating the returned slices gives back `text` exactly.
pub fn tokenize(text: &str) -> Vec<(SegmentKind, &str)> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut current: Option<SegmentKind> = None;

    for (i, ch) in text.char_indices() {
        let kind = if ch.is_whitespace() {
            SegmentKind::Whitespace
        } else {
            SegmentKind::Word
        };
        match current {
            Some(k) if k == kind => {}
            Some(k) => {
                segments.push((k, &text[start..i]));
                start = i;
                current = Some(kind);
            }
            None => current = Some(kind),
        }
    }

    if let Some(k) = current {
        segments.push((k, &text[start..]));
    }
    segments
}

/// The lookup key of a word segment: the segment with every non-word
/// character removed (`"It!"` → `"It"`).
pub fn word_key(segment: &str) -> String {
    segment
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// The distinct non-empty word keys of `text`, in first-seen order.
pub fn unique_words(text: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for (kind, segment) in tokenize(text) {
        if kind != SegmentKind::Word {
            continue;
        }
        let key = word_key(segment);
        if !key.is_empty() && !words.contains(&key) {
            words.push(key);
        }
    }
    words
}

/// Truncates `text` to at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}
