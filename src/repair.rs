use std::borrow::Cow;

use memchr::{memchr_iter, memmem};

/// Produce the candidate text for parsing: the trimmed input with at most one
/// paste-repair rewrite applied. Borrows when no rewrite is committed.
pub fn repair(candidate: &str) -> Cow<'_, str> {
    if !candidate.starts_with('[') && has_adjacent_objects(candidate) {
        let joined = join_adjacent_objects(candidate);
        let repaired = if joined.starts_with('[') {
            joined
        } else {
            let mut wrapped = String::with_capacity(joined.len() + 2);
            wrapped.push('[');
            wrapped.push_str(&joined);
            wrapped.push(']');
            wrapped
        };
        // Speculative: only commit the rewrite if it parses on its own.
        if serde_json::from_str::<serde::de::IgnoredAny>(&repaired).is_ok() {
            return Cow::Owned(repaired);
        }
        return Cow::Borrowed(candidate);
    }

    if !candidate.starts_with('[')
        && !candidate.ends_with(']')
        && memmem::find(candidate.as_bytes(), b"},{").is_some()
    {
        // Comma-joined fragments get wrapped without validation; the final
        // parse decides. Not gated like the adjacency path above.
        let mut wrapped = String::with_capacity(candidate.len() + 2);
        wrapped.push('[');
        wrapped.push_str(candidate);
        wrapped.push(']');
        return Cow::Owned(wrapped);
    }

    Cow::Borrowed(candidate)
}

/// True if the text contains `}` followed by optional ASCII whitespace and `{`,
/// the shape left behind when separate JSON objects are pasted back to back.
pub fn has_adjacent_objects(text: &str) -> bool {
    let bytes = text.as_bytes();
    for close in memchr_iter(b'}', bytes) {
        let mut idx = close + 1;
        while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
            idx += 1;
        }
        if idx < bytes.len() && bytes[idx] == b'{' {
            return true;
        }
    }
    false
}

/// Rewrite every `}` ws* `{` occurrence to `},{` in a single pass.
pub fn join_adjacent_objects(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for close in memchr_iter(b'}', bytes) {
        let mut idx = close + 1;
        while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
            idx += 1;
        }
        if idx < bytes.len() && bytes[idx] == b'{' {
            out.push_str(&text[last..=close]);
            out.push(',');
            last = idx;
        }
    }
    out.push_str(&text[last..]);
    out
}
