//! Inline-span tokenizer
//!
//! Splits the literal text of a block into plain text, bold, and
//! inline-code spans. The split keeps the delimiters, so each piece can
//! be re-classified by its wrapping. Spans do not nest: the first
//! well-formed delimiter pair claims the shortest non-delimiter run
//! between its markers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `**...**` or backtick-delimited code, non-greedy on the inner run
static SPAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*[^*]+\*\*|`[^`]+`").expect("static regex did not compile"));

/// A span of text within a single block line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Unformatted text, kept verbatim
    Text(String),
    /// Bold text, `**` markers stripped
    Bold(String),
    /// Inline code, backtick markers stripped
    Code(String),
}

impl InlineSpan {
    /// The text content of the span, without markers
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Text(t) | InlineSpan::Bold(t) | InlineSpan::Code(t) => t,
        }
    }
}

/// Split one line of text into inline spans
///
/// Pieces between matches are kept as plain text in original order;
/// zero-length pieces are dropped. There is no escaping mechanism for
/// literal asterisks or backticks.
pub fn tokenize(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut last = 0;

    for m in SPAN_PATTERN.find_iter(text) {
        push_piece(&mut spans, &text[last..m.start()]);
        push_piece(&mut spans, m.as_str());
        last = m.end();
    }
    push_piece(&mut spans, &text[last..]);

    spans
}

/// Classify a split piece by its wrapping and append it
fn push_piece(spans: &mut Vec<InlineSpan>, piece: &str) {
    if piece.is_empty() {
        return;
    }

    // Length guards keep the marker-stripping slices in bounds: a bare
    // "**" or "`" is plain text, not an empty bold/code span.
    if piece.len() >= 4 && piece.starts_with("**") && piece.ends_with("**") {
        spans.push(InlineSpan::Bold(piece[2..piece.len() - 2].to_string()));
    } else if piece.len() >= 2 && piece.starts_with('`') && piece.ends_with('`') {
        spans.push(InlineSpan::Code(piece[1..piece.len() - 1].to_string()));
    } else {
        spans.push(InlineSpan::Text(piece.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_plain_text() {
        let spans = tokenize("just some words");
        assert_eq!(spans, vec![InlineSpan::Text("just some words".to_string())]);
    }

    #[test]
    fn test_tokenize_bold_and_code() {
        let spans = tokenize("Hello **world** and `code`");
        assert_eq!(
            spans,
            vec![
                InlineSpan::Text("Hello ".to_string()),
                InlineSpan::Bold("world".to_string()),
                InlineSpan::Text(" and ".to_string()),
                InlineSpan::Code("code".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_adjacent_spans() {
        // No empty text spans between back-to-back matches
        let spans = tokenize("**a**`b`");
        assert_eq!(
            spans,
            vec![
                InlineSpan::Bold("a".to_string()),
                InlineSpan::Code("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_unclosed_markers_stay_literal() {
        let spans = tokenize("**open and `hanging");
        assert_eq!(
            spans,
            vec![InlineSpan::Text("**open and `hanging".to_string())]
        );
    }

    #[test]
    fn test_tokenize_first_match_wins() {
        // A backtick pair opened first swallows the asterisks inside it
        let spans = tokenize("`**x**`");
        assert_eq!(spans, vec![InlineSpan::Code("**x**".to_string())]);

        // And the other way around
        let spans = tokenize("**`x`**");
        assert_eq!(spans, vec![InlineSpan::Bold("`x`".to_string())]);
    }

    #[test]
    fn test_tokenize_non_greedy_inner_run() {
        let spans = tokenize("`a` and `b`");
        assert_eq!(
            spans,
            vec![
                InlineSpan::Code("a".to_string()),
                InlineSpan::Text(" and ".to_string()),
                InlineSpan::Code("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_bare_markers_are_text() {
        assert_eq!(tokenize("**"), vec![InlineSpan::Text("**".to_string())]);
        assert_eq!(tokenize("`"), vec![InlineSpan::Text("`".to_string())]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_marker_with_empty_run_is_text() {
        // `**` needs at least one non-asterisk character between markers
        let spans = tokenize("a ****");
        assert_eq!(spans, vec![InlineSpan::Text("a ****".to_string())]);
    }
}
