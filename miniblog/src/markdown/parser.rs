//! Line-oriented block classifier
//!
//! Single forward pass over the input lines. Each iteration consumes at
//! least one line, so the scan always terminates. Rule precedence is
//! fixed: fence handling, blank lines, headings (longest prefix first),
//! blockquote, unordered list run, ordered list run, paragraph fallback.

use once_cell::sync::Lazy;
use regex::Regex;

use super::blocks::{Block, Document, ListItem, OrderedItem};
use super::inline::tokenize;

/// Opening and closing marker of a fenced code block
const FENCE: &str = "```";

/// Matches an ordered-list marker: a digit run, a dot, one whitespace
static ORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.\s").expect("static regex did not compile"));

/// Parse a markdown-subset string into a document tree
///
/// Total over all inputs: lines that match no rule become paragraphs,
/// blank lines outside fences are dropped, and an unterminated fence
/// runs to the end of the input. Empty or whitespace-only input yields
/// an empty document.
pub fn parse(content: &str) -> Document {
    let lines: Vec<&str> = content.trim().split('\n').collect();
    let mut blocks = Vec::new();

    let mut i = 0;
    let mut in_code_block = false;
    let mut code_lines: Vec<String> = Vec::new();
    let mut code_language = String::new();

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        // Fence lines toggle code mode; the closing fence emits the block.
        // The close check is starts-with, so a trailing label on the
        // closing line is discarded.
        if trimmed.starts_with(FENCE) {
            if in_code_block {
                in_code_block = false;
                blocks.push(Block::CodeBlock {
                    language: std::mem::take(&mut code_language),
                    lines: std::mem::take(&mut code_lines),
                });
            } else {
                in_code_block = true;
                code_language = trimmed[FENCE.len()..].to_string();
                code_lines = Vec::new();
            }
            i += 1;
            continue;
        }

        if in_code_block {
            code_lines.push(line.to_string());
            i += 1;
            continue;
        }

        if trimmed.is_empty() {
            i += 1;
            continue;
        }

        // Heading prefixes are literal-string checks on the untrimmed
        // line, longest first since all three start with '#'. A line
        // like "#Text" is not a heading and falls through to paragraph.
        if let Some(rest) = line.strip_prefix("### ") {
            blocks.push(Block::Heading {
                level: 3,
                spans: tokenize(rest),
            });
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix("## ") {
            blocks.push(Block::Heading {
                level: 2,
                spans: tokenize(rest),
            });
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix("# ") {
            blocks.push(Block::Heading {
                level: 1,
                spans: tokenize(rest),
            });
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix("> ") {
            // Literal double quotes are stripped from quoted text
            let text = rest.replace('"', "");
            blocks.push(Block::Blockquote {
                spans: tokenize(&text),
            });
            i += 1;
            continue;
        }

        // List runs are maximal: absorb every immediately consecutive
        // line with the same marker, re-testing the trimmed line each
        // iteration so leading indentation neither breaks the run nor
        // nests. A non-matching line, including a blank one, ends it.
        if trimmed.starts_with("- ") {
            let mut items = Vec::new();
            while i < lines.len() {
                match lines[i].trim().strip_prefix("- ") {
                    Some(text) => {
                        items.push(ListItem {
                            spans: tokenize(text),
                        });
                        i += 1;
                    }
                    None => break,
                }
            }
            blocks.push(Block::UnorderedList { items });
            continue;
        }

        if ORDERED_MARKER.is_match(trimmed) {
            let mut items = Vec::new();
            while i < lines.len() {
                let item_line = lines[i].trim();
                let Some(caps) = ORDERED_MARKER.captures(item_line) else {
                    break;
                };
                let marker = caps[1].to_string();
                let marker_end = caps.get(0).map_or(0, |m| m.end());
                items.push(OrderedItem {
                    marker,
                    spans: tokenize(&item_line[marker_end..]),
                });
                i += 1;
            }
            blocks.push(Block::OrderedList { items });
            continue;
        }

        blocks.push(Block::Paragraph {
            spans: tokenize(line),
        });
        i += 1;
    }

    // An unterminated fence runs to the end of the input
    if in_code_block {
        blocks.push(Block::CodeBlock {
            language: code_language,
            lines: code_lines,
        });
    }

    Document { blocks }
}
