//! Markdown-subset parser
//!
//! Hand-written parser for the constrained markdown dialect used in
//! article bodies and site pages: headings 1-3, paragraphs, blockquotes,
//! unordered and ordered lists, fenced code blocks, and bold/inline-code
//! spans. The parser is total: every input string, including the empty
//! string, produces a document, and malformed markup falls back to
//! paragraph text instead of failing.

// Submodules
mod blocks;
mod inline;
mod parser;

// Re-export public types
pub use blocks::{Block, Document, ListItem, OrderedItem};
pub use inline::{tokenize, InlineSpan};
pub use parser::parse;
