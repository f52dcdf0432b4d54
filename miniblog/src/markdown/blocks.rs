//! Block-level document tree
//!
//! This module defines the structured representation of a parsed article
//! body. A document is a flat, ordered sequence of block nodes; blocks
//! carry inline spans except for code blocks, which keep their lines
//! verbatim.

use super::inline::InlineSpan;

/// A fully parsed article body
///
/// Rebuilt from the source string on every render; never mutated and
/// never cached across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Block nodes in source order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Whether the document contains no blocks at all
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Block-level element of the markdown subset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A single-line heading
    Heading {
        /// Heading level, 1 through 3
        level: u8,
        /// Inline spans of the heading text
        spans: Vec<InlineSpan>,
    },

    /// A single line of running text
    ///
    /// Every line not matching a more specific rule becomes its own
    /// paragraph; consecutive lines are not merged.
    Paragraph {
        /// Inline spans of the paragraph text
        spans: Vec<InlineSpan>,
    },

    /// A single-line quote, with literal double-quote characters removed
    Blockquote {
        /// Inline spans of the quoted text
        spans: Vec<InlineSpan>,
    },

    /// A maximal run of consecutive `- ` lines
    UnorderedList {
        /// List items in source order
        items: Vec<ListItem>,
    },

    /// A maximal run of consecutive `<digits>. ` lines
    OrderedList {
        /// List items with their markers as written (not renumbered)
        items: Vec<OrderedItem>,
    },

    /// A fenced code block
    ///
    /// Content lines are kept verbatim, including empty lines, with no
    /// inline-span processing.
    CodeBlock {
        /// Language label after the opening fence (possibly empty)
        language: String,
        /// Raw content lines between the fences
        lines: Vec<String>,
    },
}

/// An item of an unordered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Inline spans of the item text
    pub spans: Vec<InlineSpan>,
}

/// An item of an ordered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedItem {
    /// The digit run as written in the source, e.g. `"5"` for `5. x`
    pub marker: String,
    /// Inline spans of the item text
    pub spans: Vec<InlineSpan>,
}
