//! Site model for the build pipeline
//!
//! This module defines the structures passed between the build stages:
//! the source model produced by Stage 1 (configuration, stored articles,
//! static page files) and the site model produced by Stage 2, where
//! every markdown body has been parsed into a document tree.

use crate::markdown::{Block, Document};
use crate::post::Post;
use crate::site_config::SiteConfig;
use std::path::PathBuf;

/// Collection of all sources discovered for a build
#[derive(Debug)]
pub struct SourceModel {
    /// Root directory of the site
    pub root: PathBuf,

    /// Site configuration from site.toml
    pub config: SiteConfig,

    /// Stored articles, in stored order (newest first)
    pub posts: Vec<Post>,

    /// Static page sources discovered under pages/, sorted by path
    pub pages: Vec<PageSource>,
}

/// One static page file before parsing
#[derive(Debug)]
pub struct PageSource {
    /// Path relative to the site root
    pub path: PathBuf,

    /// Absolute path of the file
    pub absolute_path: PathBuf,

    /// Output slug, taken from the file stem
    pub slug: String,

    /// Display title derived from the file stem
    pub title: String,

    /// Raw markdown-subset content
    pub raw_content: String,
}

/// Fully transformed site, ready for export
#[derive(Debug)]
pub struct Site {
    /// Site configuration
    pub config: SiteConfig,

    /// Articles sorted by date, newest first, bodies parsed
    pub articles: Vec<Article>,

    /// Static pages, bodies parsed
    pub pages: Vec<Page>,
}

/// One article with its parsed body
#[derive(Debug)]
pub struct Article {
    /// The stored article record
    pub post: Post,

    /// Parsed document tree of the article body
    pub document: Document,
}

/// One static page with its parsed body
#[derive(Debug)]
pub struct Page {
    /// Output slug
    pub slug: String,

    /// Display title
    pub title: String,

    /// Parsed document tree of the page body
    pub document: Document,
}

impl Site {
    /// Total word count across all parsed documents
    pub fn word_count(&self) -> usize {
        self.articles
            .iter()
            .map(|a| document_words(&a.document))
            .sum::<usize>()
            + self.pages.iter().map(|p| document_words(&p.document)).sum::<usize>()
    }
}

/// Count whitespace-separated words in a parsed document
fn document_words(doc: &Document) -> usize {
    doc.blocks
        .iter()
        .map(|block| match block {
            Block::Heading { spans, .. }
            | Block::Paragraph { spans }
            | Block::Blockquote { spans } => spans_words(spans),
            Block::UnorderedList { items } => {
                items.iter().map(|it| spans_words(&it.spans)).sum()
            }
            Block::OrderedList { items } => {
                items.iter().map(|it| spans_words(&it.spans)).sum()
            }
            Block::CodeBlock { lines, .. } => lines
                .iter()
                .map(|l| l.split_whitespace().count())
                .sum(),
        })
        .sum()
}

/// Count words across a span sequence
fn spans_words(spans: &[crate::markdown::InlineSpan]) -> usize {
    spans
        .iter()
        .map(|s| s.text().split_whitespace().count())
        .sum()
}

/// Derive a display title from a page file stem
///
/// Hyphens and underscores become spaces and each word is capitalized:
/// `"sobre-mim"` becomes `"Sobre Mim"`.
pub fn title_from_slug(slug: &str) -> String {
    slug.replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
