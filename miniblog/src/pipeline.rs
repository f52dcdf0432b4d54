//! Three-stage site build pipeline
//!
//! This module orchestrates the three stages of a site build:
//! 1. **Parsing**: Load configuration, stored articles, and static pages
//! 2. **Transformation**: Parse every markdown body into a document tree
//! 3. **Export**: Write the HTML pages
//!
//! The markdown parser itself is total, so stage 2 can only fail on
//! structural problems such as duplicate slugs.

use crate::html_exporter;
use crate::markdown;
use crate::site_config::{SiteConfig, SiteConfigError};
use crate::site_model::{Article, Page, PageSource, Site, SourceModel};
use crate::store::{PostStore, StoreError};
use itertools::Itertools;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "site.toml";

/// Name of the article store file
pub const POSTS_FILE: &str = "posts.json";

/// Name of the static pages directory
pub const PAGES_DIR: &str = "pages";

/// Stage 1: Load all build sources from a site directory
pub fn parse_sources(root: &Path) -> Result<SourceModel, ParseError> {
    let config_path = root.join(CONFIG_FILE);
    let config = SiteConfig::load(&config_path)
        .map_err(|e| ParseError::ConfigError(config_path.clone(), Box::new(e)))?;

    let store = PostStore::new(root.join(POSTS_FILE));
    let posts = store.load()?;
    log::info!("Loaded {} articles from {}", posts.len(), store.path().display());

    let pages = discover_pages(root)?;

    Ok(SourceModel {
        root: root.to_path_buf(),
        config,
        posts,
        pages,
    })
}

/// Discover static page files under pages/, sorted by path
///
/// A missing pages directory simply yields no pages.
fn discover_pages(root: &Path) -> Result<Vec<PageSource>, ParseError> {
    let pages_dir = root.join(PAGES_DIR);
    if !pages_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(&pages_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path().is_file() && e.path().extension().and_then(|s| s.to_str()) == Some("md")
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();

    let mut pages = Vec::new();
    for path in paths {
        let raw_content = std::fs::read_to_string(&path)
            .map_err(|e| ParseError::IoError(path.clone(), e))?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ParseError::InvalidFilename(path.clone()))?
            .to_string();

        log::debug!("Discovered page {}", path.display());

        pages.push(PageSource {
            path: path.strip_prefix(root).unwrap_or(&path).to_path_buf(),
            absolute_path: path.clone(),
            title: crate::site_model::title_from_slug(&slug),
            slug,
            raw_content,
        });
    }

    Ok(pages)
}

/// Stage 2: Transform the source model into a renderable site
///
/// Rejects duplicate slugs across articles and pages, parses every
/// markdown body, and orders articles by date, newest first.
pub fn transform(source: SourceModel) -> Result<Site, TransformError> {
    // "index" is reserved for the article listing
    let mut slugs: Vec<&str> = source.posts.iter().map(|p| p.slug.as_str()).collect();
    slugs.extend(source.pages.iter().map(|p| p.slug.as_str()));
    slugs.push("index");

    if let Some(dup) = slugs.iter().duplicates().next() {
        return Err(TransformError::DuplicateSlug((*dup).to_string()));
    }

    let mut posts = source.posts;
    posts.sort_by(|a, b| b.date.cmp(&a.date));

    // Parse article bodies (optionally in parallel)
    #[cfg(feature = "parallel")]
    let articles: Vec<Article> = posts
        .into_par_iter()
        .map(|post| Article {
            document: markdown::parse(&post.content),
            post,
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let articles: Vec<Article> = posts
        .into_iter()
        .map(|post| Article {
            document: markdown::parse(&post.content),
            post,
        })
        .collect();

    let pages: Vec<Page> = source
        .pages
        .into_iter()
        .map(|page| Page {
            document: markdown::parse(&page.raw_content),
            slug: page.slug,
            title: page.title,
        })
        .collect();

    Ok(Site {
        config: source.config,
        articles,
        pages,
    })
}

/// Stage 3: Write the site as HTML files
///
/// Produces `index.html`, one `blog/<slug>.html` per article, and one
/// `<slug>.html` per static page under the output directory.
pub fn export(site: &Site, out_dir: &Path) -> Result<(), ExportError> {
    let blog_dir = out_dir.join("blog");
    std::fs::create_dir_all(&blog_dir)
        .map_err(|e| ExportError::IoError(blog_dir.clone(), e))?;

    let index = html_exporter::index_page(&site.config, &site.articles, &site.pages);
    write_page(&out_dir.join("index.html"), &index)?;

    // Article pages render independently (optionally in parallel);
    // prev is the next-older article, next the next-newer one.
    #[cfg(feature = "parallel")]
    site.articles
        .par_iter()
        .enumerate()
        .try_for_each(|(i, article)| export_article(site, i, article, &blog_dir))?;

    #[cfg(not(feature = "parallel"))]
    site.articles
        .iter()
        .enumerate()
        .try_for_each(|(i, article)| export_article(site, i, article, &blog_dir))?;

    for page in &site.pages {
        let html = html_exporter::static_page(&site.config, page);
        write_page(&out_dir.join(format!("{}.html", page.slug)), &html)?;
    }

    Ok(())
}

/// Render and write one article page
fn export_article(
    site: &Site,
    index: usize,
    article: &Article,
    blog_dir: &Path,
) -> Result<(), ExportError> {
    let prev = site.articles.get(index + 1);
    let next = index.checked_sub(1).and_then(|i| site.articles.get(i));

    let html = html_exporter::article_page(&site.config, article, prev, next);
    write_page(&blog_dir.join(format!("{}.html", article.post.slug)), &html)
}

/// Write one HTML file
fn write_page(path: &Path, html: &str) -> Result<(), ExportError> {
    std::fs::write(path, html).map_err(|e| ExportError::IoError(path.to_path_buf(), e))
}

/// Parsing stage errors
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error reading {path}: {source}", path = .0.display(), source = .1)]
    IoError(PathBuf, #[source] std::io::Error),

    #[error("Invalid filename: {path}", path = .0.display())]
    InvalidFilename(PathBuf),

    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    #[error("Config error loading {path}: {source}", path = .0.display(), source = .1)]
    ConfigError(PathBuf, #[source] Box<SiteConfigError>),
}

/// Transformation stage errors
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Duplicate slug found: {0}")]
    DuplicateSlug(String),
}

/// Export stage errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error writing {path}: {source}", path = .0.display(), source = .1)]
    IoError(PathBuf, #[source] std::io::Error),
}
