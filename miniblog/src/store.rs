//! File-backed article store
//!
//! Articles live in a single JSON file as an ordered array, newest
//! first. The store is read fully on every operation and written back
//! whole; there is no partial update.

use crate::post::Post;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or mutating the article store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error accessing {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}", path = .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("An article with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("No article found with slug '{0}'")]
    NotFound(String),
}

/// Handle to the JSON-backed article collection
#[derive(Debug, Clone)]
pub struct PostStore {
    /// Path of the posts file
    path: PathBuf,
}

impl PostStore {
    /// Create a store handle for the given posts file
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying posts file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all articles in stored order
    ///
    /// A missing file is an empty collection, not an error.
    pub fn load(&self) -> Result<Vec<Post>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        serde_json::from_str(&data).map_err(|e| StoreError::Json {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Write the whole collection back, pretty-printed
    pub fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let data = serde_json::to_string_pretty(posts).map_err(|e| StoreError::Json {
            path: self.path.clone(),
            source: e,
        })?;

        fs::write(&self.path, data).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Insert a new article at the front of the collection
    ///
    /// Fails without writing when the slug is already taken.
    pub fn insert(&self, post: Post) -> Result<(), StoreError> {
        let mut posts = self.load()?;

        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(StoreError::DuplicateSlug(post.slug));
        }

        posts.insert(0, post);
        self.save(&posts)
    }

    /// Delete the article with the given slug
    pub fn delete(&self, slug: &str) -> Result<(), StoreError> {
        let posts = self.load()?;
        let before = posts.len();
        let remaining: Vec<Post> = posts.into_iter().filter(|p| p.slug != slug).collect();

        if remaining.len() == before {
            return Err(StoreError::NotFound(slug.to_string()));
        }

        self.save(&remaining)
    }

    /// Find one article by slug
    pub fn find(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        Ok(self.load()?.into_iter().find(|p| p.slug == slug))
    }

    /// All articles sorted by date, newest first
    ///
    /// Equal dates keep stored order, so same-day articles stay in
    /// insertion order (newest prepended first).
    pub fn all_sorted(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.load()?;
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(slug: &str, date: &str) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: date.to_string(),
            excerpt: "...".to_string(),
            category: "Geral".to_string(),
            reading_time: "1 min".to_string(),
            content: "# corpo".to_string(),
        }
    }

    fn temp_store() -> (tempfile::TempDir, PostStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PostStore::new(dir.path().join("data").join("posts.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_insert_prepends_and_roundtrips() {
        let (_dir, store) = temp_store();
        store.insert(sample("older", "2025-01-01")).unwrap();
        store.insert(sample("newer", "2025-02-01")).unwrap();

        let posts = store.load().unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newer", "older"]);
    }

    #[test]
    fn test_insert_rejects_duplicate_slug() {
        let (_dir, store) = temp_store();
        store.insert(sample("unico", "2025-01-01")).unwrap();

        let err = store.insert(sample("unico", "2025-02-01")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSlug(ref s) if s == "unico"));

        // The failed insert must not have touched the file
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_removes_only_the_named_slug() {
        let (_dir, store) = temp_store();
        store.insert(sample("a", "2025-01-01")).unwrap();
        store.insert(sample("b", "2025-01-02")).unwrap();

        store.delete("a").unwrap();
        let posts = store.load().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "b");
    }

    #[test]
    fn test_delete_unknown_slug_fails() {
        let (_dir, store) = temp_store();
        let err = store.delete("nope").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_all_sorted_by_date_descending() {
        let (_dir, store) = temp_store();
        store.insert(sample("mid", "2025-06-01")).unwrap();
        store.insert(sample("old", "2025-01-01")).unwrap();
        store.insert(sample("new", "2025-12-01")).unwrap();

        let sorted = store.all_sorted().unwrap();
        let slugs: Vec<&str> = sorted.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_find_by_slug() {
        let (_dir, store) = temp_store();
        store.insert(sample("alvo", "2025-01-01")).unwrap();

        assert!(store.find("alvo").unwrap().is_some());
        assert!(store.find("outro").unwrap().is_none());
    }

    #[test]
    fn test_stored_file_uses_camel_case() {
        let (_dir, store) = temp_store();
        store.insert(sample("x", "2025-01-01")).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"readingTime\""));
    }
}
