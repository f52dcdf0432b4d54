//! Embedded site scaffold
//!
//! This module contains the starter files compiled into the binary and
//! written out by the init command: a site configuration, a sample
//! static page, and a posts file with one sample article.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur while scaffolding a new site
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Target directory is not empty. Use --force to overwrite existing files")]
    NotEmpty,

    #[error("IO error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Scaffold files as (relative path, content) pairs
const SCAFFOLD_FILES: [(&str, &str); 3] = [
    ("site.toml", include_str!("templates/site.toml")),
    ("pages/sobre.md", include_str!("templates/sobre.md")),
    ("posts.json", include_str!("templates/posts.json")),
];

/// Create a new site skeleton in the target directory
///
/// Writes the embedded starter files, replacing the `{{TITLE}}`
/// placeholder with the given title. Refuses a non-empty target unless
/// `force` is set. Returns the number of files written.
pub fn scaffold(target: &Path, title: &str, force: bool) -> Result<usize, ScaffoldError> {
    if !target.exists() {
        std::fs::create_dir_all(target).map_err(|e| ScaffoldError::Io {
            path: target.display().to_string(),
            source: e,
        })?;
    }

    if !force {
        check_directory_empty(target)?;
    }

    let mut files_created = 0;
    for (rel_path, content) in SCAFFOLD_FILES {
        let full_path = target.join(rel_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ScaffoldError::Io {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let content = content.replace("{{TITLE}}", title);
        std::fs::write(&full_path, content).map_err(|e| ScaffoldError::Io {
            path: full_path.display().to_string(),
            source: e,
        })?;

        files_created += 1;
    }

    Ok(files_created)
}

/// Check if a directory is empty
fn check_directory_empty(path: &Path) -> Result<(), ScaffoldError> {
    if let Ok(entries) = std::fs::read_dir(path) {
        if entries.count() > 0 {
            return Err(ScaffoldError::NotEmpty);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold_writes_starter_files_with_title() {
        let dir = tempfile::tempdir().unwrap();
        let count = scaffold(dir.path(), "Meu Site", false).unwrap();
        assert_eq!(count, SCAFFOLD_FILES.len());

        let config = std::fs::read_to_string(dir.path().join("site.toml")).unwrap();
        assert!(config.contains("site_title = \"Meu Site\""));
        assert!(dir.path().join("pages/sobre.md").exists());
        assert!(dir.path().join("posts.json").exists());
    }

    #[test]
    fn test_scaffold_refuses_non_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("existing.txt"), "x").unwrap();

        let err = scaffold(dir.path(), "T", false).unwrap_err();
        assert!(matches!(err, ScaffoldError::NotEmpty));

        // And proceeds with force
        assert!(scaffold(dir.path(), "T", true).is_ok());
    }

    #[test]
    fn test_scaffolded_posts_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path(), "T", false).unwrap();

        let store = crate::store::PostStore::new(dir.path().join("posts.json"));
        let posts = store.load().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "bem-vindo");
    }

    #[test]
    fn test_scaffolded_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path(), "Titulo Escolhido", false).unwrap();

        let config = crate::site_config::SiteConfig::load(dir.path().join("site.toml")).unwrap();
        assert_eq!(config.site_title, "Titulo Escolhido");
    }
}
