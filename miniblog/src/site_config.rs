//! Site configuration from site.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration from site.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, shown in page headers and the HTML title tag
    pub site_title: String,

    /// Optional one-line description for the index page
    pub site_description: Option<String>,

    /// Optional base URL used verbatim in the page footer
    pub base_url: Option<String>,

    /// Site author information
    pub author: Person,
}

/// Person information (site author)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Person's full name
    pub name: String,

    /// Person's email address
    pub email: String,
}

impl SiteConfig {
    /// Load configuration from a site.toml file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SiteConfigError> {
        let content = fs::read_to_string(&path).map_err(SiteConfigError::IoError)?;

        let config: SiteConfig = toml::from_str(&content).map_err(SiteConfigError::ParseError)?;

        Ok(config)
    }

    /// Save configuration to a site.toml file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SiteConfigError> {
        let content = toml::to_string_pretty(self).map_err(SiteConfigError::SerializeError)?;

        fs::write(&path, content).map_err(SiteConfigError::IoError)?;

        Ok(())
    }
}

/// Errors that can occur when loading or saving site configuration
#[derive(Debug)]
pub enum SiteConfigError {
    /// IO error when reading or writing file
    IoError(std::io::Error),

    /// Error parsing TOML
    ParseError(toml::de::Error),

    /// Error serializing to TOML
    SerializeError(toml::ser::Error),
}

impl std::fmt::Display for SiteConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteConfigError::IoError(e) => write!(f, "IO error: {}", e),
            SiteConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
            SiteConfigError::SerializeError(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for SiteConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_config_roundtrip() {
        let config = SiteConfig {
            site_title: "fabriciomagoga.com.br".to_string(),
            site_description: Some("Notas sobre engenharia de software".to_string()),
            base_url: Some("https://fabriciomagoga.com.br".to_string()),
            author: Person {
                name: "Fabricio Magoga".to_string(),
                email: "contato@example.com".to_string(),
            },
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: SiteConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.site_title, "fabriciomagoga.com.br");
        assert_eq!(parsed.author.name, "Fabricio Magoga");
        assert_eq!(
            parsed.site_description.as_deref(),
            Some("Notas sobre engenharia de software")
        );
    }

    #[test]
    fn test_parse_example_toml() {
        let toml_content = r#"
site_title = "Meu Site"
site_description = "Resumo e blog"

[author]
name = "Alice Souza"
email = "alice@example.com"
"#;

        let config: SiteConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.site_title, "Meu Site");
        assert!(config.base_url.is_none());
        assert_eq!(config.author.email, "alice@example.com");
    }
}
