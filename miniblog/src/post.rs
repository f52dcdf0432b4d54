//! Article record
//!
//! The stored shape of one blog article. Field names are camelCase on
//! disk (`readingTime`) to match the data file layout.

use serde::{Deserialize, Serialize};

/// One blog article as stored in the posts file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// URL-safe identifier, unique across the collection
    pub slug: String,

    /// Article title
    pub title: String,

    /// Publication date, ISO `YYYY-MM-DD`
    pub date: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Single category label
    pub category: String,

    /// Estimated reading time, e.g. `"5 min"`
    pub reading_time: String,

    /// Raw markdown-subset body
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_serializes_with_camel_case_field_names() {
        let post = Post {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            date: "2025-12-15".to_string(),
            excerpt: "greeting...".to_string(),
            category: "Geral".to_string(),
            reading_time: "1 min".to_string(),
            content: "# Hello".to_string(),
        };

        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"readingTime\":\"1 min\""));
        assert!(!json.contains("reading_time"));
    }

    #[test]
    fn test_post_roundtrip() {
        let json = r##"{
            "slug": "api-rest-boas-praticas",
            "title": "API REST: Boas Praticas",
            "date": "2025-09-18",
            "excerpt": "Um guia pratico...",
            "category": "Backend",
            "readingTime": "10 min",
            "content": "# API REST\n\ncorpo"
        }"##;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.slug, "api-rest-boas-praticas");
        assert_eq!(post.reading_time, "10 min");

        let back = serde_json::to_string(&post).unwrap();
        let again: Post = serde_json::from_str(&back).unwrap();
        assert_eq!(post, again);
    }
}
