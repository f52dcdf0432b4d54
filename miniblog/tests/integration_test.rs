//! End-to-end tests over a scaffolded site in a temporary directory

use miniblog::pipeline;
use miniblog::post::Post;
use miniblog::store::PostStore;
use miniblog::templates;
use std::path::Path;

/// One password value shared by every env-touching test, so parallel
/// test threads never disagree about the variable's content
const TEST_PASSWORD: &str = "senha-de-teste";

fn build_site(root: &Path, out: &Path) {
    let model = pipeline::parse_sources(root).expect("parse_sources should succeed");
    let site = pipeline::transform(model).expect("transform should succeed");
    pipeline::export(&site, out).expect("export should succeed");
}

fn article(slug: &str, title: &str, date: &str, content: &str) -> Post {
    Post {
        slug: slug.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        excerpt: "resumo...".to_string(),
        category: "Geral".to_string(),
        reading_time: "1 min".to_string(),
        content: content.to_string(),
    }
}

#[test]
fn test_scaffold_then_build_renders_site() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("public");

    templates::scaffold(dir.path(), "Site de Teste", false).unwrap();
    build_site(dir.path(), &out);

    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("Site de Teste"));
    // The scaffolded sample article is listed and linked
    assert!(index.contains("blog/bem-vindo.html"));
    // The scaffolded static page is rendered
    assert!(out.join("sobre.html").exists());

    let post_page = std::fs::read_to_string(out.join("blog/bem-vindo.html")).unwrap();
    assert!(post_page.contains("Bem-vindo"));
    // The sample body has a fenced shell block
    assert!(post_page.contains("language-sh"));
}

#[test]
fn test_new_article_flows_into_build_with_navigation() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("public");

    templates::scaffold(dir.path(), "Nav", false).unwrap();
    let store = PostStore::new(dir.path().join("posts.json"));
    store
        .insert(article(
            "segundo",
            "Segundo Artigo",
            "2025-06-01",
            "# Segundo\n\nCorpo com **negrito**.",
        ))
        .unwrap();

    build_site(dir.path(), &out);

    // Newest first: "segundo" (2025-06-01) precedes "bem-vindo" (2025-01-01)
    let newest = std::fs::read_to_string(out.join("blog/segundo.html")).unwrap();
    assert!(newest.contains("<strong>negrito</strong>"));
    assert!(newest.contains("Anterior"));
    assert!(newest.contains("bem-vindo.html"));

    let oldest = std::fs::read_to_string(out.join("blog/bem-vindo.html")).unwrap();
    assert!(oldest.contains("Proximo"));
    assert!(oldest.contains("segundo.html"));
}

#[test]
fn test_duplicate_slug_fails_the_transform_stage() {
    let dir = tempfile::tempdir().unwrap();

    templates::scaffold(dir.path(), "Dup", false).unwrap();
    // A page slug colliding with the sample article slug
    std::fs::write(dir.path().join("pages/bem-vindo.md"), "# Conflito").unwrap();

    let model = pipeline::parse_sources(dir.path()).unwrap();
    assert!(pipeline::transform(model).is_err());
}

#[test]
fn test_admin_gate() {
    std::env::set_var(miniblog::auth::ADMIN_PASSWORD_VAR, TEST_PASSWORD);

    assert!(miniblog::auth::require_admin(Some(TEST_PASSWORD)).is_ok());
    assert!(miniblog::auth::require_admin(Some("errada")).is_err());
    assert!(miniblog::auth::require_admin(None).is_err());
}
