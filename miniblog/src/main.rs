//! miniblog - personal site and blog CLI
//!
//! Command-line shell over the miniblog library: scaffolding, article
//! management, and the static site build.

use anyhow::{Context, Result};
use clap::Parser;
use miniblog::auth;
use miniblog::cli::{Cli, Commands};
use miniblog::html_exporter;
use miniblog::pipeline;
use miniblog::post::Post;
use miniblog::store::PostStore;
use miniblog::templates;
use miniblog::text;
use std::io::Read;
use std::path::PathBuf;

/// Main entry point for the miniblog CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force, title } => {
            handle_init_command(path, force, title)?;
        }

        Commands::New {
            root,
            title,
            category,
            excerpt,
            date,
            file,
            password,
        } => {
            handle_new_command(root, title, category, excerpt, date, file, password)?;
        }

        Commands::List { root } => {
            handle_list_command(root)?;
        }

        Commands::Delete {
            slug,
            root,
            password,
        } => {
            handle_delete_command(root, slug, password)?;
        }

        Commands::Build {
            input,
            output,
            verbose,
        } => {
            handle_build_command(input, output, verbose)?;
        }

        Commands::Preview { file } => {
            handle_preview_command(file)?;
        }
    }

    Ok(())
}

/// Handle the init command
fn handle_init_command(path: Option<PathBuf>, force: bool, title: Option<String>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| PathBuf::from("."));
    let title = title.unwrap_or_else(|| "Meu Site".to_string());

    println!("Initializing site: {}", title);
    println!("Target path: {}", target_path.display());

    let files_created = templates::scaffold(&target_path, &title, force)
        .with_context(|| format!("Failed to initialize {}", target_path.display()))?;

    println!("\n✓ Successfully created {} files", files_created);
    println!("\nNext steps:");
    println!("  1. Edit site.toml to configure your site");
    println!("  2. Add articles with 'miniblog new' and pages under pages/");
    println!("  3. Run 'miniblog build' to generate the HTML output");

    Ok(())
}

/// Handle the new command
fn handle_new_command(
    root: PathBuf,
    title: String,
    category: String,
    excerpt: Option<String>,
    date: Option<String>,
    file: Option<PathBuf>,
    password: Option<String>,
) -> Result<()> {
    auth::require_admin(password.as_deref()).context("Not authorized")?;

    let title = title.trim().to_string();
    if title.is_empty() {
        anyhow::bail!("Title must not be empty");
    }

    let category = category.trim().to_string();
    if category.is_empty() {
        anyhow::bail!("Category must not be empty");
    }

    let content = read_content(file.as_deref())?;
    let content = content.trim().to_string();
    if content.is_empty() {
        anyhow::bail!("Content must not be empty");
    }

    let slug = text::slugify(&title);
    if slug.is_empty() {
        anyhow::bail!("Title must contain at least one letter or digit");
    }

    let date = match date {
        Some(d) => {
            if !text::is_iso_date(&d) {
                anyhow::bail!("Invalid date '{}': expected YYYY-MM-DD", d);
            }
            d
        }
        None => text::today(),
    };

    let post = Post {
        excerpt: excerpt
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| text::excerpt(&content)),
        reading_time: text::reading_time(&content),
        slug: slug.clone(),
        title,
        date,
        category,
        content,
    };

    let store = PostStore::new(root.join(pipeline::POSTS_FILE));
    store
        .insert(post)
        .with_context(|| format!("Failed to save article '{}'", slug))?;

    println!("✓ Created article '{}'", slug);

    Ok(())
}

/// Read the article body from a file or stdin
fn read_content(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read article body from stdin")?;
            Ok(content)
        }
    }
}

/// Handle the list command
fn handle_list_command(root: PathBuf) -> Result<()> {
    let store = PostStore::new(root.join(pipeline::POSTS_FILE));
    let posts = store.all_sorted().context("Failed to load articles")?;

    if posts.is_empty() {
        println!("No articles yet. Create one with 'miniblog new'.");
        return Ok(());
    }

    println!("{} articles:\n", posts.len());
    for post in &posts {
        println!(
            "  {}  {:<40}  {:<14}  {:>7}  {}",
            post.date, post.slug, post.category, post.reading_time, post.title
        );
    }

    Ok(())
}

/// Handle the delete command
fn handle_delete_command(root: PathBuf, slug: String, password: Option<String>) -> Result<()> {
    auth::require_admin(password.as_deref()).context("Not authorized")?;

    let store = PostStore::new(root.join(pipeline::POSTS_FILE));
    store
        .delete(&slug)
        .with_context(|| format!("Failed to delete article '{}'", slug))?;

    println!("✓ Deleted article '{}'", slug);

    Ok(())
}

/// Handle the build command
fn handle_build_command(input: PathBuf, output: PathBuf, verbose: bool) -> Result<()> {
    // Initialize logging if verbose
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    println!("Building site...");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());

    // Stage 1: Load all sources
    println!("\n[Stage 1/3] Parsing sources...");
    let source_model = pipeline::parse_sources(&input)
        .with_context(|| format!("Failed to parse sources from {}", input.display()))?;

    println!(
        "✓ Loaded {} articles and {} pages",
        source_model.posts.len(),
        source_model.pages.len()
    );

    // Stage 2: Transform to site model
    println!("\n[Stage 2/3] Transforming to site model...");
    let site = pipeline::transform(source_model)
        .with_context(|| "Failed to transform sources into a site model")?;

    println!("✓ Parsed {} documents", site.articles.len() + site.pages.len());
    if verbose {
        println!("  - {} words", site.word_count());
    }

    // Stage 3: Export HTML
    println!("\n[Stage 3/3] Exporting HTML...");
    pipeline::export(&site, &output)
        .with_context(|| format!("Failed to export HTML to {}", output.display()))?;

    println!("✓ Successfully wrote: {}", output.display());
    println!("\n✓ Build completed successfully!");

    Ok(())
}

/// Handle the preview command
fn handle_preview_command(file: Option<PathBuf>) -> Result<()> {
    let content = read_content(file.as_deref())?;
    print!("{}", html_exporter::preview_fragment(&content));
    Ok(())
}
