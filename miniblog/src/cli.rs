//! Command-line interface definitions for miniblog

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the miniblog application
#[derive(Parser)]
#[command(name = "miniblog")]
#[command(version)]
#[command(about = "Personal site and blog generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for miniblog
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new site skeleton
    Init {
        /// Directory to initialize (defaults to current directory)
        path: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Site title
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Create a new article in the store
    New {
        /// Site directory (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        root: PathBuf,

        /// Article title
        #[arg(short, long)]
        title: String,

        /// Category label
        #[arg(short, long)]
        category: String,

        /// Listing excerpt (derived from the body when omitted)
        #[arg(short, long)]
        excerpt: Option<String>,

        /// Publication date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// File with the article body (stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Admin password
        #[arg(short, long)]
        password: Option<String>,
    },

    /// List stored articles, newest first
    List {
        /// Site directory (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        root: PathBuf,
    },

    /// Delete an article by slug
    Delete {
        /// Slug of the article to delete
        slug: String,

        /// Site directory (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        root: PathBuf,

        /// Admin password
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Build the site to static HTML
    Build {
        /// Site directory (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "public")]
        output: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render one markdown file to an HTML fragment on stdout
    Preview {
        /// File to render (stdin when omitted)
        file: Option<PathBuf>,
    },
}
