use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seqpad", version)]
#[command(about = "Outline-aware pages, journals and templates for markdown graphs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Graph root directory (defaults to the platform data directory)
    #[arg(long, global = true, env = "SEQPAD_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the pages, journals and templates directories
    Init,

    /// Show the structure of an existing page
    #[command(alias = "ctx")]
    Context { title: String },

    /// Print a page's outline, re-indented with tabs
    Outline { title: String },

    /// List available templates
    #[command(alias = "ls-templates")]
    Templates,

    /// Show the structure of one template
    Template { name: String },

    /// Create or update a page, formatting content as an outline
    #[command(alias = "s")]
    Smart {
        title: String,

        /// Content to add ("-" or omitted reads stdin)
        content: Option<String>,

        /// Template to use when the page is new
        #[arg(short, long)]
        template: Option<String>,

        /// Append content verbatim instead of bulleting it
        #[arg(long)]
        raw: bool,

        /// Replace the page instead of appending
        #[arg(long)]
        overwrite: bool,
    },

    /// Write content to a page as-is (adds below a divider if it exists)
    #[command(alias = "n")]
    Create {
        title: String,

        /// Content of the page ("-" or omitted reads stdin)
        content: Option<String>,

        /// Replace the page instead of appending
        #[arg(long)]
        overwrite: bool,
    },

    /// Append to an existing page (creates it if missing)
    #[command(alias = "u")]
    Update {
        title: String,

        /// Content to add ("-" or omitted reads stdin)
        content: Option<String>,

        /// Replace the page content instead of appending
        #[arg(long)]
        replace: bool,
    },

    /// Add an entry to a journal page
    #[command(alias = "j")]
    Journal {
        /// Entry text ("-" or omitted reads stdin)
        content: Option<String>,

        /// Journal date in YYYY_MM_DD form (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (pages-dir, journals-dir, templates-dir, file-ext, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
