//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Render the strategic marketing section to static HTML.
#[derive(Parser, Debug, Clone)]
#[command(name = "mkpage")]
#[command(about = "Render the strategic marketing section to static HTML")]
#[command(version)]
pub struct Args {
    /// Output file (`-` writes to stdout) [default: marketing-section.html]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Render only the section fragment, without the <html> shell
    #[arg(long)]
    pub fragment: bool,

    /// Render the full page even when the config asks for a fragment
    #[arg(long, conflicts_with = "fragment")]
    pub no_fragment: bool,

    /// Document title
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Document language (the <html lang> attribute)
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Leave out the Tailwind CDN script
    #[arg(long, conflicts_with = "tailwind_cdn")]
    pub no_tailwind: bool,

    /// Tailwind CDN script URL
    #[arg(long, value_name = "URL")]
    pub tailwind_cdn: Option<String>,

    /// Config file [default: .mkpage/config.toml when present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the feature table as JSON and exit
    #[arg(long)]
    pub dump_features: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
