//! # mkpage
//!
//! Writes the strategic marketing section to disk as a standalone page or
//! as an embeddable fragment.
//!
//! Settings come from three layers, strongest first: command-line flags,
//! the config file, built-in defaults. See [`Settings::resolve`].

pub mod args;
pub mod config;
pub mod error;

use std::io::Write;
use std::path::{Path, PathBuf};

use marketing_leptos::types::FEATURES;
use marketing_leptos::{PageOptions, render_page, render_section};
use tracing::info;

pub use args::Args;
pub use config::{DEFAULT_CONFIG_PATH, PageGenConfig};
pub use error::{PageGenError, Result};

/// Output path used when neither flags nor config name one.
pub const DEFAULT_OUTPUT: &str = "marketing-section.html";

/// Where the rendered HTML goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Standard output (`-o -`)
    Stdout,
    /// A file, created or truncated
    File(PathBuf),
}

impl Output {
    fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Output::Stdout
        } else {
            Output::File(path)
        }
    }
}

/// Fully resolved generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output: Output,
    /// Skip the `<html>` shell
    pub fragment: bool,
    pub page: PageOptions,
}

impl Settings {
    /// Merge flags over config over defaults.
    pub fn resolve(args: &Args, config: &PageGenConfig) -> Self {
        let defaults = PageOptions::default();

        let output = args
            .output
            .clone()
            .or_else(|| config.output.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let tailwind_cdn = if args.no_tailwind {
            None
        } else if let Some(url) = &args.tailwind_cdn {
            Some(url.clone())
        } else if config.page.tailwind == Some(false) {
            None
        } else {
            config.page.tailwind_cdn.clone().or(defaults.tailwind_cdn)
        };

        Self {
            output: Output::from_path(output),
            fragment: if args.no_fragment {
                false
            } else {
                args.fragment || config.output.fragment.unwrap_or(false)
            },
            page: PageOptions {
                title: args
                    .title
                    .clone()
                    .or_else(|| config.page.title.clone())
                    .unwrap_or(defaults.title),
                lang: args
                    .lang
                    .clone()
                    .or_else(|| config.page.lang.clone())
                    .unwrap_or(defaults.lang),
                tailwind_cdn,
            },
        }
    }
}

/// Render the page or fragment described by `settings`.
pub fn render(settings: &Settings) -> String {
    let html = if settings.fragment {
        render_section()
    } else {
        render_page(&settings.page)
    };
    info!(
        bytes = html.len(),
        fragment = settings.fragment,
        "rendered marketing section"
    );
    html
}

/// Write `html` to `output`, newline-terminated.
///
/// Both destinations receive the same bytes.
pub fn write_output(output: &Output, html: &str) -> Result<()> {
    let contents = terminated(html);
    match output {
        Output::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| PageGenError::Write {
                    path: PathBuf::from("-"),
                    source,
                })
        }
        Output::File(path) => {
            create_parent(path)?;
            std::fs::write(path, contents.as_bytes()).map_err(|source| PageGenError::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "page written");
            Ok(())
        }
    }
}

fn terminated(html: &str) -> String {
    if html.ends_with('\n') {
        html.to_owned()
    } else {
        format!("{}\n", html)
    }
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| PageGenError::Write {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// The feature table as pretty-printed JSON.
pub fn features_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&FEATURES)?)
}
