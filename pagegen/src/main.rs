//! mkpage - render the strategic marketing section to static HTML.
//!
//! ```bash
//! mkpage                          # ./marketing-section.html
//! mkpage -o public/index.html     # nested paths are created
//! mkpage --fragment -o -          # section only, to stdout
//! mkpage --dump-features          # feature table as JSON
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use mkpage::{Args, PageGenConfig, Settings};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[mkpage] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // stdout may carry the page itself, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("mkpage v{}", env!("CARGO_PKG_VERSION"));

    if args.dump_features {
        println!("{}", mkpage::features_json()?);
        return Ok(());
    }

    let config = PageGenConfig::load(args.config.as_deref()).context("loading configuration")?;
    let settings = Settings::resolve(&args, &config);
    debug!(?settings, "resolved settings");

    let html = mkpage::render(&settings);
    mkpage::write_output(&settings.output, &html).context("writing output")?;

    Ok(())
}
