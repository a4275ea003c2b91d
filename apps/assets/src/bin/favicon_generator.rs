#![allow(clippy::print_stderr, clippy::print_stdout)]

use aqua_assets::cli;
use aqua_assets::favicon::{FaviconError, FaviconGenerator, Progress};
use aqua_domain::favicon::USAGE_HINT;
use aqua_logger::Logger;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;

/// The generator takes no arguments; everything is derived from the site root.
#[derive(Debug, Parser)]
#[command(name = "favicon-generator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert favicon.svg into the PNG favicon variants")]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let logger = cli::init_logging("favicon-generator").inspect_err(|e| eprintln!("{e:#}")).ok();
    let file_logging = logger.as_ref().is_some_and(Logger::has_file_sink);

    let root = match cli::site_root() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("✗ Error generating favicons: {e:#}");
            return ExitCode::FAILURE;
        },
    };

    match FaviconGenerator::for_site(root).run(print_progress) {
        Ok(_) => {
            println!("\n✓ All favicon variants generated successfully!");
            println!();
            for line in USAGE_HINT {
                println!("{line}");
            }
            ExitCode::SUCCESS
        },
        Err(FaviconError::SourceNotFound { path, .. }) => {
            eprintln!("✗ Source SVG not found: {}", path.display());
            ExitCode::FAILURE
        },
        Err(e) => {
            // The console already gets the message below; only the log files need it too.
            if file_logging {
                error!(error = %e, "Favicon generation failed");
            }
            eprintln!("✗ Error generating favicons: {e}");
            ExitCode::FAILURE
        },
    }
}

fn print_progress(progress: Progress<'_>) {
    match progress {
        Progress::Reading(path) => println!("Reading SVG from: {}", path.display()),
        Progress::Generating(size) => {
            println!("→ Generating {} ({}×{})...", size.filename, size.width, size.height);
        },
        Progress::Created(size) => println!("✓ Created {}", size.filename),
    }
}
