#![allow(clippy::print_stderr, clippy::print_stdout)]

use aqua_assets::cli;
use aqua_assets::images::{ImageOptimizer, Progress};
use aqua_domain::images::SOURCE_EXTENSION;
use aqua_logger::Logger;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::warn;

#[derive(Debug, Parser)]
#[command(name = "image-optimizer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Re-encode source photos into 320/640/1024 px WebP variants")]
struct Cli {
    /// Directory holding the sources [default: <site root>/images]
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Extension of the source files, without the dot
    #[arg(long, default_value = SOURCE_EXTENSION)]
    extension: String,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let logger = cli::init_logging("image-optimizer").inspect_err(|e| eprintln!("{e:#}")).ok();
    let file_logging = logger.as_ref().is_some_and(Logger::has_file_sink);

    let optimizer = match args.dir {
        Some(dir) => ImageOptimizer::new(dir),
        None => match cli::site_root() {
            Ok(root) => ImageOptimizer::for_site(root),
            Err(e) => {
                eprintln!("✗ Error optimizing images: {e:#}");
                return ExitCode::FAILURE;
            },
        },
    }
    .with_extension(args.extension);

    let result = optimizer.run(|progress| {
        if file_logging && let Progress::Failed { source, error } = &progress {
            warn!(source = %source.display(), %error, "Image skipped");
        }
        print_progress(&progress);
    });

    match result {
        Ok(_) => {
            println!("Done");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("✗ Error optimizing images: {e}");
            ExitCode::FAILURE
        },
    }
}

fn print_progress(progress: &Progress<'_>) {
    match progress {
        Progress::NoSources { dir, extension } => {
            println!("No .{extension} files found in {}", dir.display());
        },
        Progress::Found { count, extension } => {
            println!("Found {count} {} files, optimizing...", extension.to_uppercase());
        },
        Progress::Saved(path) => println!("Saved {}", file_name(path)),
        Progress::Failed { source, error } => {
            println!("Failed to process {} - {error}", file_name(source));
        },
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
