// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Folio: Assignment PDF generator
//
// Entry point. Initialises logging, reads an assignment manifest, and writes
// the generated PDF.

mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Generate an assignment PDF (cover page plus content blocks) from a JSON manifest.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    /// Manifest describing the cover page and the ordered content blocks
    #[arg(value_name = "MANIFEST")]
    manifest: PathBuf,

    /// Where to write the PDF
    #[arg(short, long, value_name = "FILE", default_value = "assignment.pdf")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!(manifest = %cli.manifest.display(), "Folio starting");

    match run::run(&cli.manifest, &cli.output) {
        Ok(summary) => {
            println!(
                "Wrote {} ({} pages, {} blocks skipped)",
                cli.output.display(),
                summary.page_count,
                summary.skipped
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "generation failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
