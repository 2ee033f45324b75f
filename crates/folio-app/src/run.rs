// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Manifest runner: the glue between the command line and the assembler.

use std::path::Path;

use folio_core::AssignmentManifest;
use folio_core::error::Result;
use folio_document::DocumentAssembler;

/// Submission date format used when the manifest leaves it out.
const DATE_FORMAT: &str = "%d-%m-%Y";

/// What the caller reports after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub page_count: usize,
    pub skipped: usize,
}

/// Load `manifest_path`, generate the PDF, and write it to `output`.
pub fn run(manifest_path: &Path, output: &Path) -> Result<RunSummary> {
    let mut manifest = AssignmentManifest::load(manifest_path)?;
    fill_defaults(&mut manifest);

    if manifest.blocks.is_empty() {
        tracing::warn!("manifest has no content blocks; the PDF will only contain the cover page");
    }

    let generated = DocumentAssembler::a4().generate_manifest(&manifest)?;
    generated.write_to_file(output)?;

    for skipped in &generated.report.skipped {
        tracing::warn!(index = skipped.index, reason = ?skipped.reason, "block left out");
    }

    Ok(RunSummary {
        page_count: generated.page_count,
        skipped: generated.report.skipped.len(),
    })
}

/// Default the submission date to today.
fn fill_defaults(manifest: &mut AssignmentManifest) {
    if manifest.cover.submission_date.is_none() {
        let today = chrono::Local::now().format(DATE_FORMAT).to_string();
        manifest.cover.submission_date = Some(today);
    }
}
