// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document assembler: cover page, then every block in order, each inside its
// own failure boundary, then PDF serialisation.

use std::io::Write;
use std::path::Path;

use folio_core::error::Result;
use folio_core::{AssignmentManifest, Block, CoverInfo, PageGeometry};
use tracing::{debug, info, instrument, warn};

use crate::canvas::{Canvas, LaidOutDocument};
use crate::layout::PageCursor;
use crate::pdf::PdfWriter;
use crate::render::{BlockRenderer, CoverPageRenderer, LogoStatus};

/// Why a block contributed nothing to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Text or code block with empty content.
    MissingContent,
    /// Image block without a source.
    MissingImage,
    /// The renderer failed; the message is the error's display text.
    Failed(String),
}

/// A block left out of the document, by position in the input list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    pub index: usize,
    pub reason: SkipReason,
}

/// What happened while laying out one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReport {
    pub logo: LogoStatus,
    pub skipped: Vec<SkippedBlock>,
}

/// A finished PDF and its report.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub report: AssemblyReport,
}

impl GeneratedDocument {
    /// Write the PDF to any sink. Failure here is fatal for the caller.
    pub fn write_to<W: Write>(&self, mut sink: W) -> Result<()> {
        sink.write_all(&self.bytes)?;
        sink.flush()?;
        Ok(())
    }

    /// Write the PDF to a file, replacing any existing file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), &self.bytes)?;
        info!("Wrote PDF to {}", path.as_ref().display());
        Ok(())
    }
}

/// Whether `block` should be skipped without rendering.
pub fn skip_reason(block: &Block) -> Option<SkipReason> {
    match block {
        Block::Text { content } | Block::Code { content } if content.is_empty() => {
            Some(SkipReason::MissingContent)
        }
        Block::Image { file: None } => Some(SkipReason::MissingImage),
        _ => None,
    }
}

/// Builds complete documents from cover info and blocks.
///
/// The assembler holds only configuration; all per-document state lives in
/// a single `generate` call.
pub struct DocumentAssembler {
    geometry: PageGeometry,
    /// Title metadata; defaults to the cover's assignment title.
    title: Option<String>,
}

impl DocumentAssembler {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            title: None,
        }
    }

    /// Assembler with the default A4 geometry.
    pub fn a4() -> Self {
        Self::new(PageGeometry::default())
    }

    /// Set a title for the PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Lay out the cover page and every block without serialising.
    #[instrument(skip_all, fields(blocks = blocks.len()))]
    pub fn layout(&self, cover: &CoverInfo, blocks: &[Block]) -> Result<(LaidOutDocument, AssemblyReport)> {
        self.geometry.validate()?;

        let mut canvas = Canvas::new(&self.geometry);
        let logo = CoverPageRenderer::new(&self.geometry).render(&mut canvas, cover)?;

        let renderer = BlockRenderer::new(&self.geometry);
        let mut cursor = PageCursor::at_top(&self.geometry);
        let mut skipped = Vec::new();

        for (index, block) in blocks.iter().enumerate() {
            if let Some(reason) = skip_reason(block) {
                debug!(index, kind = block.kind(), ?reason, "Skipping block");
                skipped.push(SkippedBlock { index, reason });
                continue;
            }

            let checkpoint = canvas.checkpoint();
            match renderer.render(&mut canvas, cursor, block) {
                Ok(next) => cursor = next,
                Err(err) => {
                    warn!(index, kind = block.kind(), error = %err, "Skipping block due to error");
                    canvas.rollback(checkpoint);
                    skipped.push(SkippedBlock {
                        index,
                        reason: SkipReason::Failed(err.to_string()),
                    });
                }
            }
        }

        let document = canvas.finish();
        info!(
            pages = document.page_count(),
            skipped = skipped.len(),
            "Layout complete"
        );
        Ok((document, AssemblyReport { logo, skipped }))
    }

    /// Lay out and serialise a document.
    pub fn generate(&self, cover: &CoverInfo, blocks: &[Block]) -> Result<GeneratedDocument> {
        let (document, report) = self.layout(cover, blocks)?;
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| cover.title_or_placeholder().to_string());
        let bytes = PdfWriter::new(title).render(&document)?;
        Ok(GeneratedDocument {
            bytes,
            page_count: document.page_count(),
            report,
        })
    }

    /// Generate from a manifest.
    pub fn generate_manifest(&self, manifest: &AssignmentManifest) -> Result<GeneratedDocument> {
        self.generate(&manifest.cover, &manifest.blocks)
    }
}
