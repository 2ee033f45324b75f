// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// folio-document: Pagination and layout engine for Folio.
//
// Lays out a cover page and an ordered list of text, code, and image blocks
// onto fixed-size pages, then serialises the result as PDF.

pub mod assembler;
pub mod canvas;
pub mod image;
pub mod layout;
pub mod pdf;
pub mod render;

// Re-export the primary structs so callers can use `folio_document::DocumentAssembler` etc.
pub use assembler::{AssemblyReport, DocumentAssembler, GeneratedDocument, SkipReason, SkippedBlock};
pub use canvas::{Canvas, DrawOp, LaidOutDocument};
pub use image::RasterImage;
pub use layout::PageCursor;
pub use pdf::PdfWriter;
pub use render::{BlockRenderer, CoverPageRenderer, LogoStatus};
