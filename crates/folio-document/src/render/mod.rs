// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Renderers: the cover page and the three block kinds. Each block renderer
// takes the cursor by value, draws onto the canvas, and returns the cursor
// for the next block.

pub mod cover;
pub mod image;
pub mod text;

pub use cover::{CoverPageRenderer, LogoStatus};

use folio_core::error::Result;
use folio_core::{Block, PageGeometry};

use crate::canvas::Canvas;
use crate::layout::{Font, FontSpec, PageCursor};

/// Font for text blocks.
pub const BODY_FONT: FontSpec = FontSpec::new(Font::Helvetica, 12.0);
/// Font for code blocks.
pub const CODE_FONT: FontSpec = FontSpec::new(Font::Courier, 10.0);

/// Renders content blocks against a fixed page geometry.
#[derive(Debug, Clone, Copy)]
pub struct BlockRenderer<'a> {
    geometry: &'a PageGeometry,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(geometry: &'a PageGeometry) -> Self {
        Self { geometry }
    }

    /// Render any block. Image blocks without a source leave the cursor where
    /// it is; callers that want to report such blocks check
    /// [`crate::assembler::skip_reason`] first.
    pub fn render(&self, canvas: &mut Canvas, cursor: PageCursor, block: &Block) -> Result<PageCursor> {
        match block {
            Block::Text { content } => self.text(canvas, cursor, content),
            Block::Code { content } => self.code(canvas, cursor, content),
            Block::Image { file: Some(file) } => self.image(canvas, cursor, file),
            Block::Image { file: None } => Ok(cursor),
        }
    }

    /// Draw a sequence of lines at the left margin, one line height apart,
    /// breaking pages as needed, then leave the block gap below.
    fn draw_lines<'l>(
        &self,
        canvas: &mut Canvas,
        mut cursor: PageCursor,
        font: FontSpec,
        lines: impl IntoIterator<Item = &'l str>,
    ) -> Result<PageCursor> {
        canvas.set_font(font);
        for line in lines {
            canvas.draw_text(self.geometry.margin, cursor.y(), line)?;
            let (next, page_break) = cursor.advance(self.geometry.line_height);
            if page_break {
                canvas.show_page();
                canvas.set_font(font);
            }
            cursor = next;
        }
        Ok(cursor.down(self.geometry.block_gap))
    }
}
