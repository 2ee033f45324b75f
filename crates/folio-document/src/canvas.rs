// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Canvas: records draw operations page by page, independent of the PDF
// backend. Renderers draw onto the canvas; `PdfWriter` serialises the result.
//
// The active font belongs to the current page and is forgotten at every page
// break, so renderers must set it again after `show_page`.

use folio_core::PageGeometry;
use folio_core::error::{FolioError, Result};

use crate::image::RasterImage;
use crate::layout::FontSpec;

/// Index of an image in [`LaidOutDocument::images`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

/// One positioned drawing instruction. Coordinates are PDF points with the
/// origin at the bottom-left corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A single line of text with its baseline starting at (`x`, `y`).
    Text {
        x: f32,
        y: f32,
        font: FontSpec,
        text: String,
    },
    /// An image whose bottom-left corner sits at (`x`, `y`).
    Image {
        image: ImageId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// A finished page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text of every text op on the page, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                DrawOp::Image { .. } => None,
            })
            .collect()
    }

    pub fn is_blank(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Fully laid-out document, ready for serialisation.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    /// Page width in points.
    pub width: f32,
    /// Page height in points.
    pub height: f32,
    pub pages: Vec<Page>,
    pub images: Vec<RasterImage>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Saved canvas state for undoing a failed block.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    pages: usize,
    ops: usize,
    images: usize,
    active_font: Option<FontSpec>,
    touched: bool,
}

/// Mutable drawing surface for one document generation.
#[derive(Debug)]
pub struct Canvas {
    width: f32,
    height: f32,
    pages: Vec<Page>,
    current: Vec<DrawOp>,
    images: Vec<RasterImage>,
    active_font: Option<FontSpec>,
    /// Set once anything (font or op) has been put on the current page.
    touched: bool,
}

impl Canvas {
    pub fn new(geometry: &PageGeometry) -> Self {
        Self {
            width: geometry.width,
            height: geometry.height,
            pages: Vec::new(),
            current: Vec::new(),
            images: Vec::new(),
            active_font: None,
            touched: false,
        }
    }

    // -- State ----------------------------------------------------------------

    /// Select the font for subsequent text on the current page.
    pub fn set_font(&mut self, font: FontSpec) {
        self.active_font = Some(font);
        self.touched = true;
    }

    pub fn active_font(&self) -> Option<FontSpec> {
        self.active_font
    }

    /// Number of pages finished so far.
    pub fn finished_pages(&self) -> usize {
        self.pages.len()
    }

    /// Operations drawn on the current, unfinished page.
    pub fn current_ops(&self) -> &[DrawOp] {
        &self.current
    }

    // -- Drawing --------------------------------------------------------------

    /// Draw one line of text in the active font.
    pub fn draw_text(&mut self, x: f32, y: f32, text: impl Into<String>) -> Result<()> {
        let font = self.active_font.ok_or_else(|| {
            FolioError::Layout("text drawn before a font was set on this page".into())
        })?;
        self.current.push(DrawOp::Text {
            x,
            y,
            font,
            text: text.into(),
        });
        self.touched = true;
        Ok(())
    }

    /// Draw one line of text horizontally centred on `center_x`.
    pub fn draw_centered_text(&mut self, center_x: f32, y: f32, text: &str) -> Result<()> {
        let font = self.active_font.ok_or_else(|| {
            FolioError::Layout("text drawn before a font was set on this page".into())
        })?;
        let x = center_x - font.text_width(text) / 2.0;
        self.draw_text(x, y, text)
    }

    /// Place an image with its bottom-left corner at (`x`, `y`).
    pub fn draw_image(
        &mut self,
        image: RasterImage,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> ImageId {
        let id = ImageId(self.images.len());
        self.images.push(image);
        self.current.push(DrawOp::Image {
            image: id,
            x,
            y,
            width,
            height,
        });
        self.touched = true;
        id
    }

    /// Finish the current page and start a blank one with no active font.
    pub fn show_page(&mut self) {
        let ops = std::mem::take(&mut self.current);
        self.pages.push(Page { ops });
        self.active_font = None;
        self.touched = false;
    }

    // -- Failure isolation ----------------------------------------------------

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pages: self.pages.len(),
            ops: self.current.len(),
            images: self.images.len(),
            active_font: self.active_font,
            touched: self.touched,
        }
    }

    /// Discard everything drawn since `checkpoint`, including page breaks.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        if self.pages.len() > checkpoint.pages {
            // The page that was current at the checkpoint was finished since.
            if let Some(page) = self.pages.drain(checkpoint.pages..).next() {
                self.current = page.ops;
            }
        }
        self.current.truncate(checkpoint.ops);
        self.images.truncate(checkpoint.images);
        self.active_font = checkpoint.active_font;
        self.touched = checkpoint.touched;
    }

    // -- Output ---------------------------------------------------------------

    /// Finish the document. The last page is kept only if something was put
    /// on it, so a document ending right after a page break keeps a blank
    /// trailing page only when a renderer already reasserted its font there.
    pub fn finish(mut self) -> LaidOutDocument {
        if self.touched {
            self.show_page();
        }
        LaidOutDocument {
            width: self.width,
            height: self.height,
            pages: self.pages,
            images: self.images,
        }
    }
}
