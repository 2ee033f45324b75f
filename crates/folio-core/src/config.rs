// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page geometry. All lengths are PDF points (1/72 inch).

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::types::PaperSize;

/// Points per centimetre.
pub const PT_PER_CM: f32 = 72.0 / 2.54;

/// Convert centimetres to points.
pub const fn cm(value: f32) -> f32 {
    value * PT_PER_CM
}

/// Convert millimetres to points.
pub const fn mm(value: f32) -> f32 {
    value * PT_PER_CM / 10.0
}

/// Fixed layout constants for one document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width in points.
    pub width: f32,
    /// Page height in points.
    pub height: f32,
    /// Inset applied on all four sides.
    pub margin: f32,
    /// Vertical advance per text or code line.
    pub line_height: f32,
    /// Extra space left below every block.
    pub block_gap: f32,
    /// Hard wrap threshold for code lines, in characters.
    pub code_wrap_chars: usize,
    /// Rendered width of the cover page logo.
    pub logo_width: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::for_paper(PaperSize::A4)
    }
}

impl PageGeometry {
    /// Default constants on the given paper size.
    pub fn for_paper(paper_size: PaperSize) -> Self {
        let (w_mm, h_mm) = paper_size.dimensions_mm();
        Self {
            width: mm(w_mm as f32),
            height: mm(h_mm as f32),
            margin: cm(2.0),
            line_height: 14.0,
            block_gap: 14.0,
            code_wrap_chars: 90,
            logo_width: cm(6.0),
        }
    }

    /// Reject geometry that leaves no printable area.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("width", self.width),
            ("height", self.height),
            ("margin", self.margin),
            ("line_height", self.line_height),
            ("block_gap", self.block_gap),
            ("logo_width", self.logo_width),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(FolioError::InvalidGeometry(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.margin >= self.width / 2.0 || self.margin >= self.height / 2.0 {
            return Err(FolioError::InvalidGeometry(format!(
                "margin {} leaves no printable area on a {}x{} page",
                self.margin, self.width, self.height
            )));
        }
        if self.code_wrap_chars == 0 {
            return Err(FolioError::InvalidGeometry(
                "code_wrap_chars must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Y coordinate of the first line on a fresh page.
    pub fn top(&self) -> f32 {
        self.height - self.margin
    }

    /// Lowest y coordinate content may reach.
    pub fn bottom(&self) -> f32 {
        self.margin
    }

    /// Printable width between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}
