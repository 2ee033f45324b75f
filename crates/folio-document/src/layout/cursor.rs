// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page cursor: the vertical write position threaded through every renderer.
//
// PDF coordinates grow upwards, so content moves the cursor down from
// `top` (height - margin) towards `bottom` (margin).

use folio_core::PageGeometry;

/// Slack allowed below the bottom margin before a unit counts as overflowing.
/// Keeps an exact fit from breaking on float rounding.
pub const BREAK_TOLERANCE: f32 = 1e-3;

/// Current write position on the active page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    y: f32,
    top: f32,
    bottom: f32,
}

impl PageCursor {
    /// Cursor at the first line of a fresh page.
    pub fn at_top(geometry: &PageGeometry) -> Self {
        Self::at(geometry, geometry.top())
    }

    /// Cursor at an arbitrary y on the current page.
    pub fn at(geometry: &PageGeometry, y: f32) -> Self {
        Self {
            y,
            top: geometry.top(),
            bottom: geometry.bottom(),
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Vertical space left between the cursor and the bottom margin.
    pub fn available_height(&self) -> f32 {
        self.y - self.bottom
    }

    /// Whether moving down by `delta` stays on or above the bottom margin.
    pub fn fits(&self, delta: f32) -> bool {
        self.y - delta >= self.bottom - BREAK_TOLERANCE
    }

    /// Move down by `delta` after a unit has been drawn.
    ///
    /// Returns the new cursor and whether a page break is due. On a break the
    /// cursor is already reset to the top of the next page; the caller must
    /// finish the page and reassert its font.
    pub fn advance(self, delta: f32) -> (Self, bool) {
        if self.fits(delta) {
            (self.down(delta), false)
        } else {
            (self.reset(), true)
        }
    }

    /// Move down without a break check.
    pub fn down(self, delta: f32) -> Self {
        Self {
            y: self.y - delta,
            ..self
        }
    }

    /// Back to the top of a fresh page.
    pub fn reset(self) -> Self {
        Self { y: self.top, ..self }
    }
}
