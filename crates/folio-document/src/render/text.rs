// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text and code blocks: line-by-line layout with page breaks after any line
// that would cross the bottom margin.

use folio_core::error::Result;
use tracing::{Level, debug, enabled, instrument};

use super::{BODY_FONT, BlockRenderer, CODE_FONT};
use crate::canvas::Canvas;
use crate::layout::PageCursor;

impl BlockRenderer<'_> {
    /// Render a plain text block. Lines are not wrapped; a line wider than the
    /// printable width runs into the right margin.
    ///
    /// An empty block draws nothing but still leaves the block gap.
    #[instrument(skip_all, fields(y = cursor.y(), text_len = content.len()))]
    pub fn text(&self, canvas: &mut Canvas, cursor: PageCursor, content: &str) -> Result<PageCursor> {
        if content.is_empty() {
            return Ok(cursor.down(self.geometry.block_gap));
        }

        let lines: Vec<&str> = split_lines(content).collect();
        if enabled!(Level::DEBUG) {
            let max_width = self.geometry.content_width();
            for (index, line) in lines.iter().enumerate() {
                let width = BODY_FONT.text_width(line);
                if width > max_width {
                    debug!(line = index, width, max_width, "Text line overflows printable width");
                }
            }
        }

        self.draw_lines(canvas, cursor, BODY_FONT, lines)
    }

    /// Render a code block. Every line is hard-wrapped at the configured
    /// character count before layout; an empty line produces no output.
    #[instrument(skip_all, fields(y = cursor.y(), code_len = content.len()))]
    pub fn code(&self, canvas: &mut Canvas, cursor: PageCursor, content: &str) -> Result<PageCursor> {
        let width = self.geometry.code_wrap_chars;
        let chunks: Vec<&str> = split_lines(content)
            .flat_map(|line| wrap_code_line(line, width))
            .collect();
        debug!(chunks = chunks.len(), "Code wrapped");

        self.draw_lines(canvas, cursor, CODE_FONT, chunks)
    }
}

/// Split on `\n`, dropping a trailing `\r` from each line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Cut `line` into consecutive chunks of at most `width` characters.
///
/// Counts characters, not bytes, and ignores word boundaries. An empty line
/// yields no chunks.
pub fn wrap_code_line(line: &str, width: usize) -> Vec<&str> {
    let width = width.max(1);
    let mut chunks = Vec::with_capacity(line.len() / width + 1);
    let mut start = 0;
    let mut count = 0;
    for (offset, _) in line.char_indices() {
        if count == width {
            chunks.push(&line[start..offset]);
            start = offset;
            count = 0;
        }
        count += 1;
    }
    if start < line.len() {
        chunks.push(&line[start..]);
    }
    chunks
}
