// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image blocks: fit into the space left on the page, centred horizontally.

use folio_core::ImageSource;
use folio_core::error::Result;
use tracing::{debug, instrument};

use super::BlockRenderer;
use crate::canvas::Canvas;
use crate::image::RasterImage;
use crate::layout::{FittedSize, PageCursor, fit_to_box};

impl BlockRenderer<'_> {
    /// Render an image block.
    ///
    /// The image is fitted into the printable width and the height left below
    /// the cursor. If nothing positive fits, the page is finished first and the
    /// fit is recomputed against a fresh page. Decoding failures are returned
    /// before anything is drawn.
    #[instrument(skip_all, fields(y = cursor.y(), source = %source.describe()))]
    pub fn image(
        &self,
        canvas: &mut Canvas,
        cursor: PageCursor,
        source: &ImageSource,
    ) -> Result<PageCursor> {
        let raster = RasterImage::load(source)?;
        let mut cursor = cursor;

        let mut fitted = self.fit(&raster, &cursor);
        if fitted.height <= 0.0 || !cursor.fits(fitted.height) {
            debug!(
                height = fitted.height,
                available = cursor.available_height(),
                "Image does not fit, breaking page"
            );
            canvas.show_page();
            cursor = cursor.reset();
            fitted = self.fit(&raster, &cursor);
        }

        let x = (self.geometry.width - fitted.width) / 2.0;
        let y = cursor.y() - fitted.height;
        debug!(
            width = fitted.width,
            height = fitted.height,
            constraint = ?fitted.constraint,
            "Image placed"
        );
        canvas.draw_image(raster, x, y, fitted.width, fitted.height);

        Ok(cursor.down(fitted.height + self.geometry.block_gap))
    }

    fn fit(&self, raster: &RasterImage, cursor: &PageCursor) -> FittedSize {
        fit_to_box(
            raster.width() as f32,
            raster.height() as f32,
            self.geometry.content_width(),
            cursor.available_height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawOp;
    use crate::image::raster::png_fixture;
    use folio_core::FolioError;
    use folio_core::PageGeometry;

    fn geometry() -> PageGeometry {
        PageGeometry {
            width: 440.0,
            height: 600.0,
            margin: 20.0,
            ..PageGeometry::default()
        }
    }

    fn placed(ops: &[DrawOp]) -> (f32, f32, f32, f32) {
        match ops.last() {
            Some(DrawOp::Image {
                x,
                y,
                width,
                height,
                ..
            }) => (*x, *y, *width, *height),
            other => panic!("expected an image op, got {other:?}"),
        }
    }

    #[test]
    fn width_constrained_image_is_centered() {
        let g = geometry();
        let renderer = BlockRenderer::new(&g);
        let mut canvas = Canvas::new(&g);
        // 400 wide box, 300 tall box below the cursor.
        let start = PageCursor::at(&g, 320.0);
        let source = ImageSource::Bytes(png_fixture(200, 100));

        let end = renderer.image(&mut canvas, start, &source).unwrap();

        let (x, y, w, h) = placed(canvas.current_ops());
        assert!((w - 400.0).abs() < 1e-3);
        assert!((h - 200.0).abs() < 1e-3);
        assert!((x - 20.0).abs() < 1e-3);
        assert!((y - 120.0).abs() < 1e-3);
        assert!((end.y() - (320.0 - 200.0 - g.block_gap)).abs() < 1e-3);
        assert_eq!(canvas.finished_pages(), 0);
    }

    #[test]
    fn height_constrained_image_shrinks_into_remaining_space() {
        let g = geometry();
        let renderer = BlockRenderer::new(&g);
        let mut canvas = Canvas::new(&g);
        let start = PageCursor::at(&g, 120.0);
        let source = ImageSource::Bytes(png_fixture(50, 100));

        renderer.image(&mut canvas, start, &source).unwrap();

        let (x, y, w, h) = placed(canvas.current_ops());
        assert!((h - 100.0).abs() < 1e-3);
        assert!((w - 50.0).abs() < 1e-3);
        assert!((x - 195.0).abs() < 1e-3);
        assert!((y - g.margin).abs() < 1e-3);
        assert_eq!(canvas.finished_pages(), 0);
    }

    #[test]
    fn cursor_below_margin_breaks_before_drawing() {
        let g = geometry();
        let renderer = BlockRenderer::new(&g);
        let mut canvas = Canvas::new(&g);
        let start = PageCursor::at(&g, g.margin - 5.0);
        let source = ImageSource::Bytes(png_fixture(100, 100));

        let end = renderer.image(&mut canvas, start, &source).unwrap();

        assert_eq!(canvas.finished_pages(), 1);
        let (_, y, w, h) = placed(canvas.current_ops());
        assert!((w - 400.0).abs() < 1e-3);
        assert!((h - 400.0).abs() < 1e-3);
        assert!((y - (g.top() - 400.0)).abs() < 1e-3);
        assert!((end.y() - (g.top() - 400.0 - g.block_gap)).abs() < 1e-3);
    }

    #[test]
    fn undecodable_image_draws_nothing() {
        let g = geometry();
        let renderer = BlockRenderer::new(&g);
        let mut canvas = Canvas::new(&g);
        let start = PageCursor::at_top(&g);
        let source = ImageSource::Bytes(b"GIF89a but not really".to_vec());

        let err = renderer.image(&mut canvas, start, &source).unwrap_err();
        assert!(matches!(err, FolioError::Image(_)));
        assert!(canvas.current_ops().is_empty());
    }
}
