// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cover page: logo, university, title, and the labelled student fields on a
// single page of their own. Positions are fixed offsets from the page top.

use folio_core::config::cm;
use folio_core::error::Result;
use folio_core::{CoverField, CoverInfo, ImageSource, PageGeometry};
use tracing::{info, instrument, warn};

use crate::canvas::Canvas;
use crate::image::RasterImage;
use crate::layout::{Font, FontSpec};

const UNIVERSITY_FONT: FontSpec = FontSpec::new(Font::HelveticaBold, 24.0);
const TITLE_FONT: FontSpec = FontSpec::new(Font::HelveticaBold, 20.0);
const FIELD_FONT: FontSpec = FontSpec::new(Font::Helvetica, 14.0);

// Offsets measured down from the page top.
const LOGO_BOTTOM: f32 = cm(8.0);
const UNIVERSITY_BASELINE: f32 = cm(10.0);
const TITLE_BASELINE: f32 = cm(12.0);
const FIELDS_BASELINE: f32 = cm(14.0);
const FIELD_SPACING: f32 = cm(1.0);

/// Outcome of drawing the optional cover logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoStatus {
    /// No logo was supplied.
    Absent,
    Drawn,
    /// The logo could not be loaded; the cover was drawn without it.
    Skipped(String),
}

/// Draws the title page.
#[derive(Debug, Clone, Copy)]
pub struct CoverPageRenderer<'a> {
    geometry: &'a PageGeometry,
}

impl<'a> CoverPageRenderer<'a> {
    pub fn new(geometry: &'a PageGeometry) -> Self {
        Self { geometry }
    }

    /// Draw the cover page and finish it. The logo is best-effort; every other
    /// element is always drawn.
    #[instrument(skip_all)]
    pub fn render(&self, canvas: &mut Canvas, info: &CoverInfo) -> Result<LogoStatus> {
        let width = self.geometry.width;
        let height = self.geometry.height;

        let logo = match &info.logo {
            Some(source) => self.draw_logo(canvas, source),
            None => LogoStatus::Absent,
        };

        canvas.set_font(UNIVERSITY_FONT);
        canvas.draw_centered_text(
            width / 2.0,
            height - UNIVERSITY_BASELINE,
            info.university_or_placeholder(),
        )?;

        canvas.set_font(TITLE_FONT);
        canvas.draw_centered_text(
            width / 2.0,
            height - TITLE_BASELINE,
            info.title_or_placeholder(),
        )?;

        canvas.set_font(FIELD_FONT);
        let mut y = height - FIELDS_BASELINE;
        for field in CoverField::ORDERED {
            let line = format!("{}: {}", field.label(), info.field(field));
            canvas.draw_text(self.geometry.margin, y, line)?;
            y -= FIELD_SPACING;
        }

        canvas.show_page();
        info!(logo = ?logo, "Cover page drawn");
        Ok(logo)
    }

    fn draw_logo(&self, canvas: &mut Canvas, source: &ImageSource) -> LogoStatus {
        let raster = match RasterImage::load(source) {
            Ok(raster) => raster,
            Err(err) => {
                warn!(error = %err, "Could not load logo, continuing without it");
                return LogoStatus::Skipped(err.to_string());
            }
        };
        let logo_width = self.geometry.logo_width;
        let logo_height = logo_width * raster.aspect();
        let x = (self.geometry.width - logo_width) / 2.0;
        let y = self.geometry.height - LOGO_BOTTOM;
        canvas.draw_image(raster, x, y, logo_width, logo_height);
        LogoStatus::Drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawOp;
    use crate::image::raster::png_fixture;

    fn render(info: &CoverInfo) -> (crate::canvas::LaidOutDocument, LogoStatus) {
        let g = PageGeometry::default();
        let mut canvas = Canvas::new(&g);
        let status = CoverPageRenderer::new(&g).render(&mut canvas, info).unwrap();
        (canvas.finish(), status)
    }

    #[test]
    fn title_and_university_are_centered_without_logo() {
        let info = CoverInfo {
            university: Some("X".into()),
            assignment_title: Some("Y".into()),
            ..CoverInfo::default()
        };
        let (doc, status) = render(&info);
        let g = PageGeometry::default();

        assert_eq!(status, LogoStatus::Absent);
        assert_eq!(doc.page_count(), 1);
        assert!(doc.images.is_empty());

        let page = &doc.pages[0];
        let texts = page.texts();
        assert_eq!(texts[0], "X");
        assert_eq!(texts[1], "Y");

        let DrawOp::Text { x, y, font, .. } = &page.ops[0] else {
            panic!("expected university text");
        };
        assert_eq!(*font, UNIVERSITY_FONT);
        let centre = x + UNIVERSITY_FONT.text_width("X") / 2.0;
        assert!((centre - g.width / 2.0).abs() < 1e-3);
        assert!((y - (g.height - cm(10.0))).abs() < 1e-3);
    }

    #[test]
    fn fields_are_labelled_in_order() {
        let info = CoverInfo {
            student_name: Some("Ada".into()),
            submission_date: Some("01-02-2026".into()),
            ..CoverInfo::default()
        };
        let (doc, _) = render(&info);
        let texts = doc.pages[0].texts();

        assert_eq!(
            texts,
            vec![
                "University Name",
                "Assignment Title",
                "Student Name: Ada",
                "Roll Number: ",
                "Department: ",
                "Course: ",
                "Professor: ",
                "Submission Date: 01-02-2026",
            ]
        );

        let ys: Vec<f32> = doc.pages[0]
            .ops
            .iter()
            .skip(2)
            .filter_map(|op| match op {
                DrawOp::Text { y, .. } => Some(*y),
                DrawOp::Image { .. } => None,
            })
            .collect();
        for pair in ys.windows(2) {
            assert!((pair[0] - pair[1] - cm(1.0)).abs() < 1e-3);
        }
    }

    #[test]
    fn logo_keeps_aspect_ratio() {
        let info = CoverInfo {
            logo: Some(ImageSource::Bytes(png_fixture(300, 150))),
            ..CoverInfo::default()
        };
        let (doc, status) = render(&info);
        let g = PageGeometry::default();

        assert_eq!(status, LogoStatus::Drawn);
        let Some(DrawOp::Image {
            x, width, height, ..
        }) = doc.pages[0].ops.first()
        else {
            panic!("expected the logo first");
        };
        assert!((width - cm(6.0)).abs() < 1e-3);
        assert!((height - cm(3.0)).abs() < 1e-3);
        assert!((x - (g.width - cm(6.0)) / 2.0).abs() < 1e-3);
    }

    #[test]
    fn broken_logo_is_skipped() {
        let info = CoverInfo {
            university: Some("X".into()),
            logo: Some(ImageSource::Bytes(vec![0, 1, 2, 3])),
            ..CoverInfo::default()
        };
        let (doc, status) = render(&info);

        assert!(matches!(status, LogoStatus::Skipped(_)));
        assert!(doc.images.is_empty());
        assert_eq!(doc.pages[0].texts()[0], "X");
    }
}
