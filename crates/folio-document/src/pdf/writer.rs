// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer: turns canvas pages into a PDF using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.
//
// Text is set in the Windows-1252 subsets of the base-14 faces that ship with
// printpdf, embedded as ordinary fonts.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use folio_core::error::{FolioError, Result};
use printpdf::{
    BuiltinFont, FontId, Mm, Op, ParsedFont, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg,
    Point, Pt, RawImage, RawImageData, RawImageFormat, TextItem, XObjectTransform,
};
use tracing::{debug, info, instrument};

use crate::canvas::{DrawOp, LaidOutDocument};
use crate::layout::{Font, REPLACEMENT_CHAR, drawable_char};

/// Points per millimetre.
const PT_PER_MM: f32 = 72.0 / 25.4;

/// A font added to the document being written.
struct EmbeddedFont {
    id: FontId,
    parsed: ParsedFont,
}

/// Serialises a [`LaidOutDocument`] to PDF bytes.
pub struct PdfWriter {
    /// Title metadata embedded in the PDF /Info dictionary.
    title: String,
}

impl PdfWriter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Encode every page. Images are embedded once each as XObjects and
    /// stretched to their placed size; fonts are embedded on first use.
    #[instrument(skip_all, fields(pages = document.page_count(), images = document.images.len()))]
    pub fn render(&self, document: &LaidOutDocument) -> Result<Vec<u8>> {
        let page_w = Mm(document.width / PT_PER_MM);
        let page_h = Mm(document.height / PT_PER_MM);

        info!(title = %self.title, "Writing PDF");

        let mut doc = PdfDocument::new(&self.title);
        let mut warnings: Vec<PdfWarnMsg> = Vec::new();

        let xobjects: Vec<_> = document
            .images
            .iter()
            .map(|image| {
                let raw = RawImage {
                    pixels: RawImageData::U8(image.pixels().to_vec()),
                    width: image.width() as usize,
                    height: image.height() as usize,
                    data_format: RawImageFormat::RGB8,
                    tag: Vec::new(),
                };
                (
                    doc.add_image(&raw),
                    image.width() as f32,
                    image.height() as f32,
                )
            })
            .collect();

        let mut fonts: HashMap<Font, EmbeddedFont> = HashMap::new();
        let mut pages: Vec<PdfPage> = Vec::with_capacity(document.pages.len());

        for (page_index, page) in document.pages.iter().enumerate() {
            let mut ops: Vec<Op> = Vec::new();
            for op in &page.ops {
                match op {
                    DrawOp::Text { x, y, font, text } => {
                        let embedded = match fonts.entry(font.font) {
                            Entry::Occupied(entry) => entry.into_mut(),
                            Entry::Vacant(entry) => {
                                let parsed = parse_font(font.font, &mut warnings)?;
                                let id = doc.add_font(&parsed);
                                entry.insert(EmbeddedFont { id, parsed })
                            }
                        };
                        ops.push(Op::StartTextSection);
                        ops.push(Op::SetTextCursor {
                            pos: Point {
                                x: Pt(*x),
                                y: Pt(*y),
                            },
                        });
                        ops.push(Op::SetFontSize {
                            size: Pt(font.size),
                            font: embedded.id.clone(),
                        });
                        ops.push(Op::WriteText {
                            items: vec![TextItem::Text(encode_text(text, &embedded.parsed))],
                            font: embedded.id.clone(),
                        });
                        ops.push(Op::EndTextSection);
                    }
                    DrawOp::Image {
                        image,
                        x,
                        y,
                        width,
                        height,
                    } => {
                        let (id, px_w, px_h) = xobjects.get(image.0).ok_or_else(|| {
                            FolioError::Pdf(format!(
                                "page {} places image {} but the document has {} images",
                                page_index + 1,
                                image.0,
                                xobjects.len()
                            ))
                        })?;
                        // At 72 dpi one pixel is one point, so the scale is
                        // the placed size over the pixel size.
                        ops.push(Op::UseXobject {
                            id: id.clone(),
                            transform: XObjectTransform {
                                translate_x: Some(Pt(*x)),
                                translate_y: Some(Pt(*y)),
                                scale_x: Some(width / px_w),
                                scale_y: Some(height / px_h),
                                dpi: Some(72.0),
                                rotate: None,
                            },
                        });
                    }
                }
            }
            pages.push(PdfPage::new(page_w, page_h, ops));
        }

        doc.with_pages(pages);

        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);

        debug!(
            bytes = output.len(),
            fonts = fonts.len(),
            warnings = warnings.len(),
            "PDF serialised"
        );

        Ok(output)
    }
}

fn builtin_font(font: Font) -> BuiltinFont {
    match font {
        Font::Helvetica => BuiltinFont::Helvetica,
        Font::HelveticaBold => BuiltinFont::HelveticaBold,
        Font::Courier => BuiltinFont::Courier,
    }
}

/// Parse the Windows-1252 subset of `font` bundled with printpdf.
fn parse_font(font: Font, warnings: &mut Vec<PdfWarnMsg>) -> Result<ParsedFont> {
    let builtin = builtin_font(font);
    let subset = builtin.get_subset_font();
    ParsedFont::from_bytes(&subset.bytes, 0, warnings).ok_or_else(|| {
        FolioError::Pdf(format!("could not load embedded font {}", builtin.get_id()))
    })
}

/// Replace every character the font has no glyph for.
fn encode_text(text: &str, font: &ParsedFont) -> String {
    text.chars()
        .map(|c| {
            let c = drawable_char(c);
            if font.lookup_glyph_index(c as u32).is_some() {
                c
            } else {
                REPLACEMENT_CHAR
            }
        })
        .collect()
}
