// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Folio: paper sizes, cover page data, content blocks,
// and the manifest that bundles them.

use std::borrow::Cow;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: u32, height_mm: u32 },
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::A5 => (148, 210),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
            Self::Custom {
                width_mm,
                height_mm,
            } => (*width_mm, *height_mm),
        }
    }
}

// -- Images -------------------------------------------------------------------

/// Where an image's encoded bytes come from.
///
/// In JSON a path is written as a plain string; in-memory bytes as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Read an image from any seekable handle. The handle is rewound first so
    /// a previously consumed upload can be reused; it is not retained.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        reader.seek(SeekFrom::Start(0))?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::Bytes(data))
    }

    /// Encoded image bytes. Paths are read on every call.
    pub fn bytes(&self) -> Result<Cow<'_, [u8]>> {
        match self {
            Self::Bytes(data) => Ok(Cow::Borrowed(data)),
            Self::Path(path) => std::fs::read(path).map(Cow::Owned).map_err(|err| {
                FolioError::Image(format!("failed to read {}: {}", path.display(), err))
            }),
        }
    }

    /// Short description for log fields.
    pub fn describe(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Bytes(data) => format!("<{} bytes>", data.len()),
        }
    }

    fn resolve_against(&mut self, base: &Path) {
        if let Self::Path(path) = self {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(data: Vec<u8>) -> Self {
        Self::Bytes(data)
    }
}

// -- Cover page ---------------------------------------------------------------

/// Labelled fields listed below the title on the cover page, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverField {
    StudentName,
    RollNumber,
    Department,
    Course,
    Professor,
    SubmissionDate,
}

impl CoverField {
    /// Drawing order on the cover page.
    pub const ORDERED: [CoverField; 6] = [
        Self::StudentName,
        Self::RollNumber,
        Self::Department,
        Self::Course,
        Self::Professor,
        Self::SubmissionDate,
    ];

    /// Manifest key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            Self::StudentName => "student_name",
            Self::RollNumber => "roll_number",
            Self::Department => "department",
            Self::Course => "course",
            Self::Professor => "professor",
            Self::SubmissionDate => "submission_date",
        }
    }

    /// Human-readable label, e.g. `roll_number` becomes `Roll Number`.
    pub fn label(&self) -> String {
        title_case_key(self.key())
    }
}

/// Replace underscores with spaces and capitalise each word.
pub fn title_case_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Information drawn on the cover page. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverInfo {
    pub university: Option<String>,
    pub assignment_title: Option<String>,
    pub student_name: Option<String>,
    pub roll_number: Option<String>,
    pub department: Option<String>,
    pub course: Option<String>,
    pub professor: Option<String>,
    pub submission_date: Option<String>,
    pub logo: Option<ImageSource>,
}

impl CoverInfo {
    pub const UNIVERSITY_PLACEHOLDER: &'static str = "University Name";
    pub const TITLE_PLACEHOLDER: &'static str = "Assignment Title";

    /// University name, or the placeholder when missing or blank.
    pub fn university_or_placeholder(&self) -> &str {
        non_blank(self.university.as_deref()).unwrap_or(Self::UNIVERSITY_PLACEHOLDER)
    }

    /// Assignment title, or the placeholder when missing or blank.
    pub fn title_or_placeholder(&self) -> &str {
        non_blank(self.assignment_title.as_deref()).unwrap_or(Self::TITLE_PLACEHOLDER)
    }

    /// Value of a labelled field; missing fields read as empty.
    pub fn field(&self, field: CoverField) -> &str {
        let value = match field {
            CoverField::StudentName => &self.student_name,
            CoverField::RollNumber => &self.roll_number,
            CoverField::Department => &self.department,
            CoverField::Course => &self.course,
            CoverField::Professor => &self.professor,
            CoverField::SubmissionDate => &self.submission_date,
        };
        value.as_deref().unwrap_or("")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

// -- Content blocks -----------------------------------------------------------

/// One unit of document content. Sequence order is rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Text {
        #[serde(default)]
        content: String,
    },
    Code {
        #[serde(default)]
        content: String,
    },
    Image {
        #[serde(default)]
        file: Option<ImageSource>,
    },
}

impl Block {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::Code {
            content: content.into(),
        }
    }

    pub fn image(file: impl Into<ImageSource>) -> Self {
        Self::Image {
            file: Some(file.into()),
        }
    }

    /// Tag name as written in manifests.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Code { .. } => "code",
            Self::Image { .. } => "image",
        }
    }
}

// -- Manifest -----------------------------------------------------------------

/// Cover info plus the ordered block list, as handed to the assembler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentManifest {
    pub cover: CoverInfo,
    pub blocks: Vec<Block>,
}

impl AssignmentManifest {
    /// Parse a manifest from JSON text. Image paths are left as written.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a manifest file; relative image paths are resolved against the
    /// manifest's own directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| {
            FolioError::Manifest(format!("failed to read {}: {}", path.display(), err))
        })?;
        let mut manifest = Self::from_json(&json)?;
        if let Some(base) = path.parent() {
            manifest.resolve_paths(base);
        }
        Ok(manifest)
    }

    /// Rebase every relative image path onto `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if let Some(logo) = self.cover.logo.as_mut() {
            logo.resolve_against(base);
        }
        for block in &mut self.blocks {
            if let Block::Image { file: Some(file) } = block {
                file.resolve_against(base);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn labels_are_title_cased() {
        assert_eq!(CoverField::StudentName.label(), "Student Name");
        assert_eq!(CoverField::SubmissionDate.label(), "Submission Date");
        assert_eq!(CoverField::Course.label(), "Course");
        assert_eq!(title_case_key("ROLL_number"), "Roll Number");
    }

    #[test]
    fn missing_cover_fields_fall_back() {
        let info = CoverInfo {
            university: Some("   ".into()),
            ..CoverInfo::default()
        };
        assert_eq!(info.university_or_placeholder(), "University Name");
        assert_eq!(info.title_or_placeholder(), "Assignment Title");
        assert_eq!(info.field(CoverField::Professor), "");
    }

    #[test]
    fn reader_is_rewound_before_reading() {
        let mut reader = Cursor::new(vec![1u8, 2, 3, 4]);
        let mut scratch = [0u8; 3];
        reader.read_exact(&mut scratch).unwrap();

        let source = ImageSource::from_reader(reader).unwrap();
        assert_eq!(source, ImageSource::Bytes(vec![1, 2, 3, 4]));
    }

    #[test]
    fn unreadable_path_is_an_image_error() {
        let source = ImageSource::Path(PathBuf::from("/definitely/not/here.png"));
        assert!(matches!(source.bytes(), Err(FolioError::Image(_))));
    }

    #[test]
    fn manifest_parses_tagged_blocks() {
        let json = r#"{
            "cover": { "university": "X", "assignment_title": "Y", "logo": "logo.png" },
            "blocks": [
                { "type": "text", "content": "hello" },
                { "type": "code", "content": "fn main() {}" },
                { "type": "image", "file": "figures/plot.png" },
                { "type": "text" }
            ]
        }"#;
        let mut manifest = AssignmentManifest::from_json(json).unwrap();
        assert_eq!(manifest.cover.university.as_deref(), Some("X"));
        assert_eq!(manifest.blocks.len(), 4);
        assert_eq!(manifest.blocks[0], Block::text("hello"));
        assert_eq!(manifest.blocks[1].kind(), "code");
        assert_eq!(manifest.blocks[3], Block::text(""));

        manifest.resolve_paths(Path::new("/work"));
        assert_eq!(
            manifest.blocks[2],
            Block::image(PathBuf::from("/work/figures/plot.png"))
        );
        assert_eq!(
            manifest.cover.logo,
            Some(ImageSource::Path(PathBuf::from("/work/logo.png")))
        );
    }

    #[test]
    fn unknown_block_type_is_rejected() {
        let json = r#"{ "blocks": [ { "type": "table" } ] }"#;
        assert!(matches!(
            AssignmentManifest::from_json(json),
            Err(FolioError::Serialization(_))
        ));
    }
}
