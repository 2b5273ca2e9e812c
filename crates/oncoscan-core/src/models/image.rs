use std::fmt;

use crate::error::ValidationError;

const SUPPORTED_EXTENSIONS: [(&str, &str); 3] = [
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
];

/// Whether `file_name` ends in `.jpg`, `.jpeg` or `.png` (any case).
pub fn is_supported_image(file_name: &str) -> bool {
    content_type_for(file_name).is_some()
}

fn content_type_for(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    SUPPORTED_EXTENSIONS
        .iter()
        .find(|(candidate, _)| ext.eq_ignore_ascii_case(candidate))
        .map(|(_, content_type)| *content_type)
}

/// A medical image chosen for a case.
///
/// Owns its bytes, so replacing the selection releases the previous image.
#[derive(Clone, PartialEq, Eq)]
pub struct CaseImage {
    file_name: String,
    content_type: &'static str,
    bytes: Vec<u8>,
}

impl CaseImage {
    /// Wrap an already loaded file. Fails for unsupported extensions.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ValidationError> {
        let file_name = file_name.into();
        let Some(content_type) = content_type_for(&file_name) else {
            return Err(ValidationError::UnsupportedImage { file_name });
        };
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for CaseImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseImage")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
