use serde::Serialize;

/// Reference to a file stored alongside the document, such as a card
/// image. The reader does not resolve or open these; it only carries the
/// name through, and the container that owns the document decides what it
/// points at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FileName(String);

impl FileName {
    /// Decode a filename from its stored document form. Backslashes are
    /// normalized to forward slashes so names written on either platform
    /// refer to the same packaged file.
    pub fn from_read_string(s: &str) -> Self {
        Self(s.replace('\\', "/"))
    }

    /// The form this name is written back to a document in.
    pub fn to_write_string(&self) -> &str {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
