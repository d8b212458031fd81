//! Types for stub generation output.

use boilerplate_core::Language;
use serde::{Deserialize, Serialize};

/// A generated source file, not yet written to disk.
///
/// # Examples
///
/// ```
/// use boilerplate_codegen::GeneratedFile;
/// use boilerplate_core::Language;
///
/// let file = GeneratedFile {
///     file_name: "add.py".to_string(),
///     language: Language::Python,
///     content: "def add():\n    # Your code here\n    return".to_string(),
/// };
///
/// assert_eq!(file.line_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// File name relative to the output directory (`<name><ext>`)
    pub file_name: String,
    /// Language of the content
    pub language: Language,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Returns the number of lines in the content.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}
