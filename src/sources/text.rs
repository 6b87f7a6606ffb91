//! Plain-text tokenization.
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use super::TokenSource;
use crate::error::Error;

/// Split text into lowercased word tokens.
///
/// Word boundaries follow UAX#29 (via [UnicodeSegmentation::unicode_words]),
/// so punctuation never lands in a token. Empty or punctuation-only input
/// yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(|w| w.to_lowercase()).collect()
}

/// Token source over a UTF-8 text file.
///
/// The whole file is read and tokenized in one call. Nothing is opened
/// until [TokenSource::tokens] runs.
#[derive(Debug, Clone)]
pub struct TextFile {
    path: PathBuf,
}

impl TextFile {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Get a reference to the text file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenSource for TextFile {
    fn tokens(&self) -> Result<Vec<String>, Error> {
        debug!("reading {:?}", self.path);
        let content = fs::read_to_string(&self.path)?;
        Ok(tokenize(&content))
    }
}

/// In-memory text is a token source too.
impl TokenSource for str {
    fn tokens(&self) -> Result<Vec<String>, Error> {
        Ok(tokenize(self))
    }
}
