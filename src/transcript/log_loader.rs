//! Transcript loading.
//!
//! The whole file is read once. Byte sequences that are not valid UTF-8 are
//! dropped rather than rejected.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

use super::types::Verdict;
use crate::text::split_lines;

/// Buffer size for reading transcript files (64KB).
const BUFFER_SIZE: usize = 64 * 1024;

/// Error type for transcript loading failures.
#[derive(Debug)]
pub enum LoadError {
    NotFound(PathBuf),
    Unreadable(PathBuf, std::io::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::NotFound(path) => write!(f, "File does not exist - {}", path.display()),
            LoadError::Unreadable(path, e) => write!(f, "Failed to read file {} - {}", path.display(), e),
        }
    }
}

impl std::error::Error for LoadError {}

/// A loaded simulator transcript.
#[derive(Debug, Clone)]
pub struct Transcript {
    path: PathBuf,
    lines: Vec<String>,
}

impl Transcript {
    /// Read and split the transcript at `path`.
    ///
    /// # Returns
    ///
    /// `Ok(Transcript)` if the file was read, `Err(LoadError)` if it is missing
    /// or cannot be read.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Unreadable(path.to_path_buf(), e),
        })?;

        let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| LoadError::Unreadable(path.to_path_buf(), e))?;

        let text = decode_lossy(&bytes);
        let transcript = Self::from_text(path, &text);
        log::debug!("Loaded {} lines ({} bytes) from {}", transcript.line_count(), bytes.len(), path.display());
        Ok(transcript)
    }

    /// Build a transcript from already decoded text.
    pub fn from_text(path: &Path, text: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: split_lines(text).into_iter().map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw lines in file order, untrimmed.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_lines(&self.lines)
    }
}

/// Decode UTF-8, silently dropping invalid byte sequences.
fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
