//! # Reference Corpus Loading

use std::path::{Path, PathBuf};

use crate::{EDResult, EncDetectError};

/// Default path of the UTF-8 reference corpus.
pub const DEFAULT_UTF8_CORPUS: &str = "./data/war-and-peace-utf-8.txt";

/// Default path of the Windows-1251 reference corpus.
pub const DEFAULT_WIN1251_CORPUS: &str = "./data/war-and-peace-windows-1251.txt";

/// Locations of the two reference corpora.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusPaths {
    /// Path of the UTF-8 reference corpus.
    pub utf8: PathBuf,

    /// Path of the Windows-1251 reference corpus.
    pub win1251: PathBuf,
}

impl Default for CorpusPaths {
    fn default() -> Self {
        Self {
            utf8: DEFAULT_UTF8_CORPUS.into(),
            win1251: DEFAULT_WIN1251_CORPUS.into(),
        }
    }
}

impl CorpusPaths {
    /// Set the UTF-8 corpus path.
    pub fn with_utf8<P: Into<PathBuf>>(
        self,
        utf8: P,
    ) -> Self {
        Self {
            utf8: utf8.into(),
            ..self
        }
    }

    /// Set the Windows-1251 corpus path.
    pub fn with_win1251<P: Into<PathBuf>>(
        self,
        win1251: P,
    ) -> Self {
        Self {
            win1251: win1251.into(),
            ..self
        }
    }
}

/// Read a whole file into memory.
///
/// ## Returns
/// The file bytes, or [`EncDetectError::CorpusRead`] naming the path.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> EDResult<Vec<u8>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| EncDetectError::CorpusRead {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}
