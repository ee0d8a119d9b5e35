use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IvsortError, IvsortResult};

const BOM: char = '\u{FEFF}';

#[derive(Debug)]
pub enum DataSource {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl DataSource {
    fn as_bytes(&self) -> &[u8] {
        match self {
            DataSource::Mmap(m) => &m[..],
            DataSource::Owned(v) => v,
        }
    }
}

/// Raw UTF-8 word list, one word per line.
#[derive(Debug)]
pub struct WordList {
    source: DataSource,
    origin: String,
}

impl WordList {
    /// Maps the file into memory. Empty files are not mapped.
    pub fn load(path: &Path) -> IvsortResult<Self> {
        let io_err = |source| IvsortError::Io { path: path.to_path_buf(), source };
        let file = File::open(path).map_err(io_err)?;
        let len = file.metadata().map_err(io_err)?.len();

        let source = if len == 0 {
            DataSource::Owned(Vec::new())
        } else {
            // The map is only read, and only for the lifetime of this list.
            let mmap = unsafe { Mmap::map(&file) }.map_err(io_err)?;
            DataSource::Mmap(mmap)
        };
        tracing::debug!(path = %path.display(), bytes = len, "loaded word list");

        Ok(Self { source, origin: path.display().to_string() })
    }

    pub fn from_reader<R: Read>(mut reader: R, origin: &str) -> IvsortResult<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| IvsortError::Read { origin: origin.to_string(), source })?;
        Ok(Self::from_bytes(bytes, origin))
    }

    pub fn from_bytes(bytes: Vec<u8>, origin: &str) -> Self {
        Self { source: DataSource::Owned(bytes), origin: origin.to_string() }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Splits the list into words. Line terminators are removed, every other
    /// character (trailing spaces included) stays part of the word.
    pub fn words(&self, strip_bom: bool) -> IvsortResult<Vec<&str>> {
        let mut text = std::str::from_utf8(self.source.as_bytes()).map_err(|e| IvsortError::InvalidUtf8 {
            origin: self.origin.clone(),
            offset: e.valid_up_to(),
        })?;
        if strip_bom {
            text = text.strip_prefix(BOM).unwrap_or(text);
        }
        Ok(text.lines().collect())
    }
}
