use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::error::{Error, Result};
use crate::io::ReadAt;

use super::parser::TarParser;
use super::structures::TarFileEntry;

/// Tar file extractor
///
/// Owns the byte source and the member index, which is built once at
/// construction and reused for every query.
#[derive(Debug)]
pub struct TarExtractor<R: ReadAt> {
    parser: TarParser<R>,
    entries: Vec<TarFileEntry>,
}

impl<R: ReadAt> TarExtractor<R> {
    /// Index the archive behind `reader`.
    pub fn new(reader: Arc<R>) -> Result<Self> {
        let parser = TarParser::new(reader);
        let entries = parser.list_entries()?;
        Ok(Self { parser, entries })
    }

    /// Indexed regular-file members, in order of appearance
    pub fn entries(&self) -> &[TarFileEntry] {
        &self.entries
    }

    /// Member names in scan order
    pub fn file_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Total byte length of the archive
    pub fn archive_size(&self) -> u64 {
        self.parser.archive_size()
    }

    /// First member matching the full archive name
    pub fn find(&self, name: &str) -> Option<&TarFileEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Size in bytes of the first member matching `name`
    pub fn size_of(&self, name: &str) -> Option<u64> {
        self.find(name).map(|e| e.size)
    }

    /// Extract member data to memory
    pub fn extract_to_memory(&self, entry: &TarFileEntry) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; entry.size as usize];
        let n = self.parser.reader().read_at(entry.data_offset, &mut buf)?;
        if (n as u64) < entry.size {
            return Err(Error::ShortRead {
                name: entry.name.clone(),
                expected: entry.size,
                actual: n as u64,
            });
        }
        Ok(buf)
    }

    /// Read the contents of the first member matching `name`.
    ///
    /// Returns `Ok(None)` when no member matches; the caller decides
    /// whether that is fatal.
    pub fn read_contents(&self, name: &str) -> Result<Option<Vec<u8>>> {
        match self.find(name) {
            Some(entry) => self.extract_to_memory(entry).map(Some),
            None => Ok(None),
        }
    }

    /// Extract a member to disk
    pub fn extract_to_file(&self, entry: &TarFileEntry, output_path: &Path) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = self.extract_to_memory(entry)?;

        let mut file = fs::File::create(output_path)?;
        file.write_all(&data)?;

        Ok(())
    }

    /// Extract every member into `output_dir`.
    ///
    /// Archive-internal directory structure is flattened: each member is
    /// written to `output_dir` under its final path segment, truncating
    /// any existing file of that name. Stops at the first failure;
    /// members already written stay on disk.
    pub fn extract_all(&self, output_dir: &Path) -> Result<()> {
        fs::create_dir_all(output_dir)?;

        for entry in &self.entries {
            info!(name = %entry.name, size = entry.size, "extracting member");
            self.extract_to_file(entry, &output_dir.join(entry.base_name()))?;
        }

        Ok(())
    }
}
