//! Low-level tar archive parser.
//!
//! This module handles the binary parsing of tar block structures,
//! reading from any source that implements the [`ReadAt`] trait.
//!
//! ## Parsing Strategy
//!
//! Tar files are read front to back in a single linear pass:
//! 1. Check that the archive length is a whole number of 512-byte blocks
//! 2. Read one header block at the cursor and check its ustar magic
//! 3. Decode the octal size field and compute the padded payload length
//! 4. Record regular-file members, then seek past the payload blocks
//!
//! Only header blocks are ever read; member payloads stay on disk until
//! extraction, so the index stays small no matter how large the archive is.

use std::sync::Arc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::io::ReadAt;

use super::structures::*;

/// Low-level tar file parser.
///
/// This struct scans the block structure of a tar archive into a table of
/// [`TarFileEntry`] records. It's generic over the reader type so any
/// random-access byte source can back it.
///
/// Typically used through [`TarExtractor`](super::TarExtractor) rather
/// than directly.
#[derive(Debug)]
pub struct TarParser<R: ReadAt> {
    /// The underlying data source
    reader: Arc<R>,
    /// Total size of the archive in bytes
    size: u64,
}

impl<R: ReadAt> TarParser<R> {
    /// Create a new parser for the given reader.
    pub fn new(reader: Arc<R>) -> Self {
        let size = reader.size();
        Self { reader, size }
    }

    /// Total byte length of the archive.
    pub fn archive_size(&self) -> u64 {
        self.size
    }

    /// Scan the archive and index every regular-file member.
    ///
    /// Walks header blocks from offset 0, recording a [`TarFileEntry`]
    /// for each regular file and skipping over every other member type.
    /// The scan ends normally at the first block that is shorter than 512
    /// bytes or whose magic does not match; entries collected up to that
    /// point are returned. Scanning the same source again yields an
    /// identical table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Misaligned`] without scanning when the archive
    /// length is not a multiple of 512, [`Error::Malformed`] for a header
    /// whose size field cannot be decoded, and [`Error::Truncated`] for a
    /// member whose payload would extend past the end of the archive.
    pub fn list_entries(&self) -> Result<Vec<TarFileEntry>> {
        if self.size % BLOCK_SIZE as u64 != 0 {
            return Err(Error::Misaligned(self.size));
        }

        let mut entries = Vec::new();
        let mut block = [0u8; BLOCK_SIZE];
        let mut offset = 0u64;

        while offset < self.size {
            let n = self.reader.read_at(offset, &mut block)?;
            if n < BLOCK_SIZE {
                // End of archive reached
                break;
            }

            if !TarHeader::magic_matches(&block) {
                // End-of-archive padding or foreign data: stop scanning,
                // entries indexed so far remain valid.
                break;
            }

            let header =
                TarHeader::from_block(&block).ok_or(Error::Malformed { offset })?;

            let data_offset = offset + BLOCK_SIZE as u64;
            let payload_blocks = header.payload_blocks();
            if header.entry_type.is_regular() {
                if data_offset + header.size > self.size {
                    return Err(Error::Truncated { name: header.name });
                }
                debug!(
                    name = %header.name,
                    size = header.size,
                    data_offset,
                    "indexed member"
                );
                entries.push(TarFileEntry {
                    name: header.name,
                    size: header.size,
                    data_offset,
                });
            }

            offset = data_offset + payload_blocks * BLOCK_SIZE as u64;
        }

        Ok(entries)
    }

    /// Get a reference to the underlying reader.
    ///
    /// Useful for reading member payloads after indexing.
    pub fn reader(&self) -> &Arc<R> {
        &self.reader
    }
}
