use std::io;
use thiserror::Error;

/// Errors that can happen when indexing or extracting a tar archive.
#[derive(Error, Debug)]
pub enum Error {
    /// The archive length is not a whole number of 512-byte blocks.
    #[error("archive size {0} is not a multiple of 512 bytes")]
    Misaligned(u64),

    /// A header block carried a valid magic but an undecodable size field.
    #[error("malformed header block at offset {offset}")]
    Malformed { offset: u64 },

    /// An indexed entry claims more payload than the archive holds.
    #[error("entry `{name}` extends past the end of the archive")]
    Truncated { name: String },

    /// A payload read transferred fewer bytes than the indexed size.
    #[error("short read for `{name}`: expected {expected} bytes, got {actual}")]
    ShortRead {
        name: String,
        expected: u64,
        actual: u64,
    },

    /// I/O error from the underlying byte source or the filesystem.
    #[error("I/O error")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a runtar error.
pub type Result<T> = std::result::Result<T, Error>;
