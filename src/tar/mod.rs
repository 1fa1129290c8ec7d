//! Tar archive indexing and extraction.
//!
//! This module provides functionality for reading and extracting POSIX tar
//! archives in the classic ustar header layout.
//!
//! ## Architecture
//!
//! The module is organized into three main components:
//!
//! - [`structures`]: Data structures representing tar format elements (header blocks, entries, typeflags)
//! - [`parser`]: Low-level scanning of the block structure from raw bytes
//! - [`extractor`]: High-level extraction API for end users
//!
//! ## Tar Format Overview
//!
//! A tar archive is a sequence of 512-byte blocks. Each member consists of
//! one header block (name, size, typeflag, ustar magic) followed by zero or
//! more payload blocks, the last one padded to the block boundary. The
//! archive ends at two all-zero blocks, which fail the magic check.
//!
//! This implementation walks the headers in one linear pass and records
//! only (name, size, payload offset) per regular file, so listing never
//! loads member data.
//!
//! ## Limitations
//!
//! - No archive creation
//! - No gzip/bzip2 compressed streams
//! - No symlink or hard-link resolution
//! - No PAX or GNU long-name extended headers
//! - No permission, ownership, or timestamp preservation

mod extractor;
mod parser;
mod structures;

pub use extractor::TarExtractor;
pub use parser::TarParser;
pub use structures::*;
