//! # runtar
//!
//! A Rust untar utility for POSIX tar archives.
//!
//! This library indexes the block structure of a tar archive without
//! loading member data, then extracts regular-file members on demand. The
//! index records only (name, size, payload offset) per member, so archives
//! of any size can be handled with memory bounded by the largest single
//! member.
//!
//! ## Features
//!
//! - Index classic ustar archives in one linear pass
//! - List members without reading payload data
//! - Extract single members to memory or disk
//! - Extract whole archives into a flat output directory
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use runtar::{LocalFileReader, TarExtractor};
//!
//! fn main() -> runtar::Result<()> {
//!     // Open and index a local archive
//!     let reader = Arc::new(LocalFileReader::new(Path::new("archive.tar"))?);
//!     let extractor = TarExtractor::new(reader)?;
//!
//!     // List all regular-file members
//!     for name in extractor.file_names() {
//!         println!("{}", name);
//!     }
//!
//!     // Extract everything into out/
//!     extractor.extract_all(Path::new("out"))?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod io;
pub mod tar;

pub use cli::Cli;
pub use error::{Error, Result};
pub use io::{LocalFileReader, ReadAt};
pub use tar::{EntryType, TarExtractor, TarFileEntry, TarParser};
