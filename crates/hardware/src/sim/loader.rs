//! Program Loader.
//!
//! This module places programs in memory before execution. It performs:
//! 1. **Word loading:** Writes instruction words little-endian at `base, base + 4, ...`.
//! 2. **Image decoding:** Splits a flat little-endian binary into 32-bit words.
//! 3. **File access:** Reads images and JSON configuration files from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::common::Trap;
use crate::config::Config;
use crate::soc::Memory;

/// Bytes per instruction word in a flat image.
const WORD_BYTES: usize = 4;

/// Errors raised while reading programs or configuration from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The image length is not a whole number of instruction words.
    #[error("image is {len} bytes, not a multiple of 4")]
    TruncatedImage {
        /// Length of the image in bytes.
        len: usize,
    },

    /// The image does not fit in memory.
    #[error(transparent)]
    Trap(#[from] Trap),

    /// The configuration file is not valid JSON for `Config`.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Writes `words` into memory starting at `base`.
///
/// Word `i` lands at `base + 4 * i`, little-endian, so the executor fetches
/// it back unchanged. An empty slice is a no-op.
///
/// # Errors
///
/// `Trap::StoreAccessFault` if any word would fall outside memory. Nothing
/// is written in that case.
pub fn load_program(mem: &mut Memory, base: u32, words: &[u32]) -> Result<(), Trap> {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    mem.write_bytes(base, &bytes)?;
    debug!(
        base = format_args!("{base:#x}"),
        words = words.len(),
        "program loaded"
    );
    Ok(())
}

/// Splits a flat little-endian image into instruction words.
///
/// # Errors
///
/// `LoadError::TruncatedImage` if the length is not a multiple of 4.
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<u32>, LoadError> {
    if bytes.len() % WORD_BYTES != 0 {
        return Err(LoadError::TruncatedImage { len: bytes.len() });
    }

    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Reads a flat binary image from disk and returns its instruction words.
///
/// # Errors
///
/// `LoadError::Io` if the file cannot be read, `LoadError::TruncatedImage`
/// if its length is not a multiple of 4.
pub fn load_image(path: impl AsRef<Path>) -> Result<Vec<u32>, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "image read");
    words_from_bytes(&bytes)
}

/// Reads a JSON configuration file.
///
/// # Errors
///
/// `LoadError::Io` if the file cannot be read, `LoadError::Config` if it
/// does not describe a valid `Config`.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Config::from_json(&text)?)
}
