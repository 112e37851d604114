// crates/yatra-core/src/loader/cache.rs
//! Binary dataset cache next to the table files.

use crate::error::Result;
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

const CACHE_LIMIT: u64 = 256 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when the `compact` feature is on.
    pub fn active() -> Self {
        if cfg!(feature = "compact") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(CACHE_LIMIT)
        .allow_trailing_bytes()
}

/// True if `cache_path` exists and is at least as new as every source file.
/// A source that is missing or cannot be read makes the cache stale.
pub fn is_cache_fresh<'a>(cache_path: &Path, sources: impl IntoIterator<Item = &'a Path>) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    for src in sources {
        match fs::metadata(src).and_then(|m| m.modified()) {
            Ok(src_time) if src_time <= cache_time => {}
            _ => return false,
        }
    }
    true
}

/// Writes any serializable value to `path`.
pub fn write_generic<T: Serialize>(path: &Path, value: &T, compression: CompressionMode) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut writer = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                options().serialize_into(&mut encoder, value)?;
                // finish() writes the gzip trailer and hands back the file writer
                encoder.finish()?
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(TourError::InvalidData(
                    "gzip requested but 'compact' is disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            let mut writer = writer;
            options().serialize_into(&mut writer, value)?;
            writer
        }
    };

    writer.flush()?;
    Ok(())
}

/// Reads a value written by [`write_generic`] with the same compression.
pub fn read_generic<T: DeserializeOwned>(path: &Path, compression: CompressionMode) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);

    let stream: Box<dyn Read> = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Box::new(GzDecoder::new(reader))
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(TourError::InvalidData(
                    "gzip requested but 'compact' is disabled".into(),
                ));
            }
        }
        CompressionMode::None => Box::new(reader),
    };

    Ok(options().deserialize_from(stream)?)
}
