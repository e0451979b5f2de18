//! Dictionary loading with a binary sidecar cache.
//!
//! The CMUdict text source runs to some 130k lines; parsing it dominates
//! startup. After a successful parse the dictionary is written next to the
//! source as `<path>.bin` in bincode form, atomically via a named temp file,
//! and later runs read the cache instead while it is newer than the source.
//! Any trouble with the cache falls back to the text file.

use crate::core::dictionary::PronouncingDictionary;
use crate::error::Result;
use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Loads the dictionary, preferring the sidecar cache when fresh.
pub fn load(path: &Path) -> Result<PronouncingDictionary> {
    let cache = cache_path(path);
    if cache_is_fresh(path, &cache) {
        match load_cache(&cache) {
            Ok(dict) => {
                info!(
                    "loaded {} dictionary entries from cache {}",
                    dict.len(),
                    cache.display()
                );
                return Ok(dict);
            }
            Err(e) => warn!("discarding dictionary cache {}: {}", cache.display(), e),
        }
    }

    let dict = load_text(path)?;
    if let Err(e) = write_cache(&dict, &cache) {
        warn!("could not write dictionary cache {}: {}", cache.display(), e);
    }
    Ok(dict)
}

/// Parses the CMUdict-format text file at `path`, bypassing the cache.
pub fn load_text(path: &Path) -> Result<PronouncingDictionary> {
    let file = File::open(path)?;
    let dict = PronouncingDictionary::from_reader(BufReader::new(file))?;
    info!(
        "parsed {} dictionary entries from {}",
        dict.len(),
        path.display()
    );
    Ok(dict)
}

fn cache_path(source: &Path) -> PathBuf {
    let mut name = source.as_os_str().to_owned();
    name.push(".bin");
    PathBuf::from(name)
}

fn cache_is_fresh(source: &Path, cache: &Path) -> bool {
    let (Ok(src), Ok(dst)) = (fs::metadata(source), fs::metadata(cache)) else {
        return false;
    };
    match (src.modified(), dst.modified()) {
        (Ok(s), Ok(d)) => d >= s,
        _ => false,
    }
}

fn load_cache(cache: &Path) -> Result<PronouncingDictionary> {
    let file = File::open(cache)?;
    Ok(bincode::deserialize_from(BufReader::new(file))?)
}

fn write_cache(dict: &PronouncingDictionary, cache: &Path) -> Result<()> {
    let parent = cache.parent().unwrap_or_else(|| Path::new("."));
    let temp = NamedTempFile::new_in(parent)?;
    let writer = BufWriter::new(&temp);
    bincode::serialize_into(writer, dict)?;
    temp.persist(cache).map_err(|e| e.error)?;
    Ok(())
}
