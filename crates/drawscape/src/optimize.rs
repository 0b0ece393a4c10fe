//! SVG optimization pass
//!
//! Re-parses the written document with usvg and serializes the
//! flattened tree next to the original as `<stem>_optimized.svg`. The
//! original file is never touched here; deleting it on success is the
//! caller's decision.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{DrawscapeError, Result};

/// Optimize a saved SVG file, returning the path of the optimized copy.
///
/// Fails with `Optimize` when the file does not parse as SVG; the input
/// file is left as-is in every failure mode.
pub fn optimize_svg(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| DrawscapeError::Optimize(format!("invalid output path {:?}", path)))?;

    let data = fs::read_to_string(path)?;
    let tree = usvg::Tree::from_str(&data, &usvg::Options::default())
        .map_err(|e| DrawscapeError::Optimize(e.to_string()))?;

    let optimized_path = path.with_file_name(format!("{}_optimized.svg", stem));
    fs::write(&optimized_path, tree.to_string(&usvg::WriteOptions::default()))?;
    Ok(optimized_path)
}
