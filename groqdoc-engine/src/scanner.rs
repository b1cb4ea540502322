//! Deterministic discovery of Java source files.
//!
//! The walk is sorted by path so the scan pass observes units in the
//! same order on every run; accumulation order in the context index,
//! and therefore prompt content, depends on it.

use std::path::{Path, PathBuf};

use groqdoc_core::errors::ScanError;
use ignore::WalkBuilder;
use tracing::debug;

/// One compilation unit as found on disk.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub text: String,
}

/// Collect every `.java` file under `root`, sorted by path. Files larger
/// than `max_file_size` are skipped.
pub fn collect_units(root: &Path, max_file_size: u64) -> Result<Vec<SourceUnit>, ScanError> {
    let mut builder = WalkBuilder::new(root);
    builder.sort_by_file_path(|a, b| a.cmp(b));

    let mut units = Vec::new();
    for entry in builder.build() {
        let entry = entry.map_err(|e| ScanError::Walk(e.to_string()))?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        if !is_java_source(path) {
            continue;
        }
        if let Ok(metadata) = entry.metadata() {
            if metadata.len() > max_file_size {
                debug!(path = %path.display(), size = metadata.len(), "skipping oversized file");
                continue;
            }
        }
        let text = std::fs::read_to_string(path).map_err(|e| ScanError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        units.push(SourceUnit {
            path: path.to_path_buf(),
            text,
        });
    }
    Ok(units)
}

fn is_java_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("java"))
}
