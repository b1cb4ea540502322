//! The strict scan-then-transform driver.
//!
//! Pass one parses every discovered unit and fills the implementer
//! context index. Only when the whole tree has been indexed does pass
//! two start transforming units, so an interface always sees every
//! implementer in the tree regardless of file ordering. Per-unit
//! failures in either pass are accumulated and the run continues;
//! signature resolution failures abort the run, because they mean the
//! structural model itself cannot be trusted.

use std::path::{Path, PathBuf};

use groqdoc_core::config::GroqdocConfig;
use groqdoc_core::errors::{PipelineError, PipelineResult, ScanError};
use tracing::{info, warn};

use crate::client::GroqClient;
use crate::index::ContextIndex;
use crate::parsers::JavaParser;
use crate::recipe::DocRecipe;
use crate::scanner::collect_units;

/// Counters reported after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStats {
    pub units_scanned: usize,
    /// Interfaces with at least one recorded implementer.
    pub indexed_interfaces: usize,
    pub interfaces_documented: usize,
    pub placeholders_emitted: usize,
    /// Units whose transform failed and were carried through unchanged.
    pub units_failed: usize,
}

/// One unit after the transform pass.
#[derive(Debug)]
pub struct TransformedUnit {
    pub path: PathBuf,
    pub text: String,
    pub changed: bool,
}

#[derive(Debug, Default)]
pub struct PipelineOutcome {
    pub units: Vec<TransformedUnit>,
    pub stats: PipelineStats,
}

pub struct Pipeline {
    config: GroqdocConfig,
    client: GroqClient,
}

impl Pipeline {
    pub fn new(config: GroqdocConfig) -> Result<Self, PipelineError> {
        let client = GroqClient::from_config(&config)?;
        Ok(Self { config, client })
    }

    /// Run both passes over the tree under `root`.
    ///
    /// The returned result carries the transformed units plus any
    /// non-fatal per-unit errors. A unit that fails to parse during the
    /// scan pass still participates in the transform pass; a unit whose
    /// transform fails is passed through with its input text.
    pub fn run(&self, root: &Path) -> Result<PipelineResult<PipelineOutcome>, PipelineError> {
        let units = collect_units(root, self.config.max_file_size)?;
        info!(root = %root.display(), units = units.len(), "scan pass");

        let mut result = PipelineResult::new(PipelineOutcome::default());
        let mut parser = JavaParser::new()?;

        let mut index = ContextIndex::new();
        for unit in &units {
            match parser.parse_unit(&unit.text) {
                Ok(parsed) => index.record_unit(&parsed, &unit.text),
                Err(error) => {
                    warn!(path = %unit.path.display(), %error, "scan pass skipped unit");
                    result.add_error(error.into());
                }
            }
        }
        result.data.stats.units_scanned = units.len();
        result.data.stats.indexed_interfaces = index.len();
        info!(indexed_interfaces = index.len(), "transform pass");

        let recipe = DocRecipe::new(&self.client);
        for unit in units {
            match recipe.transform_unit(&mut parser, &unit.text, &index) {
                Ok(transform) => {
                    result.data.stats.interfaces_documented += transform.interfaces_documented;
                    result.data.stats.placeholders_emitted += transform.placeholders_emitted;
                    result.data.units.push(TransformedUnit {
                        path: unit.path,
                        text: transform.text,
                        changed: transform.changed,
                    });
                }
                Err(error @ PipelineError::Signature(_)) => return Err(error),
                Err(error) => {
                    warn!(path = %unit.path.display(), %error, "transform failed, unit unchanged");
                    result.add_error(error);
                    result.data.stats.units_failed += 1;
                    result.data.units.push(TransformedUnit {
                        path: unit.path,
                        text: unit.text,
                        changed: false,
                    });
                }
            }
        }

        info!(
            documented = result.data.stats.interfaces_documented,
            placeholders = result.data.stats.placeholders_emitted,
            failed = result.data.stats.units_failed,
            "run complete"
        );
        Ok(result)
    }
}

/// Write every changed unit back to its own path. Returns how many files
/// were rewritten.
pub fn write_units(units: &[TransformedUnit]) -> Result<usize, ScanError> {
    let mut written = 0;
    for unit in units {
        if !unit.changed {
            continue;
        }
        std::fs::write(&unit.path, &unit.text).map_err(|e| ScanError::Write {
            path: unit.path.display().to_string(),
            message: e.to_string(),
        })?;
        written += 1;
    }
    Ok(written)
}
