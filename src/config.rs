use crate::error::{PdcaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Targets the metrics report compares against.
///
/// Percentages are in the 0..=100 range. Any field missing from a targets
/// file keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetThresholds {
    pub large_commit_pct: f64,
    pub sprawling_commit_pct: f64,
    pub test_first_pct: f64,
    pub avg_files: f64,
    pub avg_lines: f64,
}

impl Default for TargetThresholds {
    fn default() -> Self {
        Self {
            large_commit_pct: 20.0,
            sprawling_commit_pct: 10.0,
            test_first_pct: 50.0,
            avg_files: 5.0,
            avg_lines: 100.0,
        }
    }
}

impl TargetThresholds {
    /// Load thresholds from a TOML file, falling back to defaults for absent keys.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PdcaError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let targets: TargetThresholds = toml::from_str(&content)?;
        targets.validate()?;
        tracing::debug!(path = %path.display(), ?targets, "loaded targets");
        Ok(targets)
    }

    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("large_commit_pct", self.large_commit_pct),
            ("sprawling_commit_pct", self.sprawling_commit_pct),
            ("test_first_pct", self.test_first_pct),
            ("avg_files", self.avg_files),
            ("avg_lines", self.avg_lines),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PdcaError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
