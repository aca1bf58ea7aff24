use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::TargetThresholds;

pub const SCHEMA_VERSION: u32 = 1;

/// Lines changed above which a commit counts as large.
pub const LARGE_COMMIT_LINES: u64 = 100;
/// Files changed above which a commit counts as sprawling.
pub const SPRAWLING_COMMIT_FILES: u64 = 5;

#[derive(Debug, Clone)]
pub struct SessionParameters {
    pub feature: String,
    pub objective: String,
    pub estimated_hours: f64,
    pub created_at: NaiveDateTime,
}

impl SessionParameters {
    pub fn date_string(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }

    pub fn start_time_string(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone)]
pub struct SessionFile {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub sha: String,
    pub files_changed: u64,
    pub lines_changed: u64,
    pub test_first: bool,
}

impl CommitRecord {
    pub fn is_large(&self) -> bool {
        self.lines_changed > LARGE_COMMIT_LINES
    }

    pub fn is_sprawling(&self) -> bool {
        self.files_changed > SPRAWLING_COMMIT_FILES
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateMetrics {
    pub total_commits: usize,
    pub large_commits: usize,
    pub large_commit_pct: f64,
    pub sprawling_commits: usize,
    pub sprawling_commit_pct: f64,
    pub test_first_commits: usize,
    pub test_first_pct: f64,
    pub avg_files_per_commit: f64,
    pub avg_lines_per_commit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warn,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricCheck {
    pub name: String,
    pub actual: f64,
    pub target: f64,
    pub lower_is_better: bool,
    pub status: CheckStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub since: Option<String>,
    pub commits: Option<u32>,
    pub enumerated_commits: usize,
    pub skipped_commits: usize,
    pub metrics: Option<AggregateMetrics>,
    pub targets: TargetThresholds,
    pub checks: Vec<MetricCheck>,
}
