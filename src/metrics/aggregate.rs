use crate::model::{AggregateMetrics, CommitRecord};

/// Reduce commit records to summary metrics. `None` when there are no records.
pub fn aggregate(records: &[CommitRecord]) -> Option<AggregateMetrics> {
    if records.is_empty() {
        return None;
    }

    let total = records.len();
    let mut large_commits = 0usize;
    let mut sprawling_commits = 0usize;
    let mut test_first_commits = 0usize;
    let mut total_files = 0u64;
    let mut total_lines = 0u64;

    for record in records {
        if record.is_large() {
            large_commits += 1;
        }
        if record.is_sprawling() {
            sprawling_commits += 1;
        }
        if record.test_first {
            test_first_commits += 1;
        }
        total_files += record.files_changed;
        total_lines += record.lines_changed;
    }

    let pct = |count: usize| 100.0 * count as f64 / total as f64;

    Some(AggregateMetrics {
        total_commits: total,
        large_commits,
        large_commit_pct: pct(large_commits),
        sprawling_commits,
        sprawling_commit_pct: pct(sprawling_commits),
        test_first_commits,
        test_first_pct: pct(test_first_commits),
        avg_files_per_commit: total_files as f64 / total as f64,
        avg_lines_per_commit: total_lines as f64 / total as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(files: u64, lines: u64, test_first: bool) -> CommitRecord {
        CommitRecord {
            sha: format!("{files}-{lines}"),
            files_changed: files,
            lines_changed: lines,
            test_first,
        }
    }

    #[test]
    fn empty_input_has_no_metrics() {
        assert_eq!(aggregate(&[]), None);
    }

    #[test]
    fn two_commit_summary() {
        let m = aggregate(&[record(3, 50, false), record(6, 150, true)]).unwrap();
        assert_eq!(m.total_commits, 2);
        assert_eq!(m.large_commits, 1);
        assert_eq!(m.large_commit_pct, 50.0);
        assert_eq!(m.sprawling_commits, 1);
        assert_eq!(m.sprawling_commit_pct, 50.0);
        assert_eq!(m.test_first_commits, 1);
        assert_eq!(m.test_first_pct, 50.0);
        assert_eq!(m.avg_files_per_commit, 4.5);
        assert_eq!(m.avg_lines_per_commit, 100.0);
    }

    #[test]
    fn thresholds_are_strict() {
        // exactly 100 lines / 5 files is neither large nor sprawling
        let m = aggregate(&[record(5, 100, false)]).unwrap();
        assert_eq!(m.large_commits, 0);
        assert_eq!(m.sprawling_commits, 0);
    }

    #[test]
    fn percentages_keep_full_precision() {
        let m = aggregate(&[record(1, 200, false), record(1, 1, false), record(1, 1, false)])
            .unwrap();
        assert!((m.large_commit_pct - 100.0 / 3.0).abs() < 1e-12);
    }
}
