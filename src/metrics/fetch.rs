use crate::git::parse::{shortstat_lines_changed, stat_file_paths, touches_tests_and_code};
use crate::git::CommitSource;
use crate::model::CommitRecord;
use indicatif::{ProgressBar, ProgressStyle};

/// List commit SHAs, treating a failed git invocation as "no commits".
pub fn enumerate_commits<S: CommitSource>(
    source: &S,
    since: Option<&str>,
    count: Option<u32>,
) -> Vec<String> {
    match source.list_commits(since, count) {
        Ok(commits) => commits,
        Err(e) => {
            tracing::warn!("Error listing commits: {e}");
            Vec::new()
        }
    }
}

/// Build the record for one commit, or `None` if it should be skipped.
pub fn collect_commit<S: CommitSource>(source: &S, sha: &str) -> Option<CommitRecord> {
    let stat = match source.file_stat(sha) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Skipping {sha}: {e}");
            return None;
        }
    };

    let paths = stat_file_paths(&stat);
    if paths.is_empty() {
        tracing::debug!("Skipping {sha}: no file changes in stat output");
        return None;
    }

    let shortstat = match source.short_stat(sha) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Skipping {sha}: {e}");
            return None;
        }
    };

    Some(CommitRecord {
        sha: sha.to_string(),
        files_changed: paths.len() as u64,
        lines_changed: shortstat_lines_changed(&shortstat),
        test_first: touches_tests_and_code(&paths),
    })
}

pub fn collect_records<S: CommitSource>(source: &S, shas: &[String]) -> Vec<CommitRecord> {
    collect_records_with_progress(source, shas, false)
}

pub fn collect_records_with_progress<S: CommitSource>(
    source: &S,
    shas: &[String],
    show_progress: bool,
) -> Vec<CommitRecord> {
    let pb = if show_progress {
        let pb = ProgressBar::new(shas.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb.set_message("Analyzing commits...");
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut records = Vec::with_capacity(shas.len());
    for sha in shas {
        if let Some(record) = collect_commit(source, sha) {
            records.push(record);
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    records
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{PdcaError, Result};
    use std::collections::HashMap;

    /// Canned git output keyed by commit SHA. Missing keys behave like a failed command.
    #[derive(Default)]
    pub(crate) struct StubSource {
        pub commits: Option<Vec<String>>,
        pub stats: HashMap<String, String>,
        pub shortstats: HashMap<String, String>,
    }

    impl StubSource {
        pub fn with_commit(mut self, sha: &str, stat: &str, shortstat: &str) -> Self {
            self.commits
                .get_or_insert_with(Vec::new)
                .push(sha.to_string());
            self.stats.insert(sha.to_string(), stat.to_string());
            self.shortstats.insert(sha.to_string(), shortstat.to_string());
            self
        }
    }

    impl CommitSource for StubSource {
        fn list_commits(&self, _since: Option<&str>, count: Option<u32>) -> Result<Vec<String>> {
            let commits = self
                .commits
                .clone()
                .ok_or_else(|| PdcaError::git(&["log"], "fatal: bad default revision 'HEAD'"))?;
            Ok(match count {
                Some(n) => commits.into_iter().take(n as usize).collect(),
                None => commits,
            })
        }

        fn file_stat(&self, sha: &str) -> Result<String> {
            self.stats
                .get(sha)
                .cloned()
                .ok_or_else(|| PdcaError::git(&["show", "--stat"], "unknown revision"))
        }

        fn short_stat(&self, sha: &str) -> Result<String> {
            self.shortstats
                .get(sha)
                .cloned()
                .ok_or_else(|| PdcaError::git(&["show", "--shortstat"], "unknown revision"))
        }
    }

    #[test]
    fn enumeration_failure_yields_no_commits() {
        let source = StubSource::default();
        assert!(enumerate_commits(&source, Some("7 days ago"), None).is_empty());
    }

    #[test]
    fn enumeration_respects_count() {
        let source = StubSource::default()
            .with_commit("a", "", "")
            .with_commit("b", "", "")
            .with_commit("c", "", "");
        assert_eq!(enumerate_commits(&source, None, Some(2)), vec!["a", "b"]);
    }

    #[test]
    fn collects_record_from_both_queries() {
        let source = StubSource::default().with_commit(
            "abc123",
            " src/bar.py        | 20 ++++++++++\n tests/foo.py      |  8 ++++----\n 2 files changed, 24 insertions(+), 4 deletions(-)",
            " 2 files changed, 24 insertions(+), 4 deletions(-)",
        );

        let record = collect_commit(&source, "abc123").unwrap();
        assert_eq!(
            record,
            CommitRecord {
                sha: "abc123".to_string(),
                files_changed: 2,
                lines_changed: 28,
                test_first: true,
            }
        );
    }

    #[test]
    fn missing_shortstat_skips_commit() {
        let mut source = StubSource::default().with_commit(
            "abc123",
            " src/a.rs | 1 +\n 1 file changed, 1 insertion(+)",
            "",
        );
        source.shortstats.clear();
        assert!(collect_commit(&source, "abc123").is_none());
    }

    #[test]
    fn empty_stat_skips_commit() {
        let source = StubSource::default().with_commit("merge", "", "");
        assert!(collect_commit(&source, "merge").is_none());
    }

    #[test]
    fn failed_commits_are_not_counted() {
        let source = StubSource::default().with_commit(
            "good",
            " src/a.rs | 3 ++-\n 1 file changed, 2 insertions(+), 1 deletion(-)",
            " 1 file changed, 2 insertions(+), 1 deletion(-)",
        );
        let shas = vec!["good".to_string(), "gone".to_string()];

        let records = collect_records(&source, &shas);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sha, "good");
        assert_eq!(records[0].lines_changed, 3);
        assert!(!records[0].test_first);
    }
}
