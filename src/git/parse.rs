//! Parsers for `git show --stat` and `git show --shortstat` text.
//!
//! These read git's human-oriented output, so they only look for the tokens
//! that matter: the `|` separating a path from its change bar, and the
//! `insertion`/`deletion` clauses of the summary line.

/// Paths of the file entries in `--stat` output.
///
/// Every line containing `|` is one file entry; the summary line has none.
pub fn stat_file_paths(stat: &str) -> Vec<&str> {
    stat.lines()
        .filter_map(|line| line.split_once('|'))
        .map(|(path, _)| path.trim())
        .collect()
}

/// Inserted plus deleted lines from `--shortstat` output.
///
/// Digits are pulled out of each clause naming insertions or deletions. This
/// is unanchored, so localized or unusual output may sum incorrectly.
pub fn shortstat_lines_changed(shortstat: &str) -> u64 {
    shortstat
        .split(',')
        .filter(|clause| clause.contains("insertion") || clause.contains("deletion"))
        .filter_map(|clause| {
            let digits: String = clause.chars().filter(char::is_ascii_digit).collect();
            digits.parse::<u64>().ok()
        })
        .sum()
}

pub fn is_test_path(path: &str) -> bool {
    path.to_lowercase().contains("test")
}

/// True when the paths mix at least one test path with at least one other.
pub fn touches_tests_and_code<S: AsRef<str>>(paths: &[S]) -> bool {
    let has_test = paths.iter().any(|p| is_test_path(p.as_ref()));
    let has_code = paths.iter().any(|p| !is_test_path(p.as_ref()));
    has_test && has_code
}
