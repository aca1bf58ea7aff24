use crate::config::TargetThresholds;
use crate::model::{AggregateMetrics, CheckStatus, MetricCheck, MetricsReport, SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;
use console::style;
use std::fmt::{self, Write};

const RULE_WIDTH: usize = 60;

/// Ties go to pass on either side.
pub fn evaluate(actual: f64, target: f64, lower_is_better: bool) -> CheckStatus {
    let pass = if lower_is_better {
        actual <= target
    } else {
        actual >= target
    };
    if pass {
        CheckStatus::Pass
    } else {
        CheckStatus::Warn
    }
}

pub fn build_checks(metrics: &AggregateMetrics, targets: &TargetThresholds) -> Vec<MetricCheck> {
    let check = |name: &str, actual: f64, target: f64, lower_is_better: bool| MetricCheck {
        name: name.to_string(),
        actual,
        target,
        lower_is_better,
        status: evaluate(actual, target, lower_is_better),
    };

    vec![
        check("large_commit_pct", metrics.large_commit_pct, targets.large_commit_pct, true),
        check(
            "sprawling_commit_pct",
            metrics.sprawling_commit_pct,
            targets.sprawling_commit_pct,
            true,
        ),
        check("test_first_pct", metrics.test_first_pct, targets.test_first_pct, false),
        check("avg_files", metrics.avg_files_per_commit, targets.avg_files, true),
        check("avg_lines", metrics.avg_lines_per_commit, targets.avg_lines, true),
    ]
}

fn marker(status: CheckStatus) -> String {
    match status {
        CheckStatus::Pass => style("✅").green().to_string(),
        CheckStatus::Warn => style("⚠️").yellow().to_string(),
    }
}

/// Render the text report. `None` metrics render the "nothing to show" line.
pub fn render_report(
    metrics: Option<&AggregateMetrics>,
    targets: &TargetThresholds,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    match metrics {
        Some(m) => write_report(&mut out, m, targets)?,
        None => writeln!(out, "No metrics to display")?,
    }
    Ok(out)
}

fn write_report<W: fmt::Write>(
    out: &mut W,
    m: &AggregateMetrics,
    targets: &TargetThresholds,
) -> fmt::Result {
    let checks = build_checks(m, targets);

    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{}", style("PDCA CODE QUALITY METRICS").bold())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "\nAnalyzed {} commits\n", m.total_commits)?;
    writeln!(out, "{}", style("METRICS vs TARGETS:").bold())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let blocks = [
        ("Large Commits (>100 lines)", Some(m.large_commits), "<", "%"),
        ("Sprawling Commits (>5 files)", Some(m.sprawling_commits), "<", "%"),
        ("Test-First Discipline", Some(m.test_first_commits), ">", "%"),
        ("Avg Files Per Commit", None, "<", ""),
        ("Avg Lines Per Commit", None, "<", ""),
    ];

    // {:.1} rounds to nearest, so 2/3 of commits shows as 66.7%
    for ((label, count, cmp, unit), check) in blocks.iter().zip(&checks) {
        writeln!(out, "{} {}", marker(check.status), label)?;
        match count {
            Some(n) => writeln!(out, "   Actual: {:.1}{unit} ({n} commits)", check.actual)?,
            None => writeln!(out, "   Actual: {:.1}", check.actual)?,
        }
        writeln!(out, "   Target: {cmp}{}{unit}\n", check.target)?;
    }

    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn output_report(metrics: Option<&AggregateMetrics>, targets: &TargetThresholds) -> Result<()> {
    print!("{}", render_report(metrics, targets)?);
    Ok(())
}

pub struct ReportContext<'a> {
    pub repository_path: String,
    pub since: Option<&'a str>,
    pub commits: Option<u32>,
    pub enumerated_commits: usize,
}

pub fn build_report(
    metrics: Option<AggregateMetrics>,
    targets: &TargetThresholds,
    ctx: &ReportContext<'_>,
) -> MetricsReport {
    let checks = metrics
        .as_ref()
        .map(|m| build_checks(m, targets))
        .unwrap_or_default();
    let analyzed = metrics.as_ref().map(|m| m.total_commits).unwrap_or(0);

    MetricsReport {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: ctx.repository_path.clone(),
        since: ctx.since.map(str::to_string),
        commits: ctx.commits,
        enumerated_commits: ctx.enumerated_commits,
        skipped_commits: ctx.enumerated_commits.saturating_sub(analyzed),
        metrics,
        targets: *targets,
        checks,
    }
}

pub fn output_json(report: &MetricsReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
