use crate::cli::MetricsArgs;
use crate::config::TargetThresholds;
use crate::git::GitRepo;
use super::{aggregate, build_report, collect_records_with_progress, enumerate_commits, output_json, output_report, ReportContext};
use anyhow::Context;
use std::io::IsTerminal;

pub fn exec(args: MetricsArgs) -> anyhow::Result<()> {
    let repo = GitRepo::open(&args.repo).context("Failed to open git repository")?;
    let targets = TargetThresholds::load_or_default(args.targets.as_ref())
        .context("Failed to load metric targets")?;

    if !args.json {
        println!("Fetching commits...");
    }
    let commits = enumerate_commits(&repo, args.since.as_deref(), args.commits);

    if commits.is_empty() {
        if args.json {
            let ctx = report_context(&repo, &args, 0);
            output_json(&build_report(None, &targets, &ctx))?;
        } else {
            println!("No commits found matching criteria");
        }
        return Ok(());
    }

    let show_progress = !args.json && std::io::stderr().is_terminal();
    if !args.json {
        println!("Analyzing {} commits...", commits.len());
    }
    let records = collect_records_with_progress(&repo, &commits, show_progress);
    tracing::debug!(
        enumerated = commits.len(),
        collected = records.len(),
        "commit collection finished"
    );

    let metrics = aggregate(&records);

    if args.json {
        let ctx = report_context(&repo, &args, commits.len());
        output_json(&build_report(metrics, &targets, &ctx))?;
    } else {
        output_report(metrics.as_ref(), &targets)?;
    }

    Ok(())
}

fn report_context<'a>(repo: &GitRepo, args: &'a MetricsArgs, enumerated: usize) -> ReportContext<'a> {
    ReportContext {
        repository_path: repo.path().to_string_lossy().to_string(),
        since: args.since.as_deref(),
        commits: args.commits,
        enumerated_commits: enumerated,
    }
}
