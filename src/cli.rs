use anyhow::Result;
use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdca-session")]
#[command(about = "Initialize a new PDCA coding session log")]
#[command(version)]
pub struct SessionCli {
    #[clap(flatten)]
    pub args: SessionArgs,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

#[derive(Args, Clone, Debug)]
pub struct SessionArgs {
    #[arg(help = "Name of the feature being implemented")]
    pub feature: String,

    #[arg(long, help = "Business objective for this session")]
    pub objective: String,

    #[arg(long, help = "Estimated time in hours", default_value_t = 2.0, value_parser = parse_hours)]
    pub time: f64,

    #[arg(long, help = "Output directory (default: current directory)")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "pdca-metrics")]
#[command(about = "Track code quality metrics for PDCA AI coding sessions")]
#[command(version)]
pub struct MetricsCli {
    #[clap(flatten)]
    pub args: MetricsArgs,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

#[derive(Args, Clone, Debug)]
pub struct MetricsArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: PathBuf,

    #[arg(long, help = "Analyze commits since this date/time (e.g. \"7 days ago\", \"2024-01-01\")")]
    pub since: Option<String>,

    #[arg(long, help = "Analyze the last N commits", value_parser = clap::value_parser!(u32).range(1..))]
    pub commits: Option<u32>,

    #[arg(long, help = "TOML file overriding the metric targets")]
    pub targets: Option<PathBuf>,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

fn parse_hours(s: &str) -> std::result::Result<f64, String> {
    let hours: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if !hours.is_finite() || hours <= 0.0 {
        return Err(format!("estimated time must be a positive number of hours, got {s}"));
    }
    Ok(hours)
}

impl SessionCli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.verbose);
        crate::session::exec(self.args)
    }
}

impl MetricsCli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.verbose);
        crate::metrics::exec(self.args)
    }
}
