use anyhow::Result;
use pdca::cli::MetricsCli;

fn main() -> Result<()> {
    let cli = MetricsCli::parse();
    cli.execute()
}
