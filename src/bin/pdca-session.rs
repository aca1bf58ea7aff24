use anyhow::Result;
use pdca::cli::SessionCli;

fn main() -> Result<()> {
    let cli = SessionCli::parse();
    cli.execute()
}
