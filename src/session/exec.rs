use crate::cli::SessionArgs;
use crate::model::SessionParameters;
use super::{render, sanitize_feature, write_session_file};
use anyhow::Context;
use chrono::Local;
use console::style;

pub fn exec(args: SessionArgs) -> anyhow::Result<()> {
    let output_dir = match args.output {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    let params = SessionParameters {
        feature: args.feature,
        objective: args.objective,
        estimated_hours: args.time,
        created_at: Local::now().naive_local(),
    };

    if !output_dir.exists() {
        println!("Creating output directory: {}", output_dir.display());
    }

    let content = render(&params);
    let token = sanitize_feature(&params.feature);
    let session_file = write_session_file(&output_dir, &params.date_string(), &token, content)
        .with_context(|| format!("Error creating session log in {}", output_dir.display()))?;

    println!(
        "\n{} Session log created: {}",
        style("✅").green(),
        session_file.path.display()
    );
    println!("\n{}", style("Next steps:").bold());
    println!("1. Review Working Agreements");
    println!("2. Load references/analysis-prompt.md");
    println!("3. Fill in the session log as you progress");
    println!("\nGood luck with your session! 🚀\n");

    Ok(())
}
