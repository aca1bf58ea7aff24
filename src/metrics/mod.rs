pub mod aggregate;
pub mod exec;
pub mod fetch;
pub mod output;

pub use aggregate::aggregate;
pub use exec::exec;
pub use fetch::{collect_commit, collect_records, collect_records_with_progress, enumerate_commits};
pub use output::{build_checks, build_report, evaluate, output_json, output_report, render_report, ReportContext};
