use crate::error::Result;
use crate::model::SessionFile;
use std::fs;
use std::path::Path;

pub fn session_file_name(date: &str, token: &str) -> String {
    format!("session_{date}_{token}.md")
}

/// Write `content` as the session log for `token` on `date` inside `output_dir`.
///
/// Missing directories are created. An existing log with the same name is overwritten.
pub fn write_session_file(
    output_dir: &Path,
    date: &str,
    token: &str,
    content: String,
) -> Result<SessionFile> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(session_file_name(date, token));
    fs::write(&path, &content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "session log written");
    Ok(SessionFile { path, content })
}
