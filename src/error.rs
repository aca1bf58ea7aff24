use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PdcaError>;

#[derive(Error, Debug)]
pub enum PdcaError {
    #[error("Repository path does not exist: {}", .0.display())]
    RepoNotFound(PathBuf),
    #[error("Not a git repository: {}", .0.display())]
    NotAGitRepo(PathBuf),
    #[error("Git command `git {command}` failed: {message}")]
    GitCommand { command: String, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(String),
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl PdcaError {
    pub fn git(args: &[&str], message: impl Into<String>) -> Self {
        PdcaError::GitCommand {
            command: args.join(" "),
            message: message.into(),
        }
    }
}
