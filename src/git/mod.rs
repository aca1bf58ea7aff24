pub mod parse;
pub mod repo;

pub use repo::{CommitSource, GitRepo};
