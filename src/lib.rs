pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod session;
