pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod output;
pub mod pattern;
pub mod replay;
pub mod runner;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use engine::{
    Algorithm, MatchRecord, RunRequest, RunResult, ScanPolicy, Step, StepDetail, run, steps,
};
pub use error::{Error, ExitCode, Result};
pub use pattern::{Pattern, PatternSet};
pub use replay::Replay;
