//! citegraph-cli: Script runner and REPL for the citation graph.
//!
//! Parses a small line-oriented command language, executes each command
//! against a `CitationGraph<Paper>`, and reports one outcome per command.

pub mod error;
pub mod runner;
pub mod script;

pub use error::CliError;
pub use runner::{Outcome, Report, ScriptRunner, Value};
pub use script::Command;
