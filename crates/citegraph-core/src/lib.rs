//! citegraph-core: Shared types, configuration, and error handling for citegraph.
//!
//! This crate provides the foundations used by the graph engine and the CLI:
//! - The `Publication` trait that graph payloads implement
//! - `Paper` / `PaperId`, the default payload
//! - Configuration loading
//! - The top-level error type

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{CitegraphConfig, OutputFormat};
pub use error::CitegraphError;
pub use types::{Paper, PaperId, Publication};
