//! # ct-loglist-cli
//!
//! The `ctloglist` command-line tool.
//!
//! Provides commands for:
//! - Listing the known CT logs with their log IDs
//! - Showing one log's public key and log ID in PEM form
//!
//! The log list comes from a local registry file when one exists and is
//! downloaded otherwise; see [`ct_loglist::provider`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, Format};
pub use error::CliError;
pub use output::OutputFormat;
