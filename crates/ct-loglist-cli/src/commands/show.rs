//! `ctloglist show`: one log, looked up by log ID.

use std::io::Write;

use ct_loglist::{encoding, find_log_by_id, LogListProvider, LogListSource, Sha256Digest};

use super::load_logs;
use crate::error::CliError;
use crate::output::{LogDetail, OutputFormat};

/// Show command executor.
pub struct ShowCommand<S> {
    provider: LogListProvider<S>,
    download: bool,
}

impl<S: LogListSource> ShowCommand<S> {
    /// Create a new show command.
    #[must_use]
    pub const fn new(provider: LogListProvider<S>, download: bool) -> Self {
        Self { provider, download }
    }

    /// Execute the show command for the log with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is malformed, no log matches it, the log
    /// list cannot be loaded, or output fails.
    pub fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        id: &str,
    ) -> Result<(), CliError> {
        let log_id = parse_log_id(id)?;
        let logs = load_logs(&self.provider, self.download)?;
        let log = find_log_by_id(&logs, &log_id)
            .ok_or_else(|| CliError::LogNotFound(id.to_string()))?;
        format.write(writer, &LogDetail::try_from(log)?)
    }
}

/// Parses a log ID given as 64 hex digits or as base64.
pub fn parse_log_id(id: &str) -> Result<Sha256Digest, CliError> {
    let id = id.trim();
    let bytes = if id.len() == 64 && id.chars().all(|c| c.is_ascii_hexdigit()) {
        hex::decode(id).map_err(|e| CliError::InvalidArgument(format!("log ID {id}: {e}")))?
    } else {
        encoding::decode_from_pem(id)
            .map_err(|e| CliError::InvalidArgument(format!("log ID {id}: {e}")))?
    };

    Sha256Digest::try_from(bytes.as_slice()).map_err(|_| {
        CliError::InvalidArgument(format!(
            "log ID must be 32 bytes, got {} bytes",
            bytes.len()
        ))
    })
}
