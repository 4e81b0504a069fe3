//! `ctloglist list`: every known log with its log ID.

use std::io::Write;

use ct_loglist::{LogListProvider, LogListSource};

use super::load_logs;
use crate::error::CliError;
use crate::output::{LogSummary, LogSummaryList, OutputFormat};

/// List command executor.
pub struct ListCommand<S> {
    provider: LogListProvider<S>,
    download: bool,
}

impl<S: LogListSource> ListCommand<S> {
    /// Create a new list command.
    #[must_use]
    pub const fn new(provider: LogListProvider<S>, download: bool) -> Self {
        Self { provider, download }
    }

    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if the log list cannot be loaded, a key cannot be
    /// decoded, or output fails.
    pub fn execute<W: Write>(&self, writer: &mut W, format: &OutputFormat) -> Result<(), CliError> {
        let logs = load_logs(&self.provider, self.download)?;
        let list = LogSummaryList {
            logs: logs
                .iter()
                .map(LogSummary::try_from)
                .collect::<Result<_, _>>()?,
        };
        format.write(writer, &list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Format;
    use crate::commands::{FakeSource, LOCAL_JSON, REMOTE_JSON};

    fn command(local: Option<&'static str>, download: bool) -> ListCommand<FakeSource> {
        ListCommand::new(
            LogListProvider::new(FakeSource {
                local,
                remote: REMOTE_JSON,
            }),
            download,
        )
    }

    #[test]
    fn lists_local_logs() {
        let mut out = Vec::new();
        command(Some(LOCAL_JSON), false)
            .execute(&mut out, &OutputFormat::new(Format::Table))
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Google 'Pilot' log"));
        assert!(!out.contains("Aviator"));
    }

    #[test]
    fn download_flag_skips_local_file() {
        let mut out = Vec::new();
        command(Some(LOCAL_JSON), true)
            .execute(&mut out, &OutputFormat::new(Format::Json))
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["logs"][0]["description"], "Google 'Aviator' log");
        assert_eq!(
            value["logs"][0]["log_id"],
            "aPaY+B9kgr46jO65KB1M/HFRXWeT1ETRCmesu09P+8Q="
        );
    }

    #[test]
    fn falls_back_to_remote_without_local_file() {
        let mut out = Vec::new();
        command(None, false)
            .execute(&mut out, &OutputFormat::new(Format::Table))
            .unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Aviator"));
    }
}
