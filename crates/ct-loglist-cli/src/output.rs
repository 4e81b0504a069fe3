//! Output formatting for CLI commands.
//!
//! Supports table (human-readable) and JSON output formats.

use std::io::Write;

use ct_loglist::Log;
use serde::Serialize;

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone, Default)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Get the current format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Write a serializable value to the output.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Table => {
                value.write_table(writer)?;
            }
        }
        Ok(())
    }

    /// Write a serializable value to a string.
    pub fn to_string<T>(&self, value: &T) -> Result<String, CliError>
    where
        T: Serialize + TableDisplay,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| CliError::Format(format!("UTF-8 error: {e}")))
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as a human-readable table.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// One row of `ctloglist list`.
#[derive(Debug, Clone, Serialize)]
pub struct LogSummary {
    /// Log ID, base64.
    pub log_id: String,
    /// Log description.
    pub description: String,
    /// Submission URL prefix.
    pub url: String,
    /// Maximum merge delay in seconds.
    pub maximum_merge_delay: u64,
    /// Operator names.
    pub operated_by: Vec<String>,
}

impl TryFrom<&Log> for LogSummary {
    type Error = CliError;

    fn try_from(log: &Log) -> Result<Self, Self::Error> {
        Ok(Self {
            log_id: log.id_base64()?,
            description: log.description().to_string(),
            url: log.url().to_string(),
            maximum_merge_delay: log.maximum_merge_delay(),
            operated_by: log.operated_by().to_vec(),
        })
    }
}

/// Output of `ctloglist list`.
#[derive(Debug, Clone, Serialize)]
pub struct LogSummaryList {
    /// Logs in registry order.
    pub logs: Vec<LogSummary>,
}

impl TableDisplay for LogSummaryList {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        if self.logs.is_empty() {
            writeln!(writer, "No logs in log list")?;
            return Ok(());
        }

        writeln!(
            writer,
            "{:<44}  {:<32}  {:<32}  {:>7}  OPERATORS",
            "LOG ID", "DESCRIPTION", "URL", "MMD (s)"
        )?;
        writeln!(writer, "{}", "─".repeat(132))?;

        for log in &self.logs {
            writeln!(
                writer,
                "{:<44}  {:<32}  {:<32}  {:>7}  {}",
                log.log_id,
                truncate(&log.description, 32),
                truncate(&log.url, 32),
                log.maximum_merge_delay,
                log.operated_by.join(", ")
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "Total: {} log(s)", self.logs.len())?;
        Ok(())
    }
}

/// Output of `ctloglist show`.
#[derive(Debug, Clone, Serialize)]
pub struct LogDetail {
    /// Log description.
    pub description: String,
    /// Submission URL prefix.
    pub url: String,
    /// Maximum merge delay in seconds.
    pub maximum_merge_delay: u64,
    /// Operator names.
    pub operated_by: Vec<String>,
    /// Log ID, base64.
    pub log_id: String,
    /// Log ID, hex.
    pub log_id_hex: String,
    /// Log ID as a PEM block.
    pub log_id_pem: String,
    /// Public key as a PEM block.
    pub pubkey: String,
}

impl TryFrom<&Log> for LogDetail {
    type Error = CliError;

    fn try_from(log: &Log) -> Result<Self, Self::Error> {
        Ok(Self {
            description: log.description().to_string(),
            url: log.url().to_string(),
            maximum_merge_delay: log.maximum_merge_delay(),
            operated_by: log.operated_by().to_vec(),
            log_id: log.id_base64()?,
            log_id_hex: hex::encode(log.id_der()?),
            log_id_pem: log.id_pem()?.to_string(),
            pubkey: log.pubkey().to_string(),
        })
    }
}

impl TableDisplay for LogDetail {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer, "{}", self.description)?;
        writeln!(writer, "══════════════════════════════════")?;
        writeln!(writer, "URL:          {}", self.url)?;
        writeln!(writer, "MMD:          {} s", self.maximum_merge_delay)?;
        writeln!(writer, "Operated by:  {}", self.operated_by.join(", "))?;
        writeln!(writer, "Log ID:       {}", self.log_id)?;
        writeln!(writer, "Log ID (hex): {}", self.log_id_hex)?;
        writeln!(writer)?;
        writeln!(writer, "{}", self.log_id_pem)?;
        writeln!(writer)?;
        writeln!(writer, "{}", self.pubkey)?;
        Ok(())
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PILOT_KEY: &str = "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEfahLEimAoz2t01p3uMziiLOl/fHTDM0YDOhBRuiBARsV4UvxG2LdNgoIGLrtCzWE0J5APC2em4JlvR8EEEFMoA==";

    fn pilot() -> Log {
        Log::new(
            "Google 'Pilot' log",
            PILOT_KEY,
            "ct.googleapis.com/pilot/",
            86400,
            vec!["Google".into()],
        )
    }

    #[test]
    fn output_format_default_is_table() {
        let fmt = OutputFormat::default();
        assert_eq!(fmt.format(), Format::Table);
    }

    #[test]
    fn summary_table_output() {
        let list = LogSummaryList {
            logs: vec![LogSummary::try_from(&pilot()).unwrap()],
        };
        let output = OutputFormat::new(Format::Table).to_string(&list).unwrap();

        assert!(output.contains("LOG ID"));
        assert!(output.contains("pLkJkLQYWBSHuxOizGdwCjw1mAT5G9+443fNDsgN3BA="));
        assert!(output.contains("Google 'Pilot' log"));
        assert!(output.contains("86400"));
        assert!(output.contains("Total: 1 log(s)"));
    }

    #[test]
    fn empty_summary_table() {
        let list = LogSummaryList { logs: vec![] };
        let output = OutputFormat::new(Format::Table).to_string(&list).unwrap();
        assert_eq!(output, "No logs in log list\n");
    }

    #[test]
    fn summary_json_output() {
        let list = LogSummaryList {
            logs: vec![LogSummary::try_from(&pilot()).unwrap()],
        };
        let output = OutputFormat::new(Format::Json).to_string(&list).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["logs"][0]["url"], "ct.googleapis.com/pilot/");
        assert_eq!(value["logs"][0]["operated_by"][0], "Google");
        assert_eq!(value["logs"][0]["maximum_merge_delay"], 86400);
    }

    #[test]
    fn detail_includes_pem_blocks() {
        let detail = LogDetail::try_from(&pilot()).unwrap();
        assert_eq!(
            detail.log_id_hex,
            "a4b90990b418581487bb13a2cc67700a3c359804f91bdfb8e377cd0ec80ddc10"
        );

        let output = OutputFormat::new(Format::Table).to_string(&detail).unwrap();
        assert!(output.contains("-----BEGIN CT LOG ID-----"));
        assert!(output.contains("-----BEGIN PUBLIC KEY-----"));
        assert!(output.contains("Operated by:  Google"));
    }

    #[test]
    fn undecodable_key_is_an_error() {
        let log = Log::new("broken", "%%%", "ct.example.com/", 86400, vec![]);
        assert!(matches!(
            LogSummary::try_from(&log),
            Err(CliError::LogList(ct_loglist::Error::Decoding(_)))
        ));
    }

    #[test]
    fn truncate_short_string() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_long_string() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn truncate_multibyte() {
        assert_eq!(truncate("Let’s Encrypt Oak", 8), "Let’s...");
    }

    #[test]
    fn truncate_very_short_max() {
        assert_eq!(truncate("hello", 3), "hel");
    }
}
