//! Log list document parsing.
//!
//! JSON shape:
//! ```json
//! {
//!   "logs": [
//!     {
//!       "description": "Google 'Pilot' log",
//!       "key": "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAE...",
//!       "url": "ct.googleapis.com/pilot/",
//!       "maximum_merge_delay": 86400,
//!       "operated_by": [0]
//!     }
//!   ],
//!   "operators": [
//!     { "id": 0, "name": "Google" }
//!   ]
//! }
//! ```
//!
//! Unknown keys are ignored. Operator IDs in `operated_by` are replaced by the
//! names of the matching operators, in the order the operators are listed.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::log::Log;

/// A log list as it appears on disk or on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogListDocument {
    /// Log entries, in registry order.
    #[serde(default)]
    pub logs: Option<Vec<RawLog>>,

    /// Operators referenced by the log entries.
    #[serde(default)]
    pub operators: Option<Vec<Operator>>,
}

/// Raw log entry shape. Every field is required; presence is checked when
/// the entry is turned into a [`Log`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLog {
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,

    /// Base64 `SubjectPublicKeyInfo`.
    #[serde(default)]
    pub key: Option<String>,

    /// Submission URL prefix.
    #[serde(default)]
    pub url: Option<String>,

    /// Maximum merge delay in seconds.
    #[serde(default)]
    pub maximum_merge_delay: Option<u64>,

    /// Operator IDs.
    #[serde(default)]
    pub operated_by: Option<Vec<u64>>,
}

/// A log operator. Only used to resolve `operated_by`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operator {
    /// Operator ID referenced from log entries.
    #[serde(default)]
    pub id: Option<u64>,

    /// Operator display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl LogListDocument {
    /// Parses a document from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DocumentParse`] if the bytes are not a JSON object of
    /// the expected shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl std::str::FromStr for LogListDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Resolved operator, with both required fields present.
struct ResolvedOperator {
    id: u64,
    name: String,
}

/// Turns a log list document into [`Log`] records, one per entry, in order.
///
/// # Errors
///
/// Returns [`Error::MissingField`] if the document, any log entry, or any
/// operator entry lacks a required field. A single bad entry fails the whole
/// list.
pub fn parse_log_list(document: LogListDocument) -> Result<Vec<Log>> {
    let raw_logs = document.logs.ok_or(Error::MissingField {
        entry: "document",
        index: 0,
        field: "logs",
    })?;
    let raw_operators = document.operators.ok_or(Error::MissingField {
        entry: "document",
        index: 0,
        field: "operators",
    })?;

    let operators = raw_operators
        .into_iter()
        .enumerate()
        .map(|(index, operator)| resolve_operator(index, operator))
        .collect::<Result<Vec<_>>>()?;

    let logs = raw_logs
        .into_iter()
        .enumerate()
        .map(|(index, raw)| raw.into_log(index, &operators))
        .collect::<Result<Vec<_>>>()?;

    debug!(logs = logs.len(), operators = operators.len(), "parsed log list");
    Ok(logs)
}

/// Parses JSON bytes straight into [`Log`] records.
///
/// # Errors
///
/// Returns [`Error::DocumentParse`] for malformed JSON and
/// [`Error::MissingField`] for incomplete entries.
pub fn parse_log_list_json(bytes: &[u8]) -> Result<Vec<Log>> {
    parse_log_list(LogListDocument::from_slice(bytes)?)
}

fn resolve_operator(index: usize, operator: Operator) -> Result<ResolvedOperator> {
    let missing = |field| Error::MissingField {
        entry: "operator",
        index,
        field,
    };
    Ok(ResolvedOperator {
        id: operator.id.ok_or_else(|| missing("id"))?,
        name: operator.name.ok_or_else(|| missing("name"))?,
    })
}

impl RawLog {
    fn into_log(self, index: usize, operators: &[ResolvedOperator]) -> Result<Log> {
        let missing = |field| Error::MissingField {
            entry: "log",
            index,
            field,
        };

        let description = self.description.ok_or_else(|| missing("description"))?;
        let key = self.key.ok_or_else(|| missing("key"))?;
        let url = self.url.ok_or_else(|| missing("url"))?;
        let maximum_merge_delay = self
            .maximum_merge_delay
            .ok_or_else(|| missing("maximum_merge_delay"))?;
        let operator_ids = self.operated_by.ok_or_else(|| missing("operated_by"))?;

        for id in &operator_ids {
            if !operators.iter().any(|operator| operator.id == *id) {
                warn!(log = %description, operator_id = id, "log references unknown operator");
            }
        }

        let operated_by = operators
            .iter()
            .filter(|operator| operator_ids.contains(&operator.id))
            .map(|operator| operator.name.clone())
            .collect();

        Ok(Log::new(description, key, url, maximum_merge_delay, operated_by))
    }
}
