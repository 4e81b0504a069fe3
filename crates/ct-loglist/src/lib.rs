//! Certificate Transparency log list.
#![forbid(unsafe_code)]
//!
//! This crate loads the registry of known CT logs and derives the
//! identifiers consumers need to match signed certificate timestamps to logs.
//!
//! # Overview
//!
//! The `ct-loglist` crate provides:
//! - The [`Log`] record with lazily derived, cached key material
//!   (`key_der`, `id_der`, `id_pem`, `pubkey`, `pubkey_hash`)
//! - Parsing of registry documents, resolving operator IDs to names
//! - A process-wide cached log list, read from a local `log_list.json` or
//!   downloaded from the well-known registry URL
//!
//! # Example
//!
//! ```
//! use ct_loglist::{find_log_by_id, parse_log_list_json};
//!
//! let json = br#"{
//!     "logs": [{
//!         "description": "Google 'Pilot' log",
//!         "key": "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEfahLEimAoz2t01p3uMziiLOl/fHTDM0YDOhBRuiBARsV4UvxG2LdNgoIGLrtCzWE0J5APC2em4JlvR8EEEFMoA==",
//!         "url": "ct.googleapis.com/pilot/",
//!         "maximum_merge_delay": 86400,
//!         "operated_by": [0]
//!     }],
//!     "operators": [{"id": 0, "name": "Google"}]
//! }"#;
//!
//! let logs = parse_log_list_json(json).unwrap();
//! let pilot = &logs[0];
//! assert_eq!(pilot.operated_by(), ["Google".to_string()]);
//! assert_eq!(pilot.id_base64().unwrap(), "pLkJkLQYWBSHuxOizGdwCjw1mAT5G9+443fNDsgN3BA=");
//!
//! let id = *pilot.id_der().unwrap();
//! assert!(find_log_by_id(&logs, &id).is_some());
//! ```
//!
//! # Modules
//!
//! - [`log`] - The log record and its derived fields
//! - [`parser`] - Registry document parsing
//! - [`provider`] - Local/remote retrieval and the process-wide cache
//! - [`config`] - Registry locations
//! - [`encoding`] - PEM, base64 and SHA-256 helpers
//! - [`error`] - Error types

pub mod config;
pub mod encoding;
pub mod error;
pub mod log;
pub mod parser;
pub mod provider;

// Re-export commonly used types at crate root
pub use config::{LogListConfig, DEFAULT_LOG_LIST_URL};
pub use encoding::Sha256Digest;
pub use error::{Error, Result};
pub use log::{find_log_by_id, Log};
pub use parser::{parse_log_list, parse_log_list_json, LogListDocument, Operator, RawLog};
pub use provider::{
    download_log_list, get_log_list, HttpFileSource, LogListProvider, LogListSource,
};
