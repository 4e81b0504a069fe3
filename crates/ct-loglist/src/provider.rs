//! Log list retrieval and the process-wide cache.
//!
//! Resolution order for [`LogListProvider::get`]:
//! 1. the list computed by an earlier successful call;
//! 2. the local registry file, if it exists;
//! 3. a download of the registry document.
//!
//! A failure at any step is returned to the caller. A local file that exists
//! but does not parse is an error; it never falls back to the network.

use std::fs;

use once_cell::sync::{Lazy, OnceCell};
use tracing::debug;

use crate::config::LogListConfig;
use crate::error::{Error, Result};
use crate::log::Log;
use crate::parser::parse_log_list_json;

/// Raw access to the places a log list can come from.
///
/// This trait allows for testing with fake implementations.
pub trait LogListSource {
    /// Returns the local registry document, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if a local document exists but cannot be read.
    fn read_local(&self) -> Result<Option<Vec<u8>>>;

    /// Downloads the registry document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the download fails.
    fn fetch_remote(&self) -> Result<Vec<u8>>;
}

/// Reads the registry from the filesystem and downloads it over HTTPS.
#[derive(Debug, Clone, Default)]
pub struct HttpFileSource {
    config: LogListConfig,
}

impl HttpFileSource {
    /// Creates a source for the given configuration.
    #[must_use]
    pub const fn new(config: LogListConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &LogListConfig {
        &self.config
    }
}

impl LogListSource for HttpFileSource {
    fn read_local(&self) -> Result<Option<Vec<u8>>> {
        let path = &self.config.local_path;
        if !path.is_file() {
            debug!(path = %path.display(), "no local log list");
            return Ok(None);
        }

        debug!(path = %path.display(), "reading local log list");
        fs::read(path).map(Some).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })
    }

    fn fetch_remote(&self) -> Result<Vec<u8>> {
        debug!(url = %self.config.url, "downloading log list");

        let client = reqwest::blocking::Client::builder()
            .user_agent(self.config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Transport(format!("failed to build HTTP client: {e}")))?;

        let response = client
            .get(&self.config.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::Transport(e.to_string()))?;

        let body = response
            .bytes()
            .map_err(|e| Error::Transport(format!("failed to read response body: {e}")))?;

        Ok(body.to_vec())
    }
}

/// A log list source paired with a compute-once cache.
pub struct LogListProvider<S = HttpFileSource> {
    source: S,
    logs: OnceCell<Vec<Log>>,
}

impl<S: LogListSource> LogListProvider<S> {
    /// Creates a provider with an empty cache.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            logs: OnceCell::new(),
        }
    }

    /// Returns the underlying source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the log list, loading it on the first successful call.
    ///
    /// Concurrent first calls block until one of them has loaded the list.
    /// Errors are not cached.
    pub fn get(&self) -> Result<&[Log]> {
        self.logs.get_or_try_init(|| self.load()).map(Vec::as_slice)
    }

    /// Downloads and parses the log list, bypassing the local file and the
    /// cache.
    pub fn download(&self) -> Result<Vec<Log>> {
        let body = self.source.fetch_remote()?;
        parse_log_list_json(&body)
    }

    fn load(&self) -> Result<Vec<Log>> {
        match self.source.read_local()? {
            Some(bytes) => parse_log_list_json(&bytes),
            None => self.download(),
        }
    }
}

impl<S> std::fmt::Debug for LogListProvider<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogListProvider")
            .field("cached", &self.logs.get().map(Vec::len))
            .finish_non_exhaustive()
    }
}

/// Process-wide provider using [`LogListConfig::default`]. Never invalidated.
static LOG_LIST: Lazy<LogListProvider> =
    Lazy::new(|| LogListProvider::new(HttpFileSource::new(LogListConfig::default())));

/// Returns the known CT logs.
///
/// The first successful call reads the local `log_list.json` in the package
/// directory, or downloads the registry if that file does not exist. The
/// result is kept for the life of the process; there is no way to refresh it.
pub fn get_log_list() -> Result<&'static [Log]> {
    LOG_LIST.get()
}

/// Downloads the registry document and returns its logs. Always fetches;
/// neither reads nor fills the cache used by [`get_log_list`].
pub fn download_log_list() -> Result<Vec<Log>> {
    LOG_LIST.download()
}
