//! Where the log list comes from.

use std::path::{Path, PathBuf};

/// Well-known URL of the log list accepted by Chrome.
pub const DEFAULT_LOG_LIST_URL: &str =
    "https://www.certificate-transparency.org/known-logs/log_list.json";

/// File name of the locally saved log list.
pub const LOG_LIST_FILE_NAME: &str = "log_list.json";

/// Log list source configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogListConfig {
    /// Local registry file, preferred over the network when present.
    pub local_path: PathBuf,
    /// URL of the registry document.
    pub url: String,
    /// `User-Agent` header sent with the download.
    pub user_agent: String,
}

impl LogListConfig {
    /// Sets the local registry file.
    #[must_use]
    pub fn with_local_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.local_path = path.into();
        self
    }

    /// Sets the download URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Returns the default local registry file: `log_list.json` in the
    /// package directory.
    #[must_use]
    pub fn default_local_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(LOG_LIST_FILE_NAME)
    }
}

impl Default for LogListConfig {
    fn default() -> Self {
        Self {
            local_path: Self::default_local_path(),
            url: DEFAULT_LOG_LIST_URL.to_string(),
            user_agent: concat!("ct-loglist/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
