//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command:
//! - [`list`] - Every known log with its log ID
//! - [`show`] - One log, looked up by log ID

pub mod list;
pub mod show;

use std::borrow::Cow;

use ct_loglist::{Log, LogListProvider, LogListSource};
use tracing::debug;

use crate::error::CliError;

pub use list::ListCommand;
pub use show::ShowCommand;

/// Loads the logs a command works on.
///
/// With `download` set the registry is always fetched; otherwise the
/// provider's cached list is used.
fn load_logs<S: LogListSource>(
    provider: &LogListProvider<S>,
    download: bool,
) -> Result<Cow<'_, [Log]>, CliError> {
    let logs = if download {
        Cow::Owned(provider.download()?)
    } else {
        Cow::Borrowed(provider.get()?)
    };
    debug!(count = logs.len(), download, "loaded log list");
    Ok(logs)
}

/// Fake log list source for testing.
#[cfg(test)]
pub(crate) struct FakeSource {
    pub(crate) local: Option<&'static str>,
    pub(crate) remote: &'static str,
}

#[cfg(test)]
impl LogListSource for FakeSource {
    fn read_local(&self) -> ct_loglist::Result<Option<Vec<u8>>> {
        Ok(self.local.map(|json| json.as_bytes().to_vec()))
    }

    fn fetch_remote(&self) -> ct_loglist::Result<Vec<u8>> {
        Ok(self.remote.as_bytes().to_vec())
    }
}

#[cfg(test)]
pub(crate) const LOCAL_JSON: &str = r#"{
    "logs": [
        {
            "description": "Google 'Pilot' log",
            "key": "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEfahLEimAoz2t01p3uMziiLOl/fHTDM0YDOhBRuiBARsV4UvxG2LdNgoIGLrtCzWE0J5APC2em4JlvR8EEEFMoA==",
            "url": "ct.googleapis.com/pilot/",
            "maximum_merge_delay": 86400,
            "operated_by": [0]
        }
    ],
    "operators": [{"id": 0, "name": "Google"}]
}"#;

#[cfg(test)]
pub(crate) const REMOTE_JSON: &str = r#"{
    "logs": [
        {
            "description": "Google 'Aviator' log",
            "key": "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAE1/TMabLkDpCjiupacAlP7xNi0I1JYP8bQFAHDG1xhtolSY1l4QgNRzRrvSe8liE+NPWHdjGxfx3JhTsN9x8/6Q==",
            "url": "ct.googleapis.com/aviator/",
            "maximum_merge_delay": 86400,
            "operated_by": [0]
        }
    ],
    "operators": [{"id": 0, "name": "Google"}]
}"#;
