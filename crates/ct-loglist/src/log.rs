//! The CT log record and its derived identifiers.

use once_cell::sync::OnceCell;
use tracing::trace;

use crate::encoding::{self, Sha256Digest};
use crate::error::Result;

/// PEM label used for [`Log::id_pem`].
pub const LOG_ID_PEM_LABEL: &str = "CT LOG ID";

/// PEM label used for [`Log::pubkey`].
pub const PUBLIC_KEY_PEM_LABEL: &str = "PUBLIC KEY";

#[cfg(test)]
thread_local! {
    /// Number of key decodes performed on this thread.
    pub(crate) static KEY_DECODES: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// One entry of a CT log list.
///
/// The raw fields are fixed at construction. Every derived field is computed
/// on first access and cached on the instance; later reads return the cached
/// value. A derivation that fails caches nothing.
#[derive(Debug, Clone)]
pub struct Log {
    description: String,
    /// Base64 `SubjectPublicKeyInfo`, with or without PEM armor.
    key: String,
    url: String,
    /// Maximum merge delay in seconds.
    maximum_merge_delay: u64,
    /// Operator names.
    operated_by: Vec<String>,

    key_der: OnceCell<Vec<u8>>,
    id_der: OnceCell<Sha256Digest>,
    id_pem: OnceCell<String>,
    pubkey: OnceCell<String>,
    pubkey_hash: OnceCell<Sha256Digest>,
}

impl Log {
    /// Creates a log record from its raw fields.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        key: impl Into<String>,
        url: impl Into<String>,
        maximum_merge_delay: u64,
        operated_by: Vec<String>,
    ) -> Self {
        Self {
            description: description.into(),
            key: key.into(),
            url: url.into(),
            maximum_merge_delay,
            operated_by,
            key_der: OnceCell::new(),
            id_der: OnceCell::new(),
            id_pem: OnceCell::new(),
            pubkey: OnceCell::new(),
            pubkey_hash: OnceCell::new(),
        }
    }

    /// Returns the human-readable log description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the key as it appeared in the log list.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the log's submission URL prefix.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the maximum merge delay in seconds.
    #[must_use]
    pub const fn maximum_merge_delay(&self) -> u64 {
        self.maximum_merge_delay
    }

    /// Returns the names of the organisations operating this log.
    #[must_use]
    pub fn operated_by(&self) -> &[String] {
        &self.operated_by
    }

    /// Returns the DER-encoded `SubjectPublicKeyInfo`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decoding`] if the key is not valid base64/PEM.
    pub fn key_der(&self) -> Result<&[u8]> {
        self.key_der
            .get_or_try_init(|| {
                #[cfg(test)]
                KEY_DECODES.with(|count| count.set(count.get() + 1));
                trace!(log = %self.description, "decoding log key");
                encoding::decode_from_pem(&self.key)
            })
            .map(Vec::as_slice)
    }

    /// Returns the log ID: the SHA-256 digest of [`Log::key_der`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decoding`] if the key is not valid base64/PEM.
    pub fn id_der(&self) -> Result<&Sha256Digest> {
        self.id_der
            .get_or_try_init(|| self.key_der().map(encoding::sha256_digest))
    }

    /// Returns the log ID as a PEM block labelled [`LOG_ID_PEM_LABEL`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decoding`] if the key is not valid base64/PEM.
    pub fn id_pem(&self) -> Result<&str> {
        self.id_pem
            .get_or_try_init(|| {
                self.id_der()
                    .map(|id| encoding::encode_to_pem(id, LOG_ID_PEM_LABEL))
            })
            .map(String::as_str)
    }

    /// Returns the log ID as plain base64, the form used in log lists and
    /// SCT dumps.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decoding`] if the key is not valid base64/PEM.
    pub fn id_base64(&self) -> Result<String> {
        self.id_der().map(|id| encoding::to_base64(id))
    }

    /// Returns the key wrapped in a 64-column `PUBLIC KEY` PEM block.
    #[must_use]
    pub fn pubkey(&self) -> &str {
        self.pubkey
            .get_or_init(|| encoding::armor(PUBLIC_KEY_PEM_LABEL, &self.key))
    }

    /// Returns the SHA-256 digest of the public key.
    ///
    /// Same value as [`Log::id_der`], cached separately.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decoding`] if the key is not valid base64/PEM.
    pub fn pubkey_hash(&self) -> Result<&Sha256Digest> {
        self.pubkey_hash
            .get_or_try_init(|| self.key_der().map(encoding::sha256_digest))
    }
}

impl PartialEq for Log {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.key == other.key
            && self.url == other.url
            && self.maximum_merge_delay == other.maximum_merge_delay
            && self.operated_by == other.operated_by
    }
}

impl Eq for Log {}

/// Finds the log whose ID matches `id`.
#[must_use]
pub fn find_log_by_id<'a>(logs: &'a [Log], id: &Sha256Digest) -> Option<&'a Log> {
    logs.iter()
        .find(|log| log.id_der().is_ok_and(|log_id| log_id == id))
}
