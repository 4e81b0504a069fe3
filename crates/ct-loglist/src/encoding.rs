//! Encoding primitives for log key material.
//!
//! Keys in a log list are base64 `SubjectPublicKeyInfo` blobs, sometimes with
//! PEM armor and sometimes without. Everything derived from a key goes through
//! the helpers in this module.

use base64::Engine;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Width of a PEM body line.
pub const PEM_LINE_LENGTH: usize = 64;

/// A SHA-256 digest.
pub type Sha256Digest = [u8; 32];

/// Returns the SHA-256 digest of `data`.
#[must_use]
pub fn sha256_digest(data: &[u8]) -> Sha256Digest {
    Sha256::digest(data).into()
}

/// Encodes `data` as standard, padded base64.
#[must_use]
pub fn to_base64(data: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(data)
}

/// Splits `text` into lines of at most `line_length` characters joined by `\n`.
///
/// A `line_length` of zero leaves the text untouched.
#[must_use]
pub fn wrap_lines(text: &str, line_length: usize) -> String {
    if line_length == 0 {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(line_length)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps a base64 body in PEM armor with the given label.
///
/// The body is reflowed to [`PEM_LINE_LENGTH`] columns. No trailing newline is
/// emitted.
#[must_use]
pub fn armor(label: &str, base64_body: &str) -> String {
    format!(
        "-----BEGIN {label}-----\n{}\n-----END {label}-----",
        wrap_lines(base64_body, PEM_LINE_LENGTH)
    )
}

/// Encodes raw bytes as a PEM block with the given label.
#[must_use]
pub fn encode_to_pem(data: &[u8], label: &str) -> String {
    armor(label, &to_base64(data))
}

/// Decodes PEM-armored or bare base64 text into raw bytes.
///
/// Whitespace inside the body is ignored. Armored input must close with an
/// `END` line carrying the same label as its `BEGIN` line.
///
/// # Errors
///
/// Returns [`Error::Decoding`] if the armor is malformed, the body is empty,
/// or the body is not valid base64.
pub fn decode_from_pem(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    let body = if text.starts_with("-----BEGIN ") {
        armored_body(text)?
    } else {
        text.split_whitespace().collect::<String>()
    };

    if body.is_empty() {
        return Err(Error::Decoding("empty key material".into()));
    }

    base64::engine::general_purpose::STANDARD
        .decode(body.as_bytes())
        .map_err(|e| Error::Decoding(format!("invalid base64: {e}")))
}

/// Returns the digest of the key material in `text`, whatever its armor.
///
/// # Errors
///
/// Returns [`Error::Decoding`] if `text` cannot be decoded.
pub fn digest_from_pem(text: &str) -> Result<Sha256Digest> {
    decode_from_pem(text).map(|der| sha256_digest(&der))
}

fn armored_body(text: &str) -> Result<String> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let begin = lines.next().unwrap_or_default();
    let label = armor_label(begin, "BEGIN")
        .ok_or_else(|| Error::Decoding(format!("malformed PEM header: {begin}")))?;

    let mut body = String::new();
    for line in lines {
        if line.starts_with("-----END ") {
            let end_label = armor_label(line, "END")
                .ok_or_else(|| Error::Decoding(format!("malformed PEM footer: {line}")))?;
            if end_label != label {
                return Err(Error::Decoding(format!(
                    "PEM label mismatch: BEGIN {label}, END {end_label}"
                )));
            }
            return Ok(body);
        }
        body.push_str(line);
    }

    Err(Error::Decoding(format!("missing PEM footer for {label}")))
}

fn armor_label<'a>(line: &'a str, kind: &str) -> Option<&'a str> {
    line.strip_prefix("-----")?
        .strip_prefix(kind)?
        .strip_prefix(' ')?
        .strip_suffix("-----")
}
