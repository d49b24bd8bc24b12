// Chunk: docs/chunks/color_mapper - Deterministic text-to-hue mapping

//! Digest selection for the hue reduction.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Which digest feeds the hue reduction.
///
/// Any well-distributed digest works; only the reduction arithmetic is part
/// of the visible contract. `Md5` is the default as the digest the plugin
/// was first written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestKind {
    #[default]
    Md5,
    Sha256,
}

impl DigestKind {
    /// Hashes `text` and returns the sum of the digest's bytes.
    ///
    /// An MD5 digest sums to at most 16 * 255 and a SHA-256 digest to at most
    /// 32 * 255, so the result always fits comfortably in an `i64`.
    pub fn byte_sum(self, text: &str) -> i64 {
        match self {
            DigestKind::Md5 => sum_bytes(&md5::Md5::digest(text.as_bytes())),
            DigestKind::Sha256 => sum_bytes(&Sha256::digest(text.as_bytes())),
        }
    }

    /// Name used in the settings blob.
    pub fn as_str(self) -> &'static str {
        match self {
            DigestKind::Md5 => "md5",
            DigestKind::Sha256 => "sha256",
        }
    }
}

fn sum_bytes(bytes: &[u8]) -> i64 {
    bytes.iter().map(|&b| i64::from(b)).sum()
}
