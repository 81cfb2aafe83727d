use crate::shared::constants::{SHA256_DIGEST_SIZE, SHA384_DIGEST_SIZE, SHA512_DIGEST_SIZE};
use crate::shared::error::{SecurityError, SecurityResult};

/// Hash functions addressable in the computed-result format
///
/// The wire representation is the little-endian 16-bit ordinal, so the
/// enumeration is closed: adding a variant anywhere but the end is a breaking
/// format change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum HashFunction {
    SHA256 = 0,
    SHA384 = 1,
    SHA512 = 2,
}

impl HashFunction {
    /// All variants, in wire-id order
    pub const ALL: [HashFunction; 3] = [Self::SHA256, Self::SHA384, Self::SHA512];

    /// Wire id of this hash function
    pub fn id(self) -> i16 {
        self as i16
    }

    /// Resolve a wire id read back out of a computed result
    ///
    /// Ids outside the closed enumeration are rejected here, at the point of
    /// use, rather than when a result was encoded.
    pub fn from_id(id: i16) -> SecurityResult<Self> {
        match id {
            0 => Ok(Self::SHA256),
            1 => Ok(Self::SHA384),
            2 => Ok(Self::SHA512),
            other => Err(SecurityError::not_supported(format!(
                "hash function id {} has not been implemented",
                other
            ))),
        }
    }

    /// Resolve a hash function from its configuration name
    pub fn from_name(name: &str) -> SecurityResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::SHA256),
            "sha384" | "sha-384" => Ok(Self::SHA384),
            "sha512" | "sha-512" => Ok(Self::SHA512),
            other => Err(SecurityError::not_supported(format!(
                "hash function `{}` has not been implemented",
                other
            ))),
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Self::SHA256 => "SHA-256",
            Self::SHA384 => "SHA-384",
            Self::SHA512 => "SHA-512",
        }
    }

    /// Digest length in bytes
    pub fn digest_len(self) -> usize {
        match self {
            Self::SHA256 => SHA256_DIGEST_SIZE,
            Self::SHA384 => SHA384_DIGEST_SIZE,
            Self::SHA512 => SHA512_DIGEST_SIZE,
        }
    }
}
