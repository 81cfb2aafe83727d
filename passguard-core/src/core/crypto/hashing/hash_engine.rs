use crate::shared::SecurityResult;
use sha2::{Digest, Sha256, Sha384, Sha512};
use zeroize::Zeroize;

use super::HashFunction;

/// Hash engine
///
/// Maps a `HashFunction` onto its digest primitive and runs the
/// key-stretching loop used by the password algorithm. Every operation is a
/// pure bytes-to-bytes computation with deterministic output.
pub struct HashEngine;

impl HashEngine {
    pub fn new() -> Self {
        Self
    }

    /// Digest data with the selected hash function
    pub fn digest(&self, function: HashFunction, data: &[u8]) -> SecurityResult<Vec<u8>> {
        match function {
            HashFunction::SHA256 => self.sha256(data),
            HashFunction::SHA384 => self.sha384(data),
            HashFunction::SHA512 => self.sha512(data),
        }
    }

    /// Iterated digest over the password-and-salt bytes
    ///
    /// Each round rehashes the previous digest concatenated with the original
    /// input, so the cost scales linearly with `iterations`. Zero iterations
    /// returns the initial digest unchanged.
    pub fn iterate(
        &self,
        function: HashFunction,
        iterations: i32,
        base: &[u8],
    ) -> SecurityResult<Vec<u8>> {
        let mut hash = self.digest(function, base)?;
        for _ in 0..iterations {
            let mut buffer = Vec::with_capacity(hash.len() + base.len());
            buffer.extend_from_slice(&hash);
            buffer.extend_from_slice(base);
            hash = self.digest(function, &buffer)?;
            buffer.zeroize();
        }
        Ok(hash)
    }

    /// Digest data with SHA-256
    pub fn sha256(&self, data: &[u8]) -> SecurityResult<Vec<u8>> {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Ok(hasher.finalize().to_vec())
    }

    /// Digest data with SHA-384
    pub fn sha384(&self, data: &[u8]) -> SecurityResult<Vec<u8>> {
        let mut hasher = Sha384::new();
        hasher.update(data);
        Ok(hasher.finalize().to_vec())
    }

    /// Digest data with SHA-512
    pub fn sha512(&self, data: &[u8]) -> SecurityResult<Vec<u8>> {
        let mut hasher = Sha512::new();
        hasher.update(data);
        Ok(hasher.finalize().to_vec())
    }
}

impl Default for HashEngine {
    fn default() -> Self {
        Self::new()
    }
}
