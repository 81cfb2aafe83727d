use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroize;

use crate::core::crypto::constant_time::ConstantTimeComparer;
use crate::core::crypto::hashing::{HashEngine, HashFunction};
use crate::shared::constants::{
    HASH_FUNCTION_FIELD_BYTES, HASH_ITERATIONS_FIELD_BYTES, SALT_LENGTH_FIELD_BYTES,
};
use crate::shared::error::{SecurityError, SecurityResult};

use super::{OsSaltSource, PasswordConfig, SaltSource};

/// Computes and verifies salted, key-stretched password hashes
///
/// `compute` renders a plain-text password into a self-describing base64
/// artifact carrying the salt, hash function, and iteration count alongside
/// the digest. `compare` reads those parameters back out of the artifact, so
/// results stay verifiable after this instance's configuration changes.
///
/// Parameters are plain mutable state with no internal synchronization.
/// Instances assume a single writer; sharing one across threads while a
/// compute or compare is in flight requires external synchronization.
pub struct PasswordAlgorithm {
    config: PasswordConfig,
    engine: HashEngine,
    salt_source: Box<dyn SaltSource + Send>,
}

impl PasswordAlgorithm {
    /// Create an algorithm with the built-in defaults and the OS CSPRNG
    pub fn new() -> Self {
        Self::with_config(PasswordConfig::default())
    }

    /// Create an algorithm from a configuration snapshot
    pub fn with_config(config: PasswordConfig) -> Self {
        Self::with_salt_source(config, Box::new(OsSaltSource))
    }

    /// Create an algorithm with an injected salt source
    pub fn with_salt_source(config: PasswordConfig, salt_source: Box<dyn SaltSource + Send>) -> Self {
        Self {
            config,
            engine: HashEngine::new(),
            salt_source,
        }
    }

    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    pub fn salt_length(&self) -> i16 {
        self.config.salt_length()
    }

    pub fn set_salt_length(&mut self, value: i16) -> SecurityResult<()> {
        self.config.set_salt_length(value)
    }

    pub fn hash_function(&self) -> HashFunction {
        self.config.hash_function()
    }

    pub fn set_hash_function(&mut self, value: HashFunction) {
        self.config.set_hash_function(value)
    }

    pub fn hash_iterations(&self) -> i32 {
        self.config.hash_iterations()
    }

    pub fn set_hash_iterations(&mut self, value: i32) -> SecurityResult<()> {
        self.config.set_hash_iterations(value)
    }

    pub fn compare_in_constant_time(&self) -> bool {
        self.config.compare_in_constant_time()
    }

    pub fn set_compare_in_constant_time(&mut self, value: bool) {
        self.config.set_compare_in_constant_time(value)
    }

    /// Hash `password` into a self-describing computed result
    ///
    /// A fresh salt is drawn on every call, so two computations of the same
    /// password produce different results.
    pub fn compute(&mut self, password: &str) -> SecurityResult<String> {
        let mut salt = vec![0u8; self.config.salt_length() as usize];
        self.salt_source.fill(&mut salt);

        self.encode(
            password,
            self.config.hash_function(),
            self.config.hash_iterations(),
            &salt,
        )
    }

    /// Verify `password` against a previously computed result
    ///
    /// The salt, hash function, and iteration count are taken from
    /// `computed_result`, not from this instance's current configuration. A
    /// mismatched password is an ordinary `Ok(false)`; only a structurally
    /// malformed `computed_result` is an error. A caller holding an
    /// `Option<String>` credential treats `None` as a non-match.
    pub fn compare(&self, password: &str, computed_result: &str) -> SecurityResult<bool> {
        let decoded = DecodedResult::parse(computed_result).map_err(|e| {
            log::warn!("rejecting computed result: {}", e);
            e
        })?;

        let expected = self.encode(
            password,
            decoded.hash_function,
            decoded.hash_iterations,
            &decoded.salt,
        )?;

        Ok(if self.config.compare_in_constant_time() {
            ConstantTimeComparer::DEFAULT.equals(Some(&expected), Some(computed_result))
        } else {
            expected == computed_result
        })
    }

    /// Run the iterated hash and render the full byte layout as base64
    fn encode(
        &self,
        password: &str,
        hash_function: HashFunction,
        hash_iterations: i32,
        salt: &[u8],
    ) -> SecurityResult<String> {
        let salt_length = i16::try_from(salt.len()).map_err(|_| {
            SecurityError::out_of_range(
                "salt_length",
                salt.len() as i64,
                "the salt does not fit the 16-bit length field",
            )
        })?;

        let mut base = Vec::with_capacity(password.len() + salt.len());
        base.extend_from_slice(password.as_bytes());
        base.extend_from_slice(salt);

        let hash = self.engine.iterate(hash_function, hash_iterations, &base)?;
        base.zeroize();

        let mut bytes = Vec::with_capacity(
            SALT_LENGTH_FIELD_BYTES
                + salt.len()
                + HASH_FUNCTION_FIELD_BYTES
                + HASH_ITERATIONS_FIELD_BYTES
                + hash.len(),
        );
        bytes.extend_from_slice(&salt_length.to_le_bytes());
        bytes.extend_from_slice(salt);
        bytes.extend_from_slice(&hash_function.id().to_le_bytes());
        bytes.extend_from_slice(&hash_iterations.to_le_bytes());
        bytes.extend_from_slice(&hash);

        Ok(STANDARD.encode(&bytes))
    }
}

impl Default for PasswordAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters read back out of a computed result
struct DecodedResult {
    salt: Vec<u8>,
    hash_function: HashFunction,
    hash_iterations: i32,
}

impl DecodedResult {
    fn parse(computed_result: &str) -> SecurityResult<Self> {
        let bytes = STANDARD.decode(computed_result)?;

        let salt_length = read_i16(&bytes, 0)?;
        if salt_length < 0 {
            return Err(SecurityError::format(format!(
                "declared salt length {} is negative",
                salt_length
            )));
        }

        let salt_end = SALT_LENGTH_FIELD_BYTES + salt_length as usize;
        let salt = bytes
            .get(SALT_LENGTH_FIELD_BYTES..salt_end)
            .ok_or_else(|| {
                SecurityError::format(format!(
                    "declared salt length {} exceeds the {}-byte buffer",
                    salt_length,
                    bytes.len()
                ))
            })?
            .to_vec();

        let hash_function = HashFunction::from_id(read_i16(&bytes, salt_end)?)?;

        let hash_iterations = read_i32(&bytes, salt_end + HASH_FUNCTION_FIELD_BYTES)?;
        if hash_iterations < 0 {
            return Err(SecurityError::format(format!(
                "declared iteration count {} is negative",
                hash_iterations
            )));
        }

        Ok(Self {
            salt,
            hash_function,
            hash_iterations,
        })
    }
}

fn read_i16(bytes: &[u8], offset: usize) -> SecurityResult<i16> {
    bytes
        .get(offset..offset + 2)
        .map(|field| i16::from_le_bytes([field[0], field[1]]))
        .ok_or_else(|| SecurityError::format("unexpected end of buffer"))
}

fn read_i32(bytes: &[u8], offset: usize) -> SecurityResult<i32> {
    bytes
        .get(offset..offset + 4)
        .map(|field| i32::from_le_bytes([field[0], field[1], field[2], field[3]]))
        .ok_or_else(|| SecurityError::format("unexpected end of buffer"))
}
