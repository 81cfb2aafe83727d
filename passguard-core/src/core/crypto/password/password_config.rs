use dotenv::dotenv;
use std::env;

use crate::core::crypto::hashing::HashFunction;
use crate::shared::constants::{
    COMPARE_IN_CONSTANT_TIME_DEFAULT, ENV_CONSTANT_TIME_COMPARE, ENV_HASH_FUNCTION,
    ENV_HASH_ITERATIONS, ENV_SALT_LENGTH, HASH_ITERATIONS_DEFAULT, SALT_LENGTH_DEFAULT,
};
use crate::shared::error::{SecurityError, SecurityResult};

/// Password hashing parameters
///
/// Owned by one `PasswordAlgorithm` instance. The salt length and iteration
/// count are validated eagerly on assignment. Changing parameters never
/// invalidates previously computed results, because every result carries the
/// parameters it was computed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    salt_length: i16,
    hash_function: HashFunction,
    hash_iterations: i32,
    compare_in_constant_time: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            salt_length: SALT_LENGTH_DEFAULT,
            hash_function: HashFunction::SHA256,
            hash_iterations: HASH_ITERATIONS_DEFAULT,
            compare_in_constant_time: COMPARE_IN_CONSTANT_TIME_DEFAULT,
        }
    }
}

impl PasswordConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a configuration snapshot from the environment
    ///
    /// Reads `PASSGUARD_SALT_LENGTH`, `PASSGUARD_HASH_FUNCTION`,
    /// `PASSGUARD_HASH_ITERATIONS`, and `PASSGUARD_CONSTANT_TIME_COMPARE`
    /// (loading `.env` if present). Unset variables leave the built-in
    /// defaults untouched; set variables go through the same validation as
    /// the setters.
    pub fn from_env() -> SecurityResult<Self> {
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(value) = env::var(ENV_SALT_LENGTH) {
            let parsed = value.parse::<i16>().map_err(|_| {
                SecurityError::invalid_argument(
                    "salt_length",
                    format!("cannot parse `{}` as a 16-bit integer", value),
                )
            })?;
            config.set_salt_length(parsed)?;
        }

        if let Ok(value) = env::var(ENV_HASH_FUNCTION) {
            config.set_hash_function(HashFunction::from_name(&value)?);
        }

        if let Ok(value) = env::var(ENV_HASH_ITERATIONS) {
            let parsed = value.parse::<i32>().map_err(|_| {
                SecurityError::invalid_argument(
                    "hash_iterations",
                    format!("cannot parse `{}` as a 32-bit integer", value),
                )
            })?;
            config.set_hash_iterations(parsed)?;
        }

        if let Ok(value) = env::var(ENV_CONSTANT_TIME_COMPARE) {
            let parsed = value.parse::<bool>().map_err(|_| {
                SecurityError::invalid_argument(
                    "compare_in_constant_time",
                    format!("cannot parse `{}` as a boolean", value),
                )
            })?;
            config.set_compare_in_constant_time(parsed);
        }

        log::debug!(
            "resolved password config: salt_length={} hash_function={} hash_iterations={}",
            config.salt_length,
            config.hash_function.name(),
            config.hash_iterations
        );

        Ok(config)
    }

    /// Length, in bytes, of salts created for new passwords
    pub fn salt_length(&self) -> i16 {
        self.salt_length
    }

    pub fn set_salt_length(&mut self, value: i16) -> SecurityResult<()> {
        if value < 0 {
            return Err(SecurityError::out_of_range(
                "salt_length",
                value as i64,
                "the salt length cannot be less than 0",
            ));
        }
        self.salt_length = value;
        Ok(())
    }

    /// Hash function used while hashing new passwords
    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    pub fn set_hash_function(&mut self, value: HashFunction) {
        self.hash_function = value;
    }

    /// Number of key-stretching iterations performed while hashing new
    /// passwords
    pub fn hash_iterations(&self) -> i32 {
        self.hash_iterations
    }

    pub fn set_hash_iterations(&mut self, value: i32) -> SecurityResult<()> {
        if value < 0 {
            return Err(SecurityError::out_of_range(
                "hash_iterations",
                value as i64,
                "the number of hash iterations cannot be less than 0",
            ));
        }
        self.hash_iterations = value;
        Ok(())
    }

    /// Whether verification compares encodings in constant time
    pub fn compare_in_constant_time(&self) -> bool {
        self.compare_in_constant_time
    }

    pub fn set_compare_in_constant_time(&mut self, value: bool) {
        self.compare_in_constant_time = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_config_default() {
        let config = PasswordConfig::default();
        assert_eq!(config.salt_length(), 16);
        assert_eq!(config.hash_function(), HashFunction::SHA256);
        assert_eq!(config.hash_iterations(), 1000);
        assert!(config.compare_in_constant_time());
    }

    #[test]
    fn test_setters_accept_valid_values() {
        let mut config = PasswordConfig::new();

        config.set_salt_length(0).unwrap();
        assert_eq!(config.salt_length(), 0);

        config.set_salt_length(64).unwrap();
        assert_eq!(config.salt_length(), 64);

        config.set_hash_iterations(0).unwrap();
        assert_eq!(config.hash_iterations(), 0);

        config.set_hash_function(HashFunction::SHA512);
        assert_eq!(config.hash_function(), HashFunction::SHA512);

        config.set_compare_in_constant_time(false);
        assert!(!config.compare_in_constant_time());
    }

    #[test]
    fn test_negative_salt_length_is_rejected_eagerly() {
        let mut config = PasswordConfig::new();
        let err = config.set_salt_length(-1).unwrap_err();

        assert_eq!(err.param_name(), Some("salt_length"));
        assert!(matches!(
            err,
            SecurityError::OutOfRange { value: -1, .. }
        ));
        // The failed assignment leaves the previous value in place.
        assert_eq!(config.salt_length(), 16);
    }

    #[test]
    fn test_negative_iterations_are_rejected_eagerly() {
        let mut config = PasswordConfig::new();
        let err = config.set_hash_iterations(-5).unwrap_err();

        assert_eq!(err.param_name(), Some("hash_iterations"));
        assert!(matches!(
            err,
            SecurityError::OutOfRange { value: -5, .. }
        ));
        assert_eq!(config.hash_iterations(), 1000);
    }

    #[test]
    fn test_from_env() {
        // Environment variables are process-global, so the unset, set, and
        // invalid cases run inside one test.
        env::remove_var(ENV_SALT_LENGTH);
        env::remove_var(ENV_HASH_FUNCTION);
        env::remove_var(ENV_HASH_ITERATIONS);
        env::remove_var(ENV_CONSTANT_TIME_COMPARE);

        let config = PasswordConfig::from_env().unwrap();
        assert_eq!(config, PasswordConfig::default());

        env::set_var(ENV_SALT_LENGTH, "32");
        env::set_var(ENV_HASH_FUNCTION, "sha512");
        env::set_var(ENV_HASH_ITERATIONS, "5000");
        env::set_var(ENV_CONSTANT_TIME_COMPARE, "false");

        let config = PasswordConfig::from_env().unwrap();
        assert_eq!(config.salt_length(), 32);
        assert_eq!(config.hash_function(), HashFunction::SHA512);
        assert_eq!(config.hash_iterations(), 5000);
        assert!(!config.compare_in_constant_time());

        env::set_var(ENV_SALT_LENGTH, "-4");
        let err = PasswordConfig::from_env().unwrap_err();
        assert_eq!(err.param_name(), Some("salt_length"));

        env::set_var(ENV_SALT_LENGTH, "not a number");
        let err = PasswordConfig::from_env().unwrap_err();
        assert_eq!(err.param_name(), Some("salt_length"));

        env::remove_var(ENV_SALT_LENGTH);
        env::set_var(ENV_HASH_FUNCTION, "md5");
        assert!(matches!(
            PasswordConfig::from_env().unwrap_err(),
            SecurityError::NotSupported(_)
        ));

        env::remove_var(ENV_HASH_FUNCTION);
        env::remove_var(ENV_HASH_ITERATIONS);
        env::remove_var(ENV_CONSTANT_TIME_COMPARE);
    }
}
