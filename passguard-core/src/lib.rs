//! PassGuard Core
//!
//! Secure password core for PassGuard.
//! Computes and verifies salted, key-stretched password hashes and generates
//! random passwords.
//!
//! ## Architecture
//!
//! - **Core**: password algorithm, hash engine, constant-time comparison
//! - **Shared**: error types and constants
//!
//! Every computed result is self-describing: the salt, hash function, and
//! iteration count travel inside the base64 artifact, so stored results stay
//! verifiable after the configuration changes.
//!
//! ## Usage
//!
//! ```rust
//! use passguard_core::PasswordAlgorithm;
//!
//! let mut algorithm = PasswordAlgorithm::new();
//!
//! let computed = algorithm.compute("my password")?;
//! assert!(algorithm.compare("my password", &computed)?);
//! assert!(!algorithm.compare("not my password", &computed)?);
//! # Ok::<(), passguard_core::SecurityError>(())
//! ```

pub mod core;
pub mod shared;

// Re-export specific components
pub use crate::core::crypto::constant_time::ConstantTimeComparer;
pub use crate::core::crypto::hashing::{HashEngine, HashFunction};
pub use crate::core::crypto::password::{
    OsSaltSource, PasswordAlgorithm, PasswordConfig, PasswordGenerator, SaltSource,
};
pub use shared::error::{SecurityError, SecurityResult};

/// Initialize logging
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::try_init()?;
    log::info!("{} {} initialized", NAME, VERSION);
    Ok(())
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
