//! Password hashing, verification, and generation
//!
//! This module owns the password algorithm, its configuration, the salt
//! source capability, and the random password generator.

pub mod password_algorithm;
pub mod password_config;
pub mod password_generator;
pub mod salt_source;

// Re-export all public items from submodules
pub use password_algorithm::*;
pub use password_config::*;
pub use password_generator::*;
pub use salt_source::*;
