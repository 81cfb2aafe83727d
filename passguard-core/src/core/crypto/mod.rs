//! Cryptographic functionality for the password core
//!
//! This module provides hash selection, key stretching, constant-time
//! comparison, and the password algorithm built on top of them.

pub mod constant_time;
pub mod hashing;
pub mod password;

// Re-export all public items from submodules
pub use constant_time::*;
pub use hashing::*;
pub use password::*;
