//! Hash selection and key stretching
//!
//! This module maps the closed hash-function enumeration onto its digest
//! primitives and implements the iterated hashing used for key stretching.

pub mod hash_engine;
pub mod hash_function;

// Re-export all public items from submodules
pub use hash_engine::*;
pub use hash_function::*;
