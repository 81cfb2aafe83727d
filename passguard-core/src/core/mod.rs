//! Core password security functionality

pub mod crypto;
