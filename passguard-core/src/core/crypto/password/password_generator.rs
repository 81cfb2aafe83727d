use rand::Rng;
use rand_core::OsRng;

use crate::shared::constants::{GENERATOR_LENGTH_DEFAULT, GENERATOR_SYMBOLS_DEFAULT};
use crate::shared::error::{SecurityError, SecurityResult};

/// Random password generator
///
/// Produces fixed-length strings with each character drawn independently and
/// uniformly from the configured symbol alphabet.
pub struct PasswordGenerator {
    length: i32,
    symbols: Vec<char>,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self {
            length: GENERATOR_LENGTH_DEFAULT,
            symbols: GENERATOR_SYMBOLS_DEFAULT.chars().collect(),
        }
    }

    /// Number of characters in generated passwords
    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn set_length(&mut self, value: i32) -> SecurityResult<()> {
        if value < 0 {
            return Err(SecurityError::out_of_range(
                "length",
                value as i64,
                "the password length cannot be less than 0",
            ));
        }
        self.length = value;
        Ok(())
    }

    /// Alphabet generated passwords draw their characters from
    pub fn symbols(&self) -> String {
        self.symbols.iter().collect()
    }

    pub fn set_symbols(&mut self, symbols: &str) -> SecurityResult<()> {
        if symbols.is_empty() {
            return Err(SecurityError::invalid_argument(
                "symbols",
                "the symbol alphabet cannot be empty",
            ));
        }
        self.symbols = symbols.chars().collect();
        Ok(())
    }

    /// Generate a password of the configured length
    pub fn generate(&self) -> String {
        let mut rng = OsRng;
        (0..self.length)
            .map(|_| self.symbols[rng.gen_range(0..self.symbols.len())])
            .collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
