use rand_core::OsRng;
use rand_core::RngCore;

/// Source of cryptographically secure random salt bytes
///
/// Injected into `PasswordAlgorithm` so tests can pin the salt; production
/// code uses [`OsSaltSource`].
#[cfg_attr(test, mockall::automock)]
pub trait SaltSource {
    /// Fill `buffer` with random bytes
    fn fill(&mut self, buffer: &mut [u8]);
}

/// Salt source backed by the operating system CSPRNG
///
/// Safe for concurrent use; every call reads fresh entropy.
pub struct OsSaltSource;

impl SaltSource for OsSaltSource {
    fn fill(&mut self, buffer: &mut [u8]) {
        let mut rng = OsRng;
        rng.fill_bytes(buffer);
    }
}
