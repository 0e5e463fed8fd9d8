//! Random alias generation.
//!
//! Generation is pure: it neither checks uniqueness nor consults storage.
//! A collision surfaces later as `AliasExists` from the registry's insert.

use rand::Rng;

/// Length of auto-generated aliases.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Case-sensitive letters and digits, 62 symbols.
pub const ALIAS_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Source of alias candidates.
///
/// The HTTP layer holds one behind an `Arc` so tests can inject a fixed
/// sequence.
pub trait AliasGenerator: Send + Sync {
    /// Produces a candidate alias of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Production generator backed by the thread-local CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAliasGenerator;

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        generate_alias(length)
    }
}

/// Generates a random alias of `length` characters from [`ALIAS_ALPHABET`].
///
/// Each character is drawn uniformly, giving `62^length` combinations
/// (about 5.7×10^10 for the default length of 6).
///
/// # Examples
///
/// ```
/// use alias_shortener::utils::alias_generator::generate_alias;
///
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALIAS_ALPHABET.len());
            ALIAS_ALPHABET[idx] as char
        })
        .collect()
}
