//! Short code generation.
//!
//! Codes are fixed-length strings over the 62-symbol alphanumeric alphabet,
//! drawn uniformly from the thread-local CSPRNG.

use rand::Rng;

/// Alphabet used for generated codes: `A-Z`, `a-z`, `0-9`.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 6;

/// Path segments served by the shortener itself.
///
/// A generated code equal to one of these would be shadowed by the route,
/// so such candidates are discarded.
pub const RESERVED_CODES: &[&str] = &["health", "shorten", "stats"];

/// Generates a random short code of [`CODE_LENGTH`] characters.
///
/// The result may collide with an existing code or be reserved; callers
/// check [`is_reserved`] and rely on the store's uniqueness constraint.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Returns true if the code collides with a service route segment.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
