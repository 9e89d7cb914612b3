//! Random short code generation.
//!
//! Codes are drawn from the operating system CSPRNG, encoded as URL-safe
//! base64 and truncated to [`CODE_LENGTH`] characters.

use crate::domain::KeyGenerator;
use crate::domain::entities::{CODE_LENGTH, ShortCode};
use crate::domain::error::{StoreError, StoreResult};
use base64::Engine as _;

/// Number of random bytes drawn per code.
const CODE_LENGTH_BYTES: usize = 6;

/// Codes that would be shadowed by fixed routes and must never be issued.
pub const RESERVED_CODES: &[&str] = &["health"];

/// Generates a random short code.
///
/// Uses `getrandom` for entropy and encodes the result with the URL-safe
/// base64 alphabet, keeping the first 6 characters.
///
/// # Errors
///
/// Returns [`StoreError::RandomSource`] if the system random number
/// generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.as_str().len(), 6);
/// ```
pub fn generate_code() -> StoreResult<ShortCode> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| StoreError::RandomSource(e.to_string()))?;

    let encoded = base64::engine::general_purpose::URL_SAFE.encode(buffer);

    ShortCode::parse(&encoded[..CODE_LENGTH])
}

/// Returns true if the code collides with a fixed route.
pub fn is_reserved(code: &ShortCode) -> bool {
    RESERVED_CODES.contains(&code.as_str())
}

/// [`KeyGenerator`] backed by the operating system random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomKeyGenerator;

impl RandomKeyGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl KeyGenerator for RandomKeyGenerator {
    fn generate(&self) -> StoreResult<ShortCode> {
        generate_code()
    }
}
