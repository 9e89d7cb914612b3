//! Mapping entity and the short code it is keyed by.

use std::fmt;

use crate::domain::error::StoreError;

/// Number of characters in every short code.
pub const CODE_LENGTH: usize = 6;

/// A validated short code.
///
/// Always exactly [`CODE_LENGTH`] characters from the URL-safe base64
/// alphabet (`A-Z`, `a-z`, `0-9`, `-`, `_`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Parses a short code, rejecting anything outside the URL-safe alphabet
    /// or of the wrong length.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCode`] if the input is not a valid code.
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        if raw.len() != CODE_LENGTH || !raw.bytes().all(is_url_safe) {
            return Err(StoreError::InvalidCode(raw.to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_url_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// A persisted association between a short code and its original URL.
///
/// Mappings are immutable once stored and are never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub code: ShortCode,
    pub original_url: String,
}

impl Mapping {
    pub fn new(code: ShortCode, original_url: impl Into<String>) -> Self {
        Self {
            code,
            original_url: original_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_code() {
        let code = ShortCode::parse("aB3-_z").unwrap();
        assert_eq!(code.as_str(), "aB3-_z");
        assert_eq!(code.to_string(), "aB3-_z");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(ShortCode::parse("abc").is_err());
        assert!(ShortCode::parse("abcdefg").is_err());
        assert!(ShortCode::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_foreign_characters() {
        assert!(ShortCode::parse("abc/de").is_err());
        assert!(ShortCode::parse("abc+de").is_err());
        assert!(ShortCode::parse("abc=de").is_err());
        assert!(ShortCode::parse("abcdé").is_err());
    }

    #[test]
    fn test_mapping_creation() {
        let code = ShortCode::parse("xyz789").unwrap();
        let mapping = Mapping::new(code.clone(), "https://rust-lang.org");

        assert_eq!(mapping.code, code);
        assert_eq!(mapping.original_url, "https://rust-lang.org");
    }
}
