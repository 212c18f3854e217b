//! URL validation for shorten requests.
//!
//! Input without an `http://` or `https://` prefix gets `https://` prepended.
//! The result must parse as an absolute HTTP(S) URL with a host. The stored
//! string is the prefixed input itself, not the parser's re-serialization, so
//! `example.com` becomes `https://example.com` without a trailing slash.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum UrlNormalizationError {
    #[error("URL is required")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a host")]
    MissingHost,
}

/// Normalizes user input into the URL that will be stored.
///
/// # Rules
///
/// 1. Surrounding whitespace is trimmed; empty input is rejected
/// 2. Input already starting with `http://` or `https://` (any case) is kept
/// 3. Input starting with another scheme (`ftp://`, `file://`, ...) is rejected;
///    `://` later in the path or query does not count as a scheme
/// 4. Anything else gets `https://` prepended
/// 5. The result must parse and have a non-empty host
///
/// # Errors
///
/// Returns [`UrlNormalizationError`] describing the first failed rule.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com").unwrap(), "https://example.com");
/// assert_eq!(normalize_url("http://a.io/x").unwrap(), "http://a.io/x");
/// assert!(normalize_url("ftp://files.example.com").is_err());
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else if has_explicit_scheme(trimmed) {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    } else {
        format!("https://{}", trimmed)
    };

    let parsed =
        Url::parse(&candidate).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(candidate),
        _ => Err(UrlNormalizationError::MissingHost),
    }
}

/// Returns true if the input starts with `scheme://`, where the scheme is
/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
fn has_explicit_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
