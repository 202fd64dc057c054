//! Credential redaction for log output.
//!
//! Raw bearer tokens must never reach the logs. [`token_prefix`] is the only
//! sanctioned way to mention a token in a log line: it keeps at most
//! [`TOKEN_PREFIX_CHARS`] characters and never splits a UTF-8 sequence.

/// Maximum number of token characters allowed in a log line.
pub const TOKEN_PREFIX_CHARS: usize = 10;

/// Return at most the first [`TOKEN_PREFIX_CHARS`] characters of `token`.
///
/// Shorter tokens are returned whole.
///
/// # Examples
/// ```
/// use backend::domain::token_prefix;
///
/// assert_eq!(token_prefix("eyJhbGciOiJSUzI1NiJ9.payload"), "eyJhbGciOi");
/// assert_eq!(token_prefix("short"), "short");
/// ```
pub fn token_prefix(token: &str) -> &str {
    match token.char_indices().nth(TOKEN_PREFIX_CHARS) {
        Some((end, _)) => token.get(..end).unwrap_or_default(),
        None => token,
    }
}
