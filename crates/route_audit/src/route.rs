//! Decoding of serialized route strings.
//!
//! A route arrives as `[e1,e2,...,en,]`: bracketed, comma-separated edge
//! ids with a trailing comma before the closing bracket. The zero-edge
//! forms `[]` and `[,]` decode to an empty sequence. Anything else is a
//! hard error; malformed input is never guessed around.

use crate::error::AuditError;

/// Decode a route string into its ordered sequence of edge ids.
///
/// Order and duplicate edges are preserved as given; only the sum of
/// lengths matters downstream, but the traversal order keeps floating-point
/// summation reproducible.
///
/// # Errors
///
/// Returns [`AuditError::MalformedRoute`] when the brackets are missing,
/// a non-empty route lacks its trailing comma, or any token is not an
/// unsigned integer.
pub fn decode_route(raw: &str) -> Result<Vec<u64>, AuditError> {
    let malformed = || AuditError::MalformedRoute(raw.to_string());

    let inner = raw
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(malformed)?;

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    let mut tokens: Vec<&str> = inner.split(',').collect();
    // The serialized form always ends with one empty token from the
    // trailing comma; its absence means the input is malformed.
    match tokens.pop() {
        Some("") => {}
        _ => return Err(malformed()),
    }

    // "[,]" splits into a single leftover empty token: zero edges.
    if tokens == [""] {
        return Ok(Vec::new());
    }

    tokens
        .iter()
        .map(|token| token.trim().parse::<u64>().map_err(|_| malformed()))
        .collect()
}
