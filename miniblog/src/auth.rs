//! Admin authorization gate
//!
//! A single predicate consulted before any mutation of the article
//! store. The expected password comes from the environment; the
//! comparison runs in constant time so response timing does not reveal
//! how much of a guess matched.

use thiserror::Error;

/// Environment variable holding the admin password
pub const ADMIN_PASSWORD_VAR: &str = "MINIBLOG_ADMIN_PASSWORD";

/// Errors produced by the authorization gate
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication is not configured: set {ADMIN_PASSWORD_VAR}")]
    NotConfigured,

    #[error("A password is required for this command (use --password)")]
    PasswordRequired,

    #[error("Invalid password")]
    InvalidPassword,
}

/// Check whether the caller may mutate the article store
///
/// Requires the admin password to be configured in the environment and
/// to match the supplied value exactly.
pub fn require_admin(supplied: Option<&str>) -> Result<(), AuthError> {
    let expected = std::env::var(ADMIN_PASSWORD_VAR).map_err(|_| AuthError::NotConfigured)?;
    if expected.is_empty() {
        return Err(AuthError::NotConfigured);
    }

    let supplied = supplied.ok_or(AuthError::PasswordRequired)?;

    if constant_time_eq(supplied.as_bytes(), expected.as_bytes()) {
        Ok(())
    } else {
        Err(AuthError::InvalidPassword)
    }
}

/// Compare two byte strings without short-circuiting on the first
/// mismatch
///
/// The length difference is folded into the accumulator instead of
/// being an early return, so unequal-length inputs also take the full
/// scan over the supplied bytes.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let mut diff = a.len() ^ b.len();
    for (i, &byte) in a.iter().enumerate() {
        let other = b.get(i).copied().unwrap_or(0);
        diff |= (byte ^ other) as usize;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq_matches() {
        assert!(constant_time_eq(b"segredo", b"segredo"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_constant_time_eq_rejects_mismatch() {
        assert!(!constant_time_eq(b"segredo", b"segredos"));
        assert!(!constant_time_eq(b"segredo", b"SEGREDO"));
        assert!(!constant_time_eq(b"a", b""));
    }

    // require_admin reads the process environment, which is shared
    // across test threads; its env-dependent paths are exercised by the
    // integration tests, which all agree on one password value.
}
