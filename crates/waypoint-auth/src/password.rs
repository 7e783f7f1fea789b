//! Password hashing and verification using Argon2id.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use crate::error::AuthError;

/// Argon2id with OWASP-recommended parameters (memory: 19 MiB,
/// iterations: 2, parallelism: 1).
fn hasher() -> Result<Argon2<'static>, AuthError> {
    let params = argon2::Params::new(19456, 2, 1, None)
        .map_err(|e| AuthError::Crypto(format!("argon2 params error: {e}")))?;
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

/// Hash a plaintext password. Salt is randomly generated per call, so
/// the output differs between calls for the same input.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Crypto(format!("password hash error: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// Total over its inputs: a malformed stored hash verifies as `false`,
/// never as an error.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = argon2::PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_password_matches() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash));
    }

    #[test]
    fn wrong_password_does_not_match() {
        let hash = hash_password("hunter2").unwrap();
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same-input").unwrap();
        let b = hash_password("same-input").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2id$"));
    }

    #[test]
    fn malformed_hash_verifies_false() {
        assert!(!verify_password("pw", "not-a-hash"));
        assert!(!verify_password("pw", ""));
    }
}
