//! Password hashing and verification using Argon2id.
//!
//! Stored credentials are encoded strings that embed the algorithm, version,
//! cost parameters, a per-credential random salt and the digest, so every
//! hash is self-describing and two hashes of the same password differ.

use argon2::{Algorithm, Argon2, Params, Version};
use base64::prelude::*;
use rand::{rng, RngCore};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    /// Wrong password, or a stored hash that could not be parsed. Malformed
    /// hashes fail closed through this same variant so callers cannot
    /// distinguish the two cases.
    #[error("Verification failed: password does not match")]
    VerificationFailed,
}

/// Cost parameters for Argon2id hashing.
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// Memory cost in KiB
    pub memory_cost: u32,
    /// Number of iterations
    pub time_cost: u32,
    /// Degree of parallelism
    pub parallelism: u32,
    /// Length of the digest in bytes
    pub hash_length: usize,
    /// Length of the random salt in bytes
    pub salt_length: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        // OWASP baseline for Argon2id: 19 MiB, t=2, p=1
        Self {
            memory_cost: 19456,
            time_cost: 2,
            parallelism: 1,
            hash_length: 32,
            salt_length: 16,
        }
    }
}

/// Hashes a password with Argon2id and a fresh random salt.
///
/// Returns the credential in the form
/// `$argon2id$v=19$m=<m>,t=<t>,p=<p>$<salt_b64>$<digest_b64>`.
pub fn hash_password(
    password: &SecretString,
    config: Option<PasswordConfig>,
) -> Result<SecretString, PasswordError> {
    let config = config.unwrap_or_default();

    let mut salt = vec![0u8; config.salt_length];
    rng().fill_bytes(&mut salt);

    let argon2 = argon2_instance(
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        config.hash_length,
    )?;

    let mut digest = vec![0u8; config.hash_length];
    argon2
        .hash_password_into(password.expose_secret().as_bytes(), &salt, &mut digest)
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

    let encoded = format!(
        "$argon2id$v=19$m={},t={},p={}${}${}",
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        BASE64_STANDARD.encode(&salt),
        BASE64_STANDARD.encode(&digest)
    );

    Ok(SecretString::from(encoded))
}

/// Verifies a password against a stored credential.
///
/// The cost parameters and salt are taken from the stored string; the digest
/// comparison is constant-time. A stored credential that cannot be parsed
/// yields `VerificationFailed`, never a panic or a server-side error.
pub fn verify_password(password: &SecretString, stored: &str) -> Result<(), PasswordError> {
    let (params, salt, expected) = parse_stored(stored).ok_or(PasswordError::VerificationFailed)?;

    let argon2 = argon2_instance(params.0, params.1, params.2, expected.len())?;

    let mut computed = vec![0u8; expected.len()];
    argon2
        .hash_password_into(password.expose_secret().as_bytes(), &salt, &mut computed)
        .map_err(|_| PasswordError::VerificationFailed)?;

    use subtle::ConstantTimeEq;
    if computed.as_slice().ct_eq(&expected).into() {
        Ok(())
    }
    else {
        Err(PasswordError::VerificationFailed)
    }
}

fn argon2_instance(
    memory_cost: u32,
    time_cost: u32,
    parallelism: u32,
    hash_length: usize,
) -> Result<Argon2<'static>, PasswordError> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(memory_cost, time_cost, parallelism, Some(hash_length))
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?,
    ))
}

/// Splits `$argon2id$v=19$m=..,t=..,p=..$<salt>$<digest>` into its pieces.
/// Returns `None` on any structural mismatch.
fn parse_stored(stored: &str) -> Option<((u32, u32, u32), Vec<u8>, Vec<u8>)> {
    let parts: Vec<&str> = stored.split('$').collect();
    if parts.len() != 6 || !parts[0].is_empty() || parts[1] != "argon2id" || parts[2] != "v=19" {
        return None;
    }

    let mut memory_cost = None;
    let mut time_cost = None;
    let mut parallelism = None;
    for kv in parts[3].split(',') {
        let (key, value) = kv.split_once('=')?;
        let value: u32 = value.parse().ok()?;
        match key {
            "m" => memory_cost = Some(value),
            "t" => time_cost = Some(value),
            "p" => parallelism = Some(value),
            _ => return None,
        }
    }

    let salt = BASE64_STANDARD.decode(parts[4]).ok()?;
    let digest = BASE64_STANDARD.decode(parts[5]).ok()?;
    if salt.is_empty() || digest.is_empty() {
        return None;
    }

    Some(((memory_cost?, time_cost?, parallelism?), salt, digest))
}

/// A single violation of the password complexity policy.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least 8 characters long")]
    TooShort,

    #[error("Password must be at most 256 characters long")]
    TooLong,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one digit")]
    MissingDigit,

    #[error("Password must contain at least one symbol")]
    MissingSymbol,
}

/// Checks a candidate password against the complexity policy.
///
/// Policy: 8..=256 characters, with at least one lowercase letter, one
/// uppercase letter, one digit and one non-alphanumeric symbol. All
/// violations are reported at once so the client can show them together.
pub fn validate_password_policy(password: &str) -> Result<(), Vec<PasswordPolicyError>> {
    let mut errors = Vec::new();

    let length = password.chars().count();
    if length < 8 {
        errors.push(PasswordPolicyError::TooShort);
    }
    if length > 256 {
        errors.push(PasswordPolicyError::TooLong);
    }

    if !password.chars().any(|c| c.is_lowercase()) {
        errors.push(PasswordPolicyError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        errors.push(PasswordPolicyError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(PasswordPolicyError::MissingDigit);
    }
    if !password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
    {
        errors.push(PasswordPolicyError::MissingSymbol);
    }

    if errors.is_empty() {
        Ok(())
    }
    else {
        Err(errors)
    }
}
