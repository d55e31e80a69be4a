/**
 * Password Hashing
 *
 * Wraps bcrypt for password storage and verification. Hashes are salted
 * and non-deterministic across calls; the stored value is always the
 * bcrypt output, never the plaintext.
 */

use crate::error::ApiError;

/// Fixed bcrypt work factor
pub const BCRYPT_COST: u32 = 7;

/// Hash a plaintext password for storage
///
/// The result embeds its own salt, so two hashes of the same password
/// differ. Verification must go through [`verify_password`].
pub fn hash_password(plaintext: &str) -> Result<String, ApiError> {
    Ok(bcrypt::hash(plaintext, BCRYPT_COST)?)
}

/// Verify a plaintext password against a stored hash
///
/// Returns `Ok(false)` on mismatch. A malformed stored hash is an error,
/// not a mismatch, and propagates to the caller.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> Result<bool, ApiError> {
    Ok(bcrypt::verify(plaintext, stored_hash)?)
}
