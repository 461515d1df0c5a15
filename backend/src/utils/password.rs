//! Bcrypt password hashing. The cost factor comes from configuration so
//! deployments can tune it without a rebuild.

pub fn hash_password(password: &str, cost: u32) -> anyhow::Result<String> {
    bcrypt::hash(password, cost).map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
}

/// Verifies a candidate password against a stored hash. The comparison is
/// constant-time inside bcrypt; a mismatch is `Ok(false)`, not an error.
pub fn verify_password(password: &str, hash: &str) -> anyhow::Result<bool> {
    bcrypt::verify(password, hash)
        .map_err(|e| anyhow::anyhow!("Password verification error: {}", e))
}
