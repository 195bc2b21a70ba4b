use anyhow::Context as _;

use crate::domain::repository::PasswordHasher;
use crate::error::DirectoryError;

/// Argon2 hashing through `password-auth`. Both operations are CPU-bound and
/// run on the blocking pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct Argon2PasswordHasher;

impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DirectoryError> {
        let password = password.to_owned();
        let hash = tokio::task::spawn_blocking(move || password_auth::generate_hash(password))
            .await
            .context("join password hashing task")?;
        Ok(hash)
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DirectoryError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        // A hash that fails to parse counts as a mismatch.
        let ok = tokio::task::spawn_blocking(move || {
            password_auth::verify_password(password, &hash).is_ok()
        })
        .await
        .context("join password verification task")?;
        Ok(ok)
    }
}
