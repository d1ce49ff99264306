use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Admin, dto::response::AdminLoginResponse},
    repositories::AdminRepository,
};

/// Credential verifier for the admin login check.
///
/// Read-only: looks up one admin record and verifies the submitted secret
/// against the stored Argon2 hash. Neither secret value is ever logged.
pub struct AuthService {
    admin_repository: Arc<dyn AdminRepository>,
}

impl AuthService {
    pub fn new(admin_repository: Arc<dyn AdminRepository>) -> Self {
        Self { admin_repository }
    }

    /// Verifies a submitted (identifier, secret) pair.
    ///
    /// An unknown identifier is reported as `Forbidden`, distinct from
    /// `AuthMismatch` for a known identifier with the wrong secret.
    pub async fn verify(
        &self,
        identifier: &str,
        secret: &SecretString,
    ) -> AppResult<AdminLoginResponse> {
        let admin = self
            .admin_repository
            .find_by_identifier(identifier)
            .await?
            .ok_or_else(|| {
                log::warn!("admin login rejected: no record for identifier");
                AppError::Forbidden("Admin not found".to_string())
            })?;

        verify_against_hash(&admin, secret)?;

        log::info!("admin login succeeded for '{}'", admin.identifier);

        Ok(AdminLoginResponse {
            matched: true,
            // Opaque success marker only; no session semantics attached.
            token: Uuid::new_v4().to_string(),
        })
    }
}

fn verify_against_hash(admin: &Admin, secret: &SecretString) -> AppResult<()> {
    let parsed_hash = PasswordHash::new(&admin.secret_hash)
        .map_err(|_| AppError::InternalError("stored secret hash is malformed".to_string()))?;

    match Argon2::default().verify_password(secret.expose_secret().as_bytes(), &parsed_hash) {
        Ok(()) => Ok(()),
        Err(argon2::password_hash::Error::Password) => {
            log::warn!("admin login rejected for '{}': secret mismatch", admin.identifier);
            Err(AppError::AuthMismatch("Incorrect secret".to_string()))
        }
        Err(e) => Err(AppError::InternalError(format!(
            "secret verification failed: {}",
            e
        ))),
    }
}

/// Hashes a plaintext secret into an Argon2 PHC string for provisioning.
pub fn hash_secret(secret: &SecretString) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(secret.expose_secret().as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("secret hashing failed: {}", e)))?;
    Ok(hash.to_string())
}
