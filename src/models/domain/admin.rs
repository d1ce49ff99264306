use std::fmt;

/// Stored admin credential record. Provisioned out-of-band (see the
/// `hash-admin-secret` binary) and read-only to the running service.
#[derive(Clone)]
pub struct Admin {
    pub id: i64,
    pub identifier: String,
    /// Argon2 PHC string. Never the plaintext secret.
    pub secret_hash: String,
}

// Hand-written so the hash can never leak through debug logging.
impl fmt::Debug for Admin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Admin")
            .field("id", &self.id)
            .field("identifier", &self.identifier)
            .field("secret_hash", &"[REDACTED]")
            .finish()
    }
}
