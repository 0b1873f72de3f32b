//! Admin credentials
//!
//! The server has a single administrator account, configured through the
//! environment. The password is hashed with Argon2 at startup so the plain
//! text never lives beyond initialization.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    password_hash: String,
}

impl AdminCredentials {
    /// Hash the configured password and build the credential record
    pub fn new(username: String, password: &str) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Failed to hash admin password: {}", e)))?
            .to_string();

        Ok(Self {
            username,
            password_hash,
        })
    }

    /// Constant-time-ish verification of a login attempt
    pub fn verify(&self, username: &str, password: &str) -> bool {
        if username != self.username {
            return false;
        }

        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_accepts_correct_credentials() {
        let creds = AdminCredentials::new("admin".to_string(), "hunter2-but-longer")
            .expect("hashing failed");

        assert!(creds.verify("admin", "hunter2-but-longer"));
    }

    #[test]
    fn verify_rejects_wrong_password_or_username() {
        let creds = AdminCredentials::new("admin".to_string(), "hunter2-but-longer")
            .expect("hashing failed");

        assert!(!creds.verify("admin", "wrong"));
        assert!(!creds.verify("root", "hunter2-but-longer"));
    }
}
