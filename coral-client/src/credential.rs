//! Credential persistence
//!
//! JSON-file storage for the signed-in session so a restarted client can
//! restore its token without prompting for login again. The expiry is read
//! from the token's JWT payload without verifying the signature; the server
//! remains the authority on token validity.

use serde::{Deserialize, Serialize};
use shared::models::User;
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted session credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    pub user: User,
    pub expires_at: Option<u64>,
}

impl Credential {
    pub fn new(token: String, user: User) -> Self {
        let expires_at = parse_jwt_exp(&token);
        Self {
            token,
            user,
            expires_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            let now = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            return now > expires_at;
        }
        false
    }
}

/// Extract the `exp` claim (Unix seconds) from a JWT payload
pub fn parse_jwt_exp(token: &str) -> Option<u64> {
    // JWT format: header.payload.signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.get("exp")?.as_u64()
}

/// Credential storage backed by a JSON file
#[derive(Debug, Clone)]
pub struct CredentialStorage {
    path: PathBuf,
}

impl CredentialStorage {
    /// Create credential storage under the given base directory
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let path = base_path.into().join("credential.json");
        Self { path }
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Save the credential
    pub fn save(&self, credential: &Credential) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(credential)?;
        fs::write(&self.path, json)
    }

    /// Load the credential
    pub fn load(&self) -> Option<Credential> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Check if a credential exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the credential
    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Storage path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
