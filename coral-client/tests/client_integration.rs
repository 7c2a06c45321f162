// coral-client/tests/client_integration.rs
// Gateway construction and credential persistence tests

use coral_client::{ClientConfig, Credential, CredentialStorage, HttpClient};
use shared::models::{User, UserRole};
use tempfile::TempDir;

fn test_user() -> User {
    User {
        id: 1,
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        role: UserRole::Superadmin,
    }
}

#[test]
fn test_credential_storage() {
    let temp_dir = TempDir::new().unwrap();
    let storage = CredentialStorage::new(temp_dir.path());

    // Test save and load
    let credential = Credential::new("test-token".to_string(), test_user());

    storage.save(&credential).unwrap();
    assert!(storage.exists());

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.token, "test-token");
    assert_eq!(loaded.user.email, "ana@example.com");
    assert_eq!(loaded.user.role, UserRole::Superadmin);

    // Test delete
    storage.delete().unwrap();
    assert!(!storage.exists());
    assert!(storage.load().is_none());
}

#[test]
fn test_credential_storage_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let storage = CredentialStorage::new(temp_dir.path().join("nested"));

    assert!(!storage.exists());
    assert!(storage.load().is_none());
    // Deleting a missing credential is not an error
    storage.delete().unwrap();
}

#[tokio::test]
async fn test_client_creation() {
    let client = HttpClient::new(&ClientConfig::new("http://localhost:5000/api"));
    assert!(client.token().is_none());
    assert!(!client.session_invalidated());
}

#[tokio::test]
async fn test_client_token_from_config() {
    let config = ClientConfig::new("http://localhost:5000/api").with_token("cfg-token");
    let client = config.build_client();
    assert_eq!(client.token().as_deref(), Some("cfg-token"));
}
