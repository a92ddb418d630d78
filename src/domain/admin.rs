use serde::{Deserialize, Serialize};

/// Stored administrator credential.
///
/// The password is kept and compared in cleartext to stay byte-compatible
/// with existing database files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredential {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl AdminCredential {
    /// Credential provisioned on first database initialization.
    pub fn seed() -> Self {
        Self {
            id: 1,
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}
