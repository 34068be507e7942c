//! Account domain entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user, identified by a unique email.
///
/// `id` is `None` until the account has been persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    /// Stored and compared verbatim
    #[serde(skip_serializing)]
    pub credential: String,
}

impl Account {
    /// Create a transient (not yet persisted) account
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            credential: credential.into(),
        }
    }

    /// Check if the account has been assigned an identity
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Exact, case-sensitive credential comparison
    pub fn credential_matches(&self, credential: &str) -> bool {
        self.credential == credential
    }
}

/// Account response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_comparison_is_case_sensitive() {
        let account = Account::new("usuario", "usuario@email.com", "Senha");

        assert!(account.credential_matches("Senha"));
        assert!(!account.credential_matches("senha"));
        assert!(!account.credential_matches("Senha "));
    }

    #[test]
    fn new_account_is_transient() {
        let account = Account::new("usuario", "usuario@email.com", "senha");
        assert!(!account.is_persisted());
    }

    #[test]
    fn credential_is_never_serialized() {
        let account = Account::new("usuario", "usuario@email.com", "senha");
        let json = serde_json::to_string(&account).unwrap();

        assert!(!json.contains("senha"));
        assert!(!json.contains("credential"));
    }
}
