//! Account service - Registration and authentication.
//!
//! SOLID (SRP): Handles account use cases only.
//!
//! Credentials are compared verbatim; no hashing scheme is applied to
//! stored values.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Account, MSG_ACCOUNT_NOT_FOUND, MSG_EMAIL_TAKEN, MSG_INVALID_CREDENTIAL};

use crate::repository::AccountRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new account after checking the email is free
    async fn register(&self, candidate: Account) -> AppResult<Account>;

    /// Return the account whose email and credential both match
    async fn authenticate(&self, email: &str, credential: &str) -> AppResult<Account>;

    /// Fail if an account already uses this email
    async fn validate_email_available(&self, email: &str) -> AppResult<()>;

    /// Get account by ID; absence is not an error
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;
}

/// Concrete implementation of AccountService using repository.
pub struct AccountManager {
    repo: Arc<dyn AccountRepository>,
}

impl AccountManager {
    /// Create new account service instance with repository
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn register(&self, candidate: Account) -> AppResult<Account> {
        self.validate_email_available(&candidate.email).await?;

        let account = self.repo.create(candidate).await?;
        tracing::info!(account_id = ?account.id, "Account registered");
        Ok(account)
    }

    async fn authenticate(&self, email: &str, credential: &str) -> AppResult<Account> {
        let account = match self.repo.find_by_email(email).await? {
            Some(account) => account,
            None => {
                tracing::warn!("Authentication failed: unknown email");
                return Err(AppError::authentication(MSG_ACCOUNT_NOT_FOUND));
            }
        };

        if !account.credential_matches(credential) {
            tracing::warn!(account_id = ?account.id, "Authentication failed: credential mismatch");
            return Err(AppError::authentication(MSG_INVALID_CREDENTIAL));
        }

        Ok(account)
    }

    async fn validate_email_available(&self, email: &str) -> AppResult<()> {
        if self.repo.exists_by_email(email).await? {
            tracing::warn!("Rejected registration for an email already in use");
            return Err(AppError::business_rule(MSG_EMAIL_TAKEN));
        }

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        self.repo.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use mockall::predicate::eq;

    use crate::repository::MockAccountRepository;

    fn stored_account(email: &str, credential: &str) -> Account {
        Account {
            id: Some(Uuid::new_v4()),
            ..Account::new("usuario", email, credential)
        }
    }

    fn service(repo: MockAccountRepository) -> AccountManager {
        AccountManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn register_persists_when_email_is_free() {
        let mut repo = MockAccountRepository::new();
        repo.expect_exists_by_email()
            .withf(|email| email == "email@email.com")
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_create().times(1).returning(|account| {
            Ok(Account {
                id: Some(Uuid::new_v4()),
                ..account
            })
        });

        let saved = service(repo)
            .register(Account::new("nome", "email@email.com", "senha"))
            .await
            .unwrap();

        assert!(saved.id.is_some());
        assert_eq!(saved.name, "nome");
        assert_eq!(saved.email, "email@email.com");
        assert_eq!(saved.credential, "senha");
    }

    #[tokio::test]
    async fn register_does_not_persist_a_taken_email() {
        let mut repo = MockAccountRepository::new();
        repo.expect_exists_by_email().returning(|_| Ok(true));
        repo.expect_create().never();

        let err = service(repo)
            .register(Account::new("nome", "email@email.com", "senha"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BusinessRule(ref msg) if msg == MSG_EMAIL_TAKEN));
    }

    #[tokio::test]
    async fn registering_the_same_email_twice_saves_once() {
        let registered = Arc::new(AtomicBool::new(false));

        let mut repo = MockAccountRepository::new();
        let seen = registered.clone();
        repo.expect_exists_by_email()
            .times(2)
            .returning(move |_| Ok(seen.load(Ordering::SeqCst)));
        let mark = registered.clone();
        repo.expect_create().times(1).returning(move |account| {
            mark.store(true, Ordering::SeqCst);
            Ok(Account {
                id: Some(Uuid::new_v4()),
                ..account
            })
        });

        let service = service(repo);
        let first = service.register(Account::new("a", "a@b.com", "x")).await;
        let second = service.register(Account::new("b", "a@b.com", "y")).await;

        assert!(first.is_ok());
        assert!(matches!(second, Err(AppError::BusinessRule(_))));
    }

    #[tokio::test]
    async fn authenticate_returns_the_matching_account() {
        let account = stored_account("a@b.com", "right");
        let expected = account.clone();

        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "a@b.com")
            .returning(move |_| Ok(Some(account.clone())));

        let result = service(repo).authenticate("a@b.com", "right").await.unwrap();

        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn authenticate_rejects_unknown_email() {
        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let err = service(repo)
            .authenticate("email@email.com", "senha")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Authentication(_)));
        assert_eq!(err.to_string(), MSG_ACCOUNT_NOT_FOUND);
    }

    #[tokio::test]
    async fn authenticate_rejects_wrong_credential() {
        let account = stored_account("a@b.com", "right");

        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(account.clone())));

        let err = service(repo).authenticate("a@b.com", "wrong").await.unwrap_err();

        assert!(matches!(err, AppError::Authentication(_)));
        assert_eq!(err.to_string(), MSG_INVALID_CREDENTIAL);
    }

    #[tokio::test]
    async fn authenticate_is_case_sensitive() {
        let account = stored_account("a@b.com", "Right");

        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(account.clone())));

        let result = service(repo).authenticate("a@b.com", "right").await;

        assert!(matches!(result, Err(AppError::Authentication(_))));
    }

    #[tokio::test]
    async fn validate_email_available_passes_for_new_email() {
        let mut repo = MockAccountRepository::new();
        repo.expect_exists_by_email().returning(|_| Ok(false));

        assert!(service(repo)
            .validate_email_available("eamail@email.com")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn validate_email_available_fails_for_registered_email() {
        let mut repo = MockAccountRepository::new();
        repo.expect_exists_by_email().returning(|_| Ok(true));

        let result = service(repo).validate_email_available("email@email.com").await;

        assert!(matches!(result, Err(AppError::BusinessRule(_))));
    }

    #[tokio::test]
    async fn get_by_id_treats_absence_as_success() {
        let id = Uuid::new_v4();

        let mut repo = MockAccountRepository::new();
        repo.expect_find_by_id().with(eq(id)).returning(|_| Ok(None));

        let result = service(repo).get_by_id(id).await.unwrap();

        assert!(result.is_none());
    }
}
