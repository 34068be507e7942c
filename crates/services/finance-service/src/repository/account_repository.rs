//! Account repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use common::{AppError, AppResult};
use domain::{Account, MSG_EMAIL_TAKEN};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Check whether any account uses this email
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Insert a new account, assigning its id
    async fn create(&self, account: Account) -> AppResult<Account>;

    /// Find account by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;
}

/// Concrete implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// A unique index violation on insert means the email was taken between
/// the availability check and the write.
fn map_insert_error(err: DbErr) -> AppError {
    let sql_err = err.sql_err();
    classify_insert_error(sql_err, err)
}

fn classify_insert_error(sql_err: Option<SqlErr>, err: DbErr) -> AppError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::business_rule(MSG_EMAIL_TAKEN),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn create(&self, account: Account) -> AppResult<Account> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(account.name),
            email: Set(account.email),
            credential: Set(account.credential),
        };

        let model = active_model.insert(&self.db).await.map_err(map_insert_error)?;
        Ok(Account::from(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        let result = AccountEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_becomes_email_taken() {
        let err = classify_insert_error(
            Some(SqlErr::UniqueConstraintViolation(
                "duplicate key value violates unique constraint \"accounts_email_key\"".to_string(),
            )),
            DbErr::Custom("duplicate key".to_string()),
        );

        assert!(matches!(err, AppError::BusinessRule(ref msg) if msg == MSG_EMAIL_TAKEN));
    }

    #[test]
    fn other_constraint_errors_stay_database_errors() {
        let err = classify_insert_error(
            Some(SqlErr::ForeignKeyConstraintViolation("fk".to_string())),
            DbErr::Custom("fk".to_string()),
        );

        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn plain_database_error_falls_through() {
        let err = map_insert_error(DbErr::Custom("connection reset".to_string()));

        assert!(matches!(err, AppError::Database(DbErr::Custom(ref msg)) if msg == "connection reset"));
    }
}
