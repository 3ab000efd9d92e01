//! User service - Handles user-related business logic.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::domain::{ensure_not_future, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user after checking the date of birth
    async fn create_user(&self, name: String, dob: NaiveDate) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Update an existing user after checking the date of birth
    async fn update_user(&self, id: i64, name: String, dob: NaiveDate) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: i64) -> AppResult<()>;

    /// List users with the given page window
    async fn list_users(&self, limit: u64, offset: u64) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using the repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, name: String, dob: NaiveDate) -> AppResult<User> {
        ensure_not_future(dob, Utc::now().date_naive())?;
        self.repo.create(name, dob).await
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_user(&self, id: i64, name: String, dob: NaiveDate) -> AppResult<User> {
        ensure_not_future(dob, Utc::now().date_naive())?;
        self.repo.update(id, name, dob).await
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await
    }

    async fn list_users(&self, limit: u64, offset: u64) -> AppResult<Vec<User>> {
        self.repo.list(limit, offset).await
    }
}
