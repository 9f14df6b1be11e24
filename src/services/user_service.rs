//! User service - CRUD use cases over the user resource.
//!
//! Shapes store outcomes into the error taxonomy: a malformed id is a
//! validation failure (checked before any store lookup), a missing record
//! is not-found.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;
use crate::types::{Page, PageRequest};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get a user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// List users as one page of the ordered collection
    async fn list_users(&self, request: PageRequest) -> AppResult<Page<User>>;

    /// Create a user; the store assigns the id
    async fn create_user(&self, fields: CreateUser) -> AppResult<User>;

    /// Apply a partial update. PATCH and PUT share these semantics.
    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<User>;

    /// Delete a user
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

/// Reject ids below the minimum valid value before touching the store.
fn ensure_valid_id(id: i32) -> AppResult<()> {
    if id < 1 {
        return Err(AppError::validation("User ID must be 1 or greater"));
    }
    Ok(())
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn get_user(&self, id: i32) -> AppResult<User> {
        ensure_valid_id(id)?;
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self, request: PageRequest) -> AppResult<Page<User>> {
        let users = self.repo.list().await?;
        Ok(Page::paginate(users, &request))
    }

    async fn create_user(&self, fields: CreateUser) -> AppResult<User> {
        let user = self.repo.create(fields).await?;
        tracing::debug!("Created user {}", user.id);
        Ok(user)
    }

    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<User> {
        ensure_valid_id(id)?;
        self.repo.update(id, changes).await?.ok_or_not_found()
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        ensure_valid_id(id)?;
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}
