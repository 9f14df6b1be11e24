//! User repository implementation.
//!
//! The trait mirrors the record-store boundary: lookups return `Option`,
//! delete reports whether a row was removed, and the caller decides how
//! absence surfaces to clients.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// List all users, ordered by id ascending.
    ///
    /// The ordering is what makes consecutive page requests partition the
    /// collection without overlap or gaps.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a new user; the store assigns the id
    async fn create(&self, fields: CreateUser) -> AppResult<User>;

    /// Apply the supplied fields to an existing user.
    ///
    /// Returns `None` when no user with that id exists.
    async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<Option<User>>;

    /// Delete a user; returns whether a row was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Remove every user; returns the number of rows removed.
    ///
    /// Used by the seed command and by tests that need a known-empty store.
    async fn delete_all(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository over SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, fields: CreateUser) -> AppResult<User> {
        let active_model = ActiveModel {
            email: Set(fields.email),
            first_name: Set(fields.first_name),
            last_name: Set(fields.last_name),
            avatar: Set(fields.avatar),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<Option<User>> {
        let existing = match UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
        {
            Some(model) => model,
            None => return Ok(None),
        };

        // Column-wise merge: only supplied fields overwrite.
        let mut active: ActiveModel = existing.into();

        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(avatar) = changes.avatar {
            active.avatar = Set(avatar);
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Some(User::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = UserEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
