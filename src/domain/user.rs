//! User domain entity and request payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User domain entity.
///
/// The `id` is assigned by the store on creation and is immutable afterward;
/// valid identifiers start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier (1 or greater)
    #[schema(example = 1)]
    pub id: i32,
    /// Email address
    #[schema(example = "jane.doe@example.com")]
    pub email: String,
    /// Given name
    #[schema(example = "Jane")]
    pub first_name: String,
    /// Family name
    #[schema(example = "Doe")]
    pub last_name: String,
    /// Avatar URL
    #[schema(example = "https://example.com/avatars/1.png")]
    pub avatar: String,
}

/// User creation payload. All fields are required.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane.doe@example.com")]
    pub email: String,
    /// Given name
    #[validate(length(min = 1, message = "First name is required"))]
    #[schema(example = "Jane")]
    pub first_name: String,
    /// Family name
    #[validate(length(min = 1, message = "Last name is required"))]
    #[schema(example = "Doe")]
    pub last_name: String,
    /// Avatar URL (unconstrained beyond being a string)
    #[schema(example = "https://example.com/avatars/1.png")]
    pub avatar: String,
}

/// Partial update payload.
///
/// Only fields that are present overwrite the stored record; absent fields
/// are left untouched. PATCH and PUT share these semantics.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    /// New email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane.doe@example.com")]
    pub email: Option<String>,
    /// New given name
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    /// New family name
    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    /// New avatar URL
    #[schema(example = "https://example.com/avatars/1.png")]
    pub avatar: Option<String>,
}

impl UpdateUser {
    /// Apply the supplied fields to a user, leaving absent fields untouched.
    ///
    /// This is the in-memory counterpart of the repository's column-wise
    /// merge; both must agree on which fields participate.
    pub fn apply_to(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(avatar) = self.avatar {
            user.avatar = avatar;
        }
    }
}
