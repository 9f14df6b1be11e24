//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{status_handler, user_handler};
use crate::domain::{CreateUser, UpdateUser, User};
use crate::types::UserPage;

/// OpenAPI documentation for the user API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "0.1.0",
        description = "CRUD over the user resource with offset pagination",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8002", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::replace_user,
        user_handler::delete_user,
        // Status endpoints
        status_handler::database_status,
        status_handler::service_status,
    ),
    components(
        schemas(
            User,
            CreateUser,
            UpdateUser,
            UserPage,
            status_handler::DatabaseStatus,
            status_handler::AppStatus,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Status", description = "Service and database status")
    )
)]
pub struct ApiDoc;
