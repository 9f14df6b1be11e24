//! Resource contract tests.
//!
//! These tests run the real user service over an in-memory repository,
//! exercising the CRUD state machine and the pagination contract without
//! requiring a database connection.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use user_api::api::handlers::status_handler::{AppStatus, DatabaseStatus};
use user_api::domain::{CreateUser, UpdateUser, User};
use user_api::errors::{AppError, AppResult};
use user_api::infra::UserRepository;
use user_api::services::{UserManager, UserService};
use user_api::types::{Page, PageQuery, PageRequest};

// =============================================================================
// In-memory repository
// =============================================================================

/// Record store double backed by an explicit, owned list.
///
/// Ids are assigned from a monotonically increasing counter, so deleted ids
/// are not reused unless the store is emptied and reset.
struct InMemoryUsers {
    users: Mutex<Vec<User>>,
    next_id: AtomicI32,
}

impl InMemoryUsers {
    fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn create(&self, fields: CreateUser) -> AppResult<User> {
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            email: fields.email,
            first_name: fields.first_name,
            last_name: fields.last_name,
            avatar: fields.avatar,
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                changes.apply_to(user);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut users = self.users.lock().unwrap();
        let removed = users.len() as u64;
        users.clear();
        // Emptied and reset: the id sequence starts over.
        self.next_id.store(1, Ordering::SeqCst);
        Ok(removed)
    }
}

// =============================================================================
// Test helpers
// =============================================================================

fn service() -> (Arc<InMemoryUsers>, UserManager<InMemoryUsers>) {
    let repo = Arc::new(InMemoryUsers::new());
    (repo.clone(), UserManager::new(repo))
}

fn payload(n: u32) -> CreateUser {
    CreateUser {
        email: format!("user{}@example.com", n),
        first_name: format!("First{}", n),
        last_name: format!("Last{}", n),
        avatar: format!("https://example.com/avatars/{}.png", n),
    }
}

async fn seed(service: &impl UserService, count: u32) -> Vec<User> {
    let mut created = Vec::new();
    for n in 1..=count {
        created.push(service.create_user(payload(n)).await.unwrap());
    }
    created
}

fn page_request(page: i64, size: i64) -> PageRequest {
    PageRequest::new(page, size).expect("valid request")
}

// =============================================================================
// CRUD state machine
// =============================================================================

#[tokio::test]
async fn test_create_then_get_roundtrip() {
    let (_, service) = service();

    let created = service.create_user(payload(1)).await.unwrap();
    assert_eq!(created.id, 1);

    let fetched = service.get_user(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_is_idempotent() {
    let (_, service) = service();
    let created = service.create_user(payload(1)).await.unwrap();

    let first = service.get_user(created.id).await.unwrap();
    let second = service.get_user(created.id).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_store_assigns_increasing_unique_ids() {
    let (_, service) = service();
    let created = seed(&service, 3).await;

    let ids: Vec<i32> = created.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_partial_update_changes_only_supplied_fields() {
    let (_, service) = service();
    let created = service.create_user(payload(1)).await.unwrap();

    let updated = service
        .update_user(
            created.id,
            UpdateUser {
                first_name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Renamed");
    assert_eq!(updated.last_name, created.last_name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.avatar, created.avatar);
    assert_eq!(updated.id, created.id);

    // The change is immediately visible to subsequent reads.
    let fetched = service.get_user(created.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let (_, service) = service();
    let created = service.create_user(payload(1)).await.unwrap();

    service.delete_user(created.id).await.unwrap();

    let result = service.get_user(created.id).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_deleted_id_is_not_reassigned() {
    let (_, service) = service();
    let first = service.create_user(payload(1)).await.unwrap();
    service.delete_user(first.id).await.unwrap();

    let second = service.create_user(payload(2)).await.unwrap();
    assert_ne!(second.id, first.id);
}

#[tokio::test]
async fn test_validation_and_not_found_are_distinct_outcomes() {
    let (_, service) = service();

    let invalid = service.get_user(0).await;
    assert!(matches!(invalid.unwrap_err(), AppError::Validation(_)));

    let missing = service.get_user(9999).await;
    assert!(matches!(missing.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_rejected_create_persists_nothing() {
    use validator::Validate;

    let (repo, service) = service();
    seed(&service, 1).await;

    // A body without an email never deserializes into the payload type,
    // so the handler path cannot reach the store.
    let body = r#"{"first_name": "Smoke", "last_name": "Test", "avatar": "x"}"#;
    assert!(serde_json::from_str::<CreateUser>(body).is_err());

    // A present-but-malformed email fails validation before any insert.
    let malformed = CreateUser {
        email: "not-an-email".to_string(),
        ..payload(2)
    };
    assert!(malformed.validate().is_err());

    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_reset_empties_the_store() {
    let (repo, service) = service();
    seed(&service, 3).await;

    let removed = repo.delete_all().await.unwrap();
    assert_eq!(removed, 3);
    assert_eq!(repo.len(), 0);

    // Reset store starts numbering over.
    let user = service.create_user(payload(1)).await.unwrap();
    assert_eq!(user.id, 1);
}

// =============================================================================
// Pagination over the live store
// =============================================================================

#[tokio::test]
async fn test_twelve_users_paginate_five_five_two() {
    let (_, service) = service();
    seed(&service, 12).await;

    for (page, expected) in [(1, 5), (2, 5), (3, 2)] {
        let result = service.list_users(page_request(page, 5)).await.unwrap();
        assert_eq!(result.items.len(), expected);
        assert_eq!(result.total, 12);
        assert_eq!(result.pages, 3);
        assert_eq!(result.page, page as u64);
    }
}

#[tokio::test]
async fn test_pages_partition_without_overlap_or_gaps() {
    let (_, service) = service();
    let created = seed(&service, 12).await;

    let mut reassembled = Vec::new();
    for page in 1..=4 {
        let result = service.list_users(page_request(page, 3)).await.unwrap();
        reassembled.extend(result.items);
    }

    assert_eq!(reassembled, created);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let (_, service) = service();
    seed(&service, 12).await;

    let result = service.list_users(page_request(2, 12)).await.unwrap();

    assert!(result.items.is_empty());
    assert_eq!(result.page, 2);
    assert_eq!(result.size, 12);
    assert_eq!(result.total, 12);
    assert_eq!(result.pages, 1);
}

#[tokio::test]
async fn test_consecutive_pages_differ() {
    let (_, service) = service();
    seed(&service, 12).await;

    let first = service.list_users(page_request(1, 6)).await.unwrap();
    let second = service.list_users(page_request(2, 6)).await.unwrap();

    assert_ne!(first.items, second.items);
}

// =============================================================================
// Transport contract
// =============================================================================

#[tokio::test]
async fn test_error_status_codes() {
    let validation = AppError::validation("User ID must be 1 or greater");
    let response = validation.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let not_found = AppError::NotFound;
    let response = not_found.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let internal = AppError::internal("boom");
    let response = internal.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_page_query_resolution() {
    // Defaults apply when the query string carries nothing.
    let request = PageQuery::default().resolve(50).unwrap();
    assert_eq!((request.page, request.size), (1, 50));

    // The configured default size is honored.
    let request = PageQuery::default().resolve(12).unwrap();
    assert_eq!(request.size, 12);

    // Out-of-range values are rejected, not clamped.
    let query = PageQuery {
        page: Some(0),
        size: Some(5),
    };
    assert!(query.resolve(50).is_err());
}

#[tokio::test]
async fn test_page_serialization_shape() {
    let page = Page::paginate(vec![1, 2, 3], &page_request(1, 2));
    let value = serde_json::to_value(&page).unwrap();

    assert_eq!(value["items"], serde_json::json!([1, 2]));
    assert_eq!(value["total"], 3);
    assert_eq!(value["page"], 1);
    assert_eq!(value["size"], 2);
    assert_eq!(value["pages"], 2);
}

#[tokio::test]
async fn test_status_payload_shapes() {
    let status = AppStatus {
        status: "ok".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&status).unwrap(),
        serde_json::json!({"status": "ok"})
    );

    let db = DatabaseStatus { database: false };
    assert_eq!(
        serde_json::to_value(&db).unwrap(),
        serde_json::json!({"database": false})
    );
}
