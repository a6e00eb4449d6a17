//! User service - Handles user-related business logic.
//!
//! Translates transport DTOs into repository calls. Missing users are
//! never an error here: lookups return `None`, updates and deletes
//! silently do nothing.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateUserDto, UpdateUserDto, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
///
/// Identifiers are accepted as text and parsed before use; text that is
/// not a UUID fails with [`AppError::MalformedIdentifier`].
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user and return its newly assigned id
    async fn create_user(&self, input: CreateUserDto) -> AppResult<Uuid>;

    /// Get user by ID, `None` if it does not exist
    async fn get_user_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Overwrite the supplied fields of an existing user; no-op if absent
    async fn update_user_by_id(&self, id: &str, input: UpdateUserDto) -> AppResult<()>;

    /// Delete an existing user; no-op if absent
    async fn delete_by_id(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

/// Parse identifier text into a UUID
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::malformed_identifier(raw))
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUserDto) -> AppResult<Uuid> {
        let saved = self.repo.save(User::from(input)).await?;

        tracing::info!(user_id = %saved.id, "User created");
        Ok(saved.id)
    }

    async fn get_user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let id = parse_id(id)?;
        self.repo.find_by_id(id).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    async fn update_user_by_id(&self, id: &str, input: UpdateUserDto) -> AppResult<()> {
        let id = parse_id(id)?;

        // Not atomic: a concurrent writer between find and save is overwritten
        let Some(mut user) = self.repo.find_by_id(id).await? else {
            tracing::debug!(user_id = %id, "Update skipped, user not found");
            return Ok(());
        };

        user.apply(input);
        self.repo.save(user).await?;

        tracing::info!(user_id = %id, "User updated");
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id)?;

        if !self.repo.exists_by_id(id).await? {
            tracing::debug!(user_id = %id, "Delete skipped, user not found");
            return Ok(());
        }

        self.repo.delete_by_id(id).await?;

        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    fn create_test_user(id: Uuid) -> User {
        let mut user = User::new(
            "username".to_string(),
            "email@email.com".to_string(),
            "1234".to_string(),
        );
        user.id = id;
        user
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_user_persists_inputs() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .withf(|user: &User| {
                user.username == "username"
                    && user.email == "email@email.com"
                    && user.password == "1234"
                    && user.updated_at.is_none()
            })
            .times(1)
            .returning(|user| Ok(user));

        let input = CreateUserDto {
            username: "username".to_string(),
            email: "email@email.com".to_string(),
            password: "1234".to_string(),
        };

        let id = service(repo).create_user(input).await.unwrap();
        assert!(!id.is_nil());
    }

    #[tokio::test]
    async fn test_create_user_returns_saved_id() {
        let saved_id = Uuid::new_v4();

        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .returning(move |_| Ok(create_test_user(saved_id)));

        let input = CreateUserDto {
            username: "username".to_string(),
            email: "email@email.com".to_string(),
            password: "1234".to_string(),
        };

        let id = service(repo).create_user(input).await.unwrap();
        assert_eq!(id, saved_id);
    }

    #[tokio::test]
    async fn test_create_user_propagates_save_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|_| Err(DbErr::Custom("insert failed".into()).into()));

        let input = CreateUserDto {
            username: "username".to_string(),
            email: "email@email.com".to_string(),
            password: "1234".to_string(),
        };

        let result = service(repo).create_user(input).await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_get_user_found() {
        let user_id = Uuid::new_v4();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(user_id))
            .times(1)
            .returning(|id| Ok(Some(create_test_user(id))));

        let result = service(repo)
            .get_user_by_id(&user_id.to_string())
            .await
            .unwrap();

        assert_eq!(result.map(|u| u.id), Some(user_id));
    }

    #[tokio::test]
    async fn test_get_user_absent_is_not_an_error() {
        let user_id = Uuid::new_v4();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(user_id))
            .returning(|_| Ok(None));

        let result = service(repo).get_user_by_id(&user_id.to_string()).await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_get_user_malformed_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();

        let result = service(repo).get_user_by_id("not-a-uuid").await;

        assert!(matches!(result, Err(AppError::MalformedIdentifier(_))));
    }

    #[tokio::test]
    async fn test_list_users_matches_repository_size() {
        for count in [0usize, 1, 5] {
            let mut repo = MockUserRepository::new();
            repo.expect_find_all().times(1).returning(move || {
                Ok((0..count).map(|_| create_test_user(Uuid::new_v4())).collect())
            });

            let users = service(repo).list_users().await.unwrap();
            assert_eq!(users.len(), count);
        }
    }

    #[tokio::test]
    async fn test_update_absent_user_never_saves() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        repo.expect_save().never();

        let input = UpdateUserDto {
            username: Some("new".to_string()),
            password: Some("new".to_string()),
        };

        let result = service(repo)
            .update_user_by_id(&Uuid::new_v4().to_string(), input)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_password_only_keeps_username() {
        let user_id = Uuid::new_v4();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(user_id))
            .times(1)
            .returning(|id| Ok(Some(create_test_user(id))));
        repo.expect_save()
            .withf(move |user: &User| {
                user.id == user_id && user.username == "username" && user.password == "p2"
            })
            .times(1)
            .returning(|user| Ok(user));

        let input = UpdateUserDto {
            username: None,
            password: Some("p2".to_string()),
        };

        let result = service(repo)
            .update_user_by_id(&user_id.to_string(), input)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_with_no_fields_still_saves_once() {
        let user_id = Uuid::new_v4();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(create_test_user(id))));
        repo.expect_save()
            .withf(|user: &User| user.username == "username" && user.password == "1234")
            .times(1)
            .returning(|user| Ok(user));

        let result = service(repo)
            .update_user_by_id(&user_id.to_string(), UpdateUserDto::default())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_malformed_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_save().never();

        let result = service(repo)
            .update_user_by_id("123", UpdateUserDto::default())
            .await;

        assert!(matches!(result, Err(AppError::MalformedIdentifier(_))));
    }

    #[tokio::test]
    async fn test_delete_existing_user() {
        let user_id = Uuid::new_v4();

        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_id()
            .with(eq(user_id))
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_delete_by_id()
            .with(eq(user_id))
            .times(1)
            .returning(|_| Ok(()));

        let result = service(repo).delete_by_id(&user_id.to_string()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_absent_user_is_noop() {
        let user_id = Uuid::new_v4();

        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_id()
            .with(eq(user_id))
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_delete_by_id().never();

        let result = service(repo).delete_by_id(&user_id.to_string()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_malformed_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_id().never();
        repo.expect_delete_by_id().never();

        let result = service(repo).delete_by_id("").await;

        assert!(matches!(result, Err(AppError::MalformedIdentifier(_))));
    }
}
