//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User domain entity
///
/// The full shape is returned to clients, password included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier, assigned once at creation
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Display name
    #[schema(example = "alice")]
    pub username: String,
    /// Email address, fixed at creation
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Password, stored as given
    #[schema(example = "p1")]
    pub password: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp (never populated by the exposed operations)
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new user with a fresh random id and the current timestamp
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Apply a partial update. Fields left as `None` keep their value.
    pub fn apply(&mut self, update: UpdateUserDto) {
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
    }
}

impl From<CreateUserDto> for User {
    fn from(dto: CreateUserDto) -> Self {
        User::new(dto.username, dto.email, dto.password)
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    /// User display name
    #[schema(example = "alice")]
    pub username: String,
    /// User email address
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// User password
    #[schema(example = "p1")]
    pub password: String,
}

/// User update data transfer object
///
/// Omitted and `null` fields are both treated as "not supplied".
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    /// New display name
    #[serde(default)]
    #[schema(example = "alice2")]
    pub username: Option<String>,
    /// New password
    #[serde(default)]
    #[schema(example = "p2")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new("alice".into(), "a@x.com".into(), "p1".into())
    }

    #[test]
    fn new_user_has_creation_timestamp_only() {
        let user = sample();
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password, "p1");
        assert!(user.updated_at.is_none());
    }

    #[test]
    fn new_users_get_distinct_ids() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn apply_only_overwrites_supplied_fields() {
        let mut user = sample();
        let before = user.clone();

        user.apply(UpdateUserDto {
            username: None,
            password: Some("p2".into()),
        });

        assert_eq!(user.username, "alice");
        assert_eq!(user.password, "p2");
        assert_eq!(user.id, before.id);
        assert_eq!(user.email, before.email);
        assert_eq!(user.created_at, before.created_at);
    }

    #[test]
    fn apply_with_nothing_supplied_is_identity() {
        let mut user = sample();
        let before = user.clone();
        user.apply(UpdateUserDto::default());
        assert_eq!(user, before);
    }

    #[test]
    fn serializes_camel_case_with_null_updated_at() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json["updatedAt"].is_null());
        assert_eq!(json["password"], "p1");
    }

    #[test]
    fn update_dto_accepts_missing_and_null_fields() {
        let dto: UpdateUserDto = serde_json::from_str(r#"{"password": "p2"}"#).unwrap();
        assert!(dto.username.is_none());
        assert_eq!(dto.password.as_deref(), Some("p2"));

        let dto: UpdateUserDto =
            serde_json::from_str(r#"{"username": null, "password": null}"#).unwrap();
        assert!(dto.username.is_none());
        assert!(dto.password.is_none());
    }
}
