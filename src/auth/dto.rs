use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::repo_types::User;

/// Request body for user registration.
///
/// Deliberately has no admin field; whatever the client sends,
/// a fresh account is a regular user.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Form body for `POST /token`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".into(),
        }
    }
}

/// Public part of the user returned to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            is_admin: u.is_admin,
            is_active: u.is_active,
            created_at: u.created_at,
        }
    }
}

/// Partial update applied by administrators. Absent fields are left as-is.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub is_admin: Option<bool>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_ignores_admin_field() {
        // An is_admin key in the body is dropped on deserialization.
        let req: RegisterRequest = serde_json::from_value(serde_json::json!({
            "username": "taro",
            "password": "s3cret-pass",
            "is_admin": true
        }))
        .expect("deserialize");
        assert_eq!(req.username, "taro");
    }

    #[test]
    fn token_response_uses_bearer_type() {
        let resp = TokenResponse::bearer("abc".into());
        assert_eq!(resp.token_type, "bearer");
        assert_eq!(resp.access_token, "abc");
    }

    #[test]
    fn user_response_never_contains_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            username: "taro".into(),
            password_hash: "argon2-secret".into(),
            is_admin: false,
            is_active: true,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_string(&UserResponse::from(user)).expect("serialize");
        assert!(!json.contains("argon2-secret"));
        assert!(!json.contains("password"));
        assert!(json.contains("\"is_admin\":false"));
    }

    #[test]
    fn update_request_fields_are_optional() {
        let req: UpdateUserRequest =
            serde_json::from_value(serde_json::json!({ "is_active": false })).expect("deserialize");
        assert_eq!(req.is_active, Some(false));
        assert_eq!(req.is_admin, None);
    }
}
