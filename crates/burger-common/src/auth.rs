//! Auth request and response payloads

use serde::{Deserialize, Serialize};

use crate::types::User;

/// Registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterData {
    /// Email
    pub email: String,
    /// Display name
    pub name: String,
    /// Password
    pub password: String,
}

/// Login form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    /// Email
    pub email: String,
    /// Password
    pub password: String,
}

/// Partial profile update, only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    /// New email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Request a password reset email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordData {
    /// Account email
    pub email: String,
}

/// Set a new password using the emailed code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordData {
    /// New password
    pub password: String,
    /// Code from the reset email
    pub token: String,
}

/// Response to register and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Authenticated user
    pub user: User,
    /// Short lived access credential, sent back verbatim in `authorization`
    #[serde(default)]
    pub access_token: Option<String>,
    /// Long lived refresh credential
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Response to a token refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// New access credential
    pub access_token: String,
    /// New refresh credential
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_patch_skips_unset_fields() {
        let patch = UserPatch {
            name: Some("John".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"name":"John"}"#);
    }

    #[test]
    fn test_auth_response_tokens_are_optional() {
        let json = r#"{"success":true,"user":{"email":"a@b.c","name":"A"}}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, None);
        assert_eq!(response.refresh_token, None);

        let json = r#"{"success":true,"user":{"email":"a@b.c","name":"A"},
            "accessToken":"Bearer abc","refreshToken":"def"}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token.as_deref(), Some("Bearer abc"));
        assert_eq!(response.refresh_token.as_deref(), Some("def"));
    }
}
