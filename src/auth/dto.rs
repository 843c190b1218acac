use serde::{Deserialize, Serialize};

use crate::store::User;

/// Request body shared by registration and login. Fields are optional so
/// missing-field violations surface through validation with a readable
/// message instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response returned after registration: the created record with a null
/// error marker.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub error: Option<String>,
    pub data: User,
}

#[derive(Debug, Serialize)]
pub struct TokenData {
    pub token: String,
}

/// Response returned after login; the token also travels in the
/// `auth-token` header.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub error: Option<String>,
    pub data: TokenData,
    pub message: String,
}
