use axum::{
    extract::{FromRef, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    Json,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{CredentialsPayload, LoginResponse, RegisterResponse, TokenData},
        jwt::JwtKeys,
        password, validate,
    },
    error::AuthError,
    state::AppState,
};

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<Json<RegisterResponse>, AuthError> {
    let creds = validate::register(&payload).map_err(AuthError::Validation)?;

    // Pre-check is an optimization; the store's unique index is the source
    // of truth and also maps to DuplicateEmail.
    if state.store.find_by_email(&creds.email).await?.is_some() {
        warn!(email = %creds.email, "email already registered");
        return Err(AuthError::DuplicateEmail);
    }

    let hash = password::hash(&creds.password)?;
    let user = state.store.create(&creds.email, &hash).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(RegisterResponse {
        error: None,
        data: user,
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<(HeaderMap, Json<LoginResponse>), AuthError> {
    let creds = validate::login(&payload).map_err(AuthError::Validation)?;

    let user = state
        .store
        .find_by_email(&creds.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %creds.email, "login unknown email");
            AuthError::UserNotFound
        })?;

    if !password::matches(&creds.password, &user.password_hash)? {
        warn!(email = %creds.email, user_id = %user.id, "login invalid password");
        return Err(AuthError::InvalidPassword);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user)?;

    let mut headers = HeaderMap::new();
    let value =
        HeaderValue::from_str(&token).map_err(|e| AuthError::Persistence(e.to_string()))?;
    headers.insert(HeaderName::from_static("auth-token"), value);

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok((
        headers,
        Json(LoginResponse {
            error: None,
            data: TokenData { token },
            message: "Bienvenido".into(),
        }),
    ))
}
