use axum::{
    extract::{FromRef, State},
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::{
    auth::{
        dto::{AuthResponse, JwtKeys, SessionUser, SigninRequest, SignupRequest, SignupResponse},
        repo::User,
        services::{clear_session_cookie, hash_password, session_cookie, verify_password},
    },
    error::AppError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
        .route("/auth/signout", post(signout))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(mut payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    payload.email = payload.email.trim().to_lowercase();
    payload.validate()?;

    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "signup with already registered email");
        return Err(AppError::Conflict(
            "User with this email already exists".into(),
        ));
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create(&state.db, &payload, &hash).await?;

    info!(user_id = %user.id, email = %user.email, "user created");
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully".into(),
            user: user.into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    Json(mut payload): Json<SigninRequest>,
) -> Result<(HeaderMap, Json<AuthResponse>), AppError> {
    payload.email = payload.email.trim().to_lowercase();

    // Unknown email and wrong password produce the same response.
    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "signin with unknown email");
            return Err(AppError::InvalidCredentials);
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(email = %payload.email, user_id = %user.id, "signin with invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(&user)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        session_cookie(&token, keys.session_ttl)
            .parse()
            .map_err(|e| anyhow::anyhow!("session cookie header: {e}"))?,
    );

    info!(user_id = %user.id, email = %user.email, "user signed in");
    Ok((
        headers,
        Json(AuthResponse {
            token,
            user: SessionUser::from(&user),
        }),
    ))
}

#[instrument]
pub async fn signout() -> Result<(HeaderMap, Json<serde_json::Value>), AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        clear_session_cookie()
            .parse()
            .map_err(|e| anyhow::anyhow!("session cookie header: {e}"))?,
    );
    Ok((headers, Json(json!({ "message": "Signed out" }))))
}
