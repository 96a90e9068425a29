use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use std::time::Duration;
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, error, warn};

use crate::auth::dto::{Claims, JwtKeys};
use crate::auth::repo::User;
use crate::config::JwtConfig;
use crate::error::AppError;
use crate::state::AppState;

pub(crate) const SESSION_COOKIE: &str = "session_token";

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            issuer,
            audience,
            session_ttl_minutes,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            audience,
            session_ttl: Duration::from_secs((session_ttl_minutes as u64) * 60),
        }
    }
}

impl JwtKeys {
    /// Sign a session token carrying the user's public projection.
    pub fn sign(&self, user: &User) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.session_ttl.as_secs() as i64);
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user.id, "session token signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.sub, "session token verified");
        Ok(data.claims)
    }
}

/// `Set-Cookie` value carrying the session token.
pub fn session_cookie(token: &str, ttl: Duration) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        ttl.as_secs()
    )
}

/// `Set-Cookie` value that expires the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

/// Pull the session token out of a request: `Authorization: Bearer` first,
/// then the session cookie.
pub(crate) fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(bearer) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        return Some(bearer.to_string());
    }
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())?
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            pair.strip_prefix(SESSION_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .map(str::to_string)
}

/// Extracts and validates the session token, rejecting with 401 otherwise.
pub struct AuthUser(pub uuid::Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let token = token_from_headers(&parts.headers)
            .ok_or_else(|| AppError::Unauthorized("Missing session token".to_string()))?;

        let claims = match keys.verify(&token) {
            Ok(c) => c,
            Err(_) => {
                warn!("invalid or expired session token");
                return Err(AppError::Unauthorized(
                    "Invalid or expired session".to_string(),
                ));
            }
        };

        Ok(AuthUser(claims.sub))
    }
}


#[cfg(test)]
mod jwt_tests {
    use super::*;
    use time::macros::date;
    use uuid::Uuid;

    fn make_keys() -> JwtKeys {
        JwtKeys::from_ref(&AppState::fake())
    }

    fn make_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".into(),
            password_hash: "irrelevant".into(),
            name: "Test User".into(),
            phone_number: "555-123-4567".into(),
            currently_renting: false,
            monthly_budget: 1200.0,
            move_in_date: date!(2026 - 09 - 01),
            preferred_locations: vec![],
            preferred_amenities: vec![],
            image: None,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn sign_and_verify_roundtrip() {
        let keys = make_keys();
        let user = make_user();
        let token = keys.sign(&user).expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.name, user.name);
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(claims.aud, "test-aud");
    }

    #[tokio::test]
    async fn verify_rejects_garbage() {
        let keys = make_keys();
        assert!(keys.verify("not.a.jwt").is_err());
    }

    #[tokio::test]
    async fn verify_rejects_wrong_secret() {
        let keys = make_keys();
        let token = keys.sign(&make_user()).expect("sign");
        let other = JwtKeys {
            encoding: EncodingKey::from_secret(b"other-secret"),
            decoding: DecodingKey::from_secret(b"other-secret"),
            issuer: keys.issuer.clone(),
            audience: keys.audience.clone(),
            session_ttl: keys.session_ttl,
        };
        assert!(other.verify(&token).is_err());
    }
}

#[cfg(test)]
mod extractor_tests {
    use super::*;
    use axum::http::{HeaderValue, Request};
    use time::macros::date;
    use uuid::Uuid;

    fn parts_with_headers(headers: Vec<(header::HeaderName, HeaderValue)>) -> Parts {
        let mut builder = Request::builder().uri("/api/profile");
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        builder.body(()).expect("request").into_parts().0
    }

    #[tokio::test]
    async fn missing_token_is_rejected() {
        let state = AppState::fake();
        let mut parts = parts_with_headers(vec![]);
        let result = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let state = AppState::fake();
        let mut parts = parts_with_headers(vec![(
            header::COOKIE,
            HeaderValue::from_static("session_token=garbage"),
        )]);
        let result = AuthUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn valid_session_cookie_is_accepted() {
        let state = AppState::fake();
        let keys = JwtKeys::from_ref(&state);
        let user = User {
            id: Uuid::new_v4(),
            email: "renter@example.com".into(),
            password_hash: "irrelevant".into(),
            name: "Sam Renter".into(),
            phone_number: "555-000-1111".into(),
            currently_renting: false,
            monthly_budget: 900.0,
            move_in_date: date!(2026 - 11 - 01),
            preferred_locations: vec![],
            preferred_amenities: vec![],
            image: None,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        };
        let token = keys.sign(&user).expect("sign");

        let cookie = HeaderValue::from_str(&format!("{}={}", SESSION_COOKIE, token)).unwrap();
        let mut parts = parts_with_headers(vec![(header::COOKIE, cookie)]);
        let AuthUser(user_id) = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .expect("extractor should accept a fresh token");
        assert_eq!(user_id, user.id);
    }
}

#[cfg(test)]
mod header_tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_header_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        );
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session_token=cookie-token"),
        );
        assert_eq!(token_from_headers(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn session_cookie_is_found_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; session_token=tok; lang=en"),
        );
        assert_eq!(token_from_headers(&headers).as_deref(), Some("tok"));
    }

    #[test]
    fn missing_token_yields_none() {
        assert_eq!(token_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn cookie_value_shape() {
        let cookie = session_cookie("tok", Duration::from_secs(60));
        assert_eq!(
            cookie,
            "session_token=tok; Path=/; HttpOnly; SameSite=Lax; Max-Age=60"
        );
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
