//! Route-level authorization: classifies each requested path and redirects
//! page navigations that are not allowed in the current session state. API
//! routes are never redirected here; their handlers answer 401 themselves.

use axum::{
    extract::{FromRef, Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::auth::dto::JwtKeys;
use crate::auth::services::token_from_headers;
use crate::state::AppState;

const AUTH_PREFIX: &str = "/auth";
const PROTECTED_PREFIXES: &[&str] = &["/profile", "/applications", "/saved"];
const SIGNIN_PATH: &str = "/auth/signin";
const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Sign-in / sign-up pages.
    Auth,
    /// Pages that require a session.
    Protected,
    Public,
}

pub fn classify(path: &str) -> RouteClass {
    if path.starts_with(AUTH_PREFIX) {
        RouteClass::Auth
    } else if PROTECTED_PREFIXES.iter().any(|p| path.starts_with(p)) {
        RouteClass::Protected
    } else {
        RouteClass::Public
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(String),
}

/// Pure decision function of (path, token validity). Rules in order:
/// an authenticated session may not revisit the auth pages; a protected
/// page without a session bounces to sign-in with the original path as the
/// callback; everything else passes through.
pub fn decide(path: &str, authenticated: bool) -> Decision {
    match classify(path) {
        RouteClass::Auth if authenticated => Decision::Redirect(HOME_PATH.to_string()),
        RouteClass::Protected if !authenticated => {
            Decision::Redirect(format!("{SIGNIN_PATH}?callbackUrl={path}"))
        }
        _ => Decision::Allow,
    }
}

pub async fn route_gate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let keys = JwtKeys::from_ref(&state);
    let authenticated = token_from_headers(req.headers())
        .map(|token| keys.verify(&token).is_ok())
        .unwrap_or(false);

    let path = req.uri().path().to_string();
    match decide(&path, authenticated) {
        Decision::Allow => next.run(req).await,
        Decision::Redirect(target) => {
            debug!(%path, %target, authenticated, "gate redirect");
            Redirect::temporary(&target).into_response()
        }
    }
}
