use axum::{routing::get, Router};

use crate::state::AppState;

pub mod catalog;
pub mod filter;
pub mod handlers;

pub use catalog::{Property, PropertyCatalog, SeedCatalog};

pub fn router() -> Router<AppState> {
    Router::new().route("/properties", get(handlers::list_properties))
}
