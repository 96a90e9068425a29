use axum::{
    extract::{Query, State},
    Json,
};
use tracing::instrument;

use crate::properties::catalog::Property;
use crate::properties::filter::{filter_properties, ListingQuery};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_properties(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Json<Vec<Property>> {
    let all = state.properties.all().await;
    Json(filter_properties(&query, &all))
}
