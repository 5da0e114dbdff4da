use axum::{extract::State, Json};

use fruitbasket_core::listing::FruitListing;

use crate::{handlers::AppError, state::AppState};

/// List fruit names, reading through the cache (GET /).
pub async fn list_fruits(State(state): State<AppState>) -> Result<Json<FruitListing>, AppError> {
    let listing = state.lister.list().await?;

    tracing::debug!(db = ?listing.db, count = listing.data.len(), "Listed fruits");

    Ok(Json(listing))
}
