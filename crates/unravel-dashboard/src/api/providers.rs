//! Provider and backend catalog endpoint.

use axum::Json;
use unravel_hal::Provider;

use crate::dto::ProviderView;

/// GET /api/providers - Providers and the backends each one offers.
pub async fn list_providers() -> Json<Vec<ProviderView>> {
    Json(Provider::ALL.into_iter().map(ProviderView::from).collect())
}
