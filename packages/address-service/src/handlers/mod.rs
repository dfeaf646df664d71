pub mod addresses;

use axum::{
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::address::AddressService;

pub use addresses::{create_address, delete_address, list_addresses, update_address};

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "address-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// HTTP routes for the address service
pub fn router(service: Arc<AddressService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/addresses", get(list_addresses).post(create_address))
        .route("/addresses/", get(list_addresses).post(create_address))
        .route("/addresses/:id", put(update_address).delete(delete_address))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::InMemoryAddressStore;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(AddressService::new(Arc::new(
            InMemoryAddressStore::new(),
        ))))
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_no_content() {
        let response = app()
            .oneshot(
                Request::delete("/addresses/77")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_partial_query_is_unprocessable() {
        let response = app()
            .oneshot(
                Request::get("/addresses/?lat=2.5&long=3.0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
