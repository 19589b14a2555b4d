//! Service banner

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

async fn index() -> Json<Value> {
    Json(json!({ "message": "Inventory Management API is running!" }))
}

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::server::create_router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            create_router::<ApiDoc>(Router::new(), router()).unwrap()
        })
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_banner() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "message": "Inventory Management API is running!" })
        );
    }

    #[tokio::test]
    async fn test_unknown_path_uses_json_fallback() {
        let response = app()
            .oneshot(Request::get("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await, json!({ "error": "Not Found" }));
    }

    #[tokio::test]
    async fn test_openapi_document_lists_product_paths() {
        let response = app()
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = json_body(response).await;
        assert!(doc["paths"].get("/api/products").is_some());
        assert!(doc["paths"].get("/api/products/{id}").is_some());
    }
}
