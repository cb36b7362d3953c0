use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::handlers;
use crate::routes;
use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the full application router over the given state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::MOTD,
            get(handlers::get_motd_handler).put(handlers::put_motd_handler),
        )
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until ctrl-c
pub async fn serve(config: &Config, state: AppState) -> Result<()> {
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("API listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("quitting from signal"),
        Err(e) => {
            tracing::error!("Unable to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MotdStore;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_motd_read_write_scenario() {
        let app = app(AppState::new(MotdStore::new()));

        assert_eq!(
            send(&app, "GET", "/api/nonzero/motd").await,
            (StatusCode::OK, "No motd entered.".to_string())
        );
        assert_eq!(
            send(&app, "PUT", "/api/nonzero/motd?input=hello").await,
            (StatusCode::OK, "hello".to_string())
        );
        assert_eq!(
            send(&app, "GET", "/api/nonzero/motd").await,
            (StatusCode::OK, "hello".to_string())
        );
        assert_eq!(
            send(&app, "PUT", "/api/nonzero/motd?input=").await,
            (StatusCode::OK, String::new())
        );
        assert_eq!(
            send(&app, "GET", "/api/nonzero/motd").await,
            (StatusCode::OK, String::new())
        );
    }

    #[tokio::test]
    async fn test_separate_states_do_not_share_motd() {
        let first = app(AppState::new(MotdStore::new()));
        let second = app(AppState::new(MotdStore::new()));

        send(&first, "PUT", "/api/nonzero/motd?input=only-first").await;

        assert_eq!(send(&first, "GET", routes::MOTD).await.1, "only-first");
        assert_eq!(send(&second, "GET", routes::MOTD).await.1, "No motd entered.");
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let app = app(AppState::new(MotdStore::new()));

        let (status, _) = send(&app, "DELETE", routes::MOTD).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_health_route_is_mounted() {
        let app = app(AppState::new(MotdStore::new()));

        let (status, body) = send(&app, "GET", routes::HEALTH).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("healthy"));
    }

    #[tokio::test]
    async fn test_openapi_document_lists_motd_route() {
        let app = app(AppState::new(MotdStore::new()));

        let (status, body) = send(&app, "GET", routes::OPENAPI_JSON).await;

        assert_eq!(status, StatusCode::OK);
        let doc: serde_json::Value = serde_json::from_str(&body).unwrap();
        let motd = &doc["paths"]["/api/nonzero/motd"];
        assert!(motd.get("get").is_some());
        assert!(motd.get("put").is_some());
        assert!(doc["paths"].get("/health").is_some());
    }
}
