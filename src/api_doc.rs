use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "motd-api",
        version = "0.1.0",
        description = "Read and replace a single in-memory message of the day"
    ),
    paths(
        handlers::health::health_handler,
        handlers::get::get_motd_handler,
        handlers::put::put_motd_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "motd", description = "Message of the day operations")
    )
)]
pub struct ApiDoc;
