use crate::error::{ApiError, ErrorResponse};
use crate::models::MotdQuery;
use crate::routes;
use crate::state::AppState;
use axum::extract::rejection::{QueryRejection, StringRejection};
use axum::extract::{Query, State};

/// PUT /api/nonzero/motd handler - Replace the message of the day
///
/// The new message comes from the `input` query parameter, or from the request
/// body when the parameter is absent. Any text is accepted, including an empty one.
#[utoipa::path(
    put,
    path = routes::MOTD,
    params(MotdQuery),
    request_body(content = String, content_type = "text/plain",
        description = "New message, used when the `input` query parameter is absent"),
    responses(
        (status = 200, description = "Message stored; echoes the stored value",
            body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed query string or non UTF-8 body", body = ErrorResponse)
    ),
    tag = "motd"
)]
pub async fn put_motd_handler(
    State(state): State<AppState>,
    query: Result<Query<MotdQuery>, QueryRejection>,
    body: Result<String, StringRejection>,
) -> Result<String, ApiError> {
    let Query(query) = query?;
    let input = match query.input {
        Some(input) => input,
        None => body?,
    };

    let stored = state.store.set(input).await;

    tracing::info!("Stored new motd ({} bytes)", stored.len());
    Ok(stored)
}
