use crate::routes;
use crate::state::AppState;
use axum::extract::State;

/// GET /api/nonzero/motd handler - Read the message of the day
#[utoipa::path(
    get,
    path = routes::MOTD,
    responses(
        (status = 200, description = "Current message, or \"No motd entered.\" if none is set",
            body = String, content_type = "text/plain")
    ),
    tag = "motd"
)]
pub async fn get_motd_handler(State(state): State<AppState>) -> String {
    let motd = state.store.get().await;
    tracing::debug!("Read motd ({} bytes)", motd.len());
    motd
}
