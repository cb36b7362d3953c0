use serde::Deserialize;

/// Query parameters for setting the message of the day
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MotdQuery {
    /// New message; takes precedence over the request body
    pub input: Option<String>,
}
