use axum::extract::State;
use sqlx::query;

use crate::pkg::server::response::ApiError;
use crate::pkg::server::state::AppState;
use crate::prelude::db_err;

pub async fn livez() -> &'static str {
    tracing::debug!("service is live");
    "ok"
}

pub async fn healthz(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    query("select 1")
        .execute(&*state.db_pool)
        .await
        .map_err(db_err)?;
    tracing::debug!("service is healthy");
    Ok("ok")
}
