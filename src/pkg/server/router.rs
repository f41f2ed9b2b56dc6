use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/job", post(handlers::jobs::create))
        .route("/job", get(handlers::jobs::list))
        .route("/job/:id", put(handlers::jobs::update))
        .route("/job/:id", delete(handlers::jobs::remove))
        .route("/user/:id", put(handlers::users::update))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}
