pub mod error;
pub mod routes;

use std::path::Path;
use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::roster_store::RosterStore;
use routes::activities;

pub type SharedRoster = Arc<RosterStore>;

pub const INDEX_PATH: &str = "/static/index.html";

/// Builds the full application: JSON API, static UI and root redirect.
pub fn router(store: SharedRoster, static_dir: impl AsRef<Path>) -> Router {
    // Rosters change under every signup, so the listing must never be cached.
    let listing = Router::new()
        .route("/activities", get(activities::activities_handler))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, max-age=0"),
        ));

    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .merge(listing)
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(store)
}
