pub mod users;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/user/create", post(users::create))
        .route("/user/token", post(users::obtain_token))
        // Read/patch only; POST here gets a 405 from the router.
        .route("/user/me", get(users::me).patch(users::update_me))
}
