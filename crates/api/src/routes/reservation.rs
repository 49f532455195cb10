use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/reservations/get",
            get(handlers::reservation::get_reservations),
        )
        .route(
            "/reservations/add",
            post(handlers::reservation::add_reservation),
        )
        .route(
            "/reservations/delete/:reserve_id",
            delete(handlers::reservation::delete_reservation),
        )
}
