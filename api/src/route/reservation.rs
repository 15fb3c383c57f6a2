use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    cancel_reservation, reserve_space, show_my_reservation_list, show_reservation,
    show_reservation_list,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservations_routers = Router::new()
        .route("/", post(reserve_space))
        .route("/", get(show_reservation_list))
        .route("/me", get(show_my_reservation_list))
        .route("/:reservation_id", get(show_reservation))
        .route("/:reservation_id/cancel", put(cancel_reservation));

    Router::new().nest("/reservations", reservations_routers)
}
