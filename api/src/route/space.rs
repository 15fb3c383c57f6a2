use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::space::{
    show_slot_list, show_space, show_space_availability, show_space_list,
};

pub fn build_space_routers() -> Router<AppRegistry> {
    let spaces_routers = Router::new()
        .route("/", get(show_space_list))
        .route("/:space_id", get(show_space))
        .route("/:space_id/availability", get(show_space_availability));

    Router::new()
        .route("/slots", get(show_slot_list))
        .nest("/spaces", spaces_routers)
}
