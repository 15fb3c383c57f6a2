use axum::Router;
use registry::AppRegistry;

use super::{
    health::build_health_check_routers, profile::build_resident_routers,
    reservation::build_reservation_routers, space::build_space_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_space_routers())
        .merge(build_reservation_routers())
        .merge(build_resident_routers());
    Router::new().nest("/api/v1", router)
}
