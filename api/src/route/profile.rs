use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::profile::{import_residents, show_resident_list};

pub fn build_resident_routers() -> Router<AppRegistry> {
    let residents_routers = Router::new()
        .route("/", get(show_resident_list))
        .route("/import", post(import_residents));

    Router::new().nest("/residents", residents_routers)
}
