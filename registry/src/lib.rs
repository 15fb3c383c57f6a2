use std::sync::Arc;

use adapter::repository::profile::ProfileRepositoryImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use adapter::repository::space::SpaceRepositoryImpl;
use adapter::store::SharedStore;
use kernel::repository::profile::ProfileRepository;
use kernel::repository::reservation::ReservationRepository;
use kernel::repository::space::SpaceRepository;

#[derive(Clone)]
pub struct AppRegistry {
    space_repository: Arc<dyn SpaceRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    profile_repository: Arc<dyn ProfileRepository>,
}

impl AppRegistry {
    pub fn new(store: SharedStore) -> Self {
        let space_repository = Arc::new(SpaceRepositoryImpl::new());
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(store.clone()));
        let profile_repository = Arc::new(ProfileRepositoryImpl::new(store));
        Self {
            space_repository,
            reservation_repository,
            profile_repository,
        }
    }

    pub fn space_repository(&self) -> Arc<dyn SpaceRepository> {
        self.space_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn profile_repository(&self) -> Arc<dyn ProfileRepository> {
        self.profile_repository.clone()
    }
}
