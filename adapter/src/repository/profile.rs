use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ProfileId,
    profile::{event::CreateProfile, Profile},
    role::Role,
};
use kernel::repository::profile::ProfileRepository;
use shared::error::AppResult;

use crate::store::SharedStore;

#[derive(new)]
pub struct ProfileRepositoryImpl {
    store: SharedStore,
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Profile>> {
        Ok(self.store.read().directory.clone())
    }

    async fn find_actor(&self, profile_id: &ProfileId) -> AppResult<Option<Profile>> {
        Ok(self.store.read().find_profile(profile_id))
    }

    async fn add_all(&self, events: Vec<CreateProfile>) -> AppResult<Vec<Profile>> {
        let imported: Vec<Profile> = events
            .into_iter()
            .map(|event| {
                let CreateProfile {
                    full_name,
                    email,
                    unit_number,
                } = event;
                Profile {
                    id: ProfileId::new(),
                    full_name,
                    email,
                    unit_number,
                    role: Role::Resident,
                }
            })
            .collect();

        if imported.is_empty() {
            return Ok(imported);
        }

        let mut state = self.store.write();
        state.directory.extend(imported.iter().cloned());
        self.store.persist(&state);

        Ok(imported)
    }
}
