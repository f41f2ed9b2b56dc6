use crate::pkg::internal::adaptors::users::mutators::UserMutator;
use crate::pkg::internal::adaptors::users::spec::UserEntry;
use crate::pkg::server::handlers::users::UserProfile;
use crate::pkg::server::state::AppState;
use crate::prelude::{db_err, Result};

pub struct UserService<'a> {
    state: &'a AppState,
}

impl<'a> UserService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        UserService { state }
    }

    pub async fn update(&self, user_id: &str, profile: UserProfile) -> Result<Option<UserEntry>> {
        let mut conn = self.state.db_pool.acquire().await.map_err(db_err)?;
        UserMutator::new(&mut conn).update(user_id, profile).await
    }
}
