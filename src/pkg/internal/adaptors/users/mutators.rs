use sqlx::PgConnection;

use crate::pkg::internal::adaptors::users::spec::UserEntry;
use crate::pkg::server::handlers::users::UserProfile;
use crate::prelude::{db_err, Result};

pub struct UserMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> UserMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        UserMutator { pool }
    }

    pub async fn update(&mut self, user_id: &str, profile: UserProfile) -> Result<Option<UserEntry>> {
        let row = sqlx::query_as::<_, UserEntry>(
            r#"
            UPDATE users SET name = $2, email = $3
            WHERE user_id = $1
            RETURNING user_id, name, email
            "#,
        )
        .bind(user_id)
        .bind(&profile.name)
        .bind(&profile.email)
        .fetch_optional(&mut *self.pool)
        .await
        .map_err(db_err)?;
        Ok(row)
    }
}
