use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::prelude::{db_err, Result};

pub struct JobSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobSelector { pool }
    }

    // store-native order, no pagination
    pub async fn get_all(&mut self) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, skill_ids, location, start_date, end_date, start_time, end_time,
                    amount, currency, description, image, status, user_id
             FROM jobs",
        )
        .fetch_all(&mut *self.pool)
        .await
        .map_err(db_err)?;

        Ok(rows)
    }
}
