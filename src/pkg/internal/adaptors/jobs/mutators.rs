use sqlx::PgConnection;
use uuid::Uuid;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::server::handlers::jobs::JobRecord;
use crate::prelude::{db_err, Result};

pub struct JobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, job: JobRecord) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (title, skill_ids, location, start_date, end_date, start_time,
                              end_time, amount, currency, description, image, status, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, title, skill_ids, location, start_date, end_date, start_time, end_time,
                      amount, currency, description, image, status, user_id
            "#,
        )
        .bind(&job.title)
        .bind(&job.skill_ids)
        .bind(&job.location)
        .bind(job.start_date)
        .bind(job.end_date)
        .bind(job.start_time)
        .bind(job.end_time)
        .bind(job.amount)
        .bind(job.currency)
        .bind(&job.description)
        .bind(&job.image)
        .bind(job.status)
        .bind(&job.user_id)
        .fetch_one(&mut *self.pool)
        .await
        .map_err(db_err)?;
        Ok(row)
    }

    // full-document replace; None when no row matched the id
    pub async fn update(&mut self, id: Uuid, job: JobRecord) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            UPDATE jobs
            SET title = $2, skill_ids = $3, location = $4, start_date = $5, end_date = $6,
                start_time = $7, end_time = $8, amount = $9, currency = $10, description = $11,
                image = $12, status = $13, user_id = $14
            WHERE id = $1
            RETURNING id, title, skill_ids, location, start_date, end_date, start_time, end_time,
                      amount, currency, description, image, status, user_id
            "#,
        )
        .bind(id)
        .bind(&job.title)
        .bind(&job.skill_ids)
        .bind(&job.location)
        .bind(job.start_date)
        .bind(job.end_date)
        .bind(job.start_time)
        .bind(job.end_time)
        .bind(job.amount)
        .bind(job.currency)
        .bind(&job.description)
        .bind(&job.image)
        .bind(job.status)
        .bind(&job.user_id)
        .fetch_optional(&mut *self.pool)
        .await
        .map_err(db_err)?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() > 0)
    }
}
