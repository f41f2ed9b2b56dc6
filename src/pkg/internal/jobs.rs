use uuid::Uuid;

use crate::pkg::internal::adaptors::jobs::mutators::JobMutator;
use crate::pkg::internal::adaptors::jobs::selectors::JobSelector;
use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::server::handlers::jobs::JobRecord;
use crate::pkg::server::state::AppState;
use crate::prelude::{db_err, Result};

/// Pass-through between the handlers and the jobs adaptors. Acquires a
/// pooled connection and forwards the call; business rules such as
/// referential checks on user_id/skill_ids would live here.
pub struct JobService<'a> {
    state: &'a AppState,
}

impl<'a> JobService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        JobService { state }
    }

    pub async fn create(&self, job: JobRecord) -> Result<JobEntry> {
        let mut conn = self.state.db_pool.acquire().await.map_err(db_err)?;
        JobMutator::new(&mut conn).create(job).await
    }

    pub async fn list(&self) -> Result<Vec<JobEntry>> {
        let mut conn = self.state.db_pool.acquire().await.map_err(db_err)?;
        JobSelector::new(&mut conn).get_all().await
    }

    pub async fn update(&self, id: Uuid, job: JobRecord) -> Result<Option<JobEntry>> {
        let mut conn = self.state.db_pool.acquire().await.map_err(db_err)?;
        JobMutator::new(&mut conn).update(id, job).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut conn = self.state.db_pool.acquire().await.map_err(db_err)?;
        JobMutator::new(&mut conn).delete(id).await
    }
}

// run with `cargo test -- --ignored` against a local postgres
#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sqlx::migrate::Migrator;
    use standard_error::{Interpolate, StandardError};
    use tracing_test::traced_test;
    use uuid::Uuid;

    use super::JobService;
    use crate::pkg::internal::adaptors::jobs::spec::{Currency, JobStatus};
    use crate::pkg::server::handlers::jobs::JobRecord;
    use crate::pkg::server::state::AppState;
    use crate::prelude::Result;

    static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

    async fn migrated_state() -> Result<AppState> {
        let state = AppState::new().await?;
        MIGRATOR
            .run(&*state.db_pool)
            .await
            .map_err(|e| StandardError::new("ERR-DB-000").interpolate_err(e.to_string()))?;
        Ok(state)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn sample(title: &str) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            skill_ids: vec!["welding".into(), "rigging".into()],
            location: "Pune".into(),
            start_date: date(2024, 6, 1),
            end_date: date(2024, 6, 30),
            start_time: date(2024, 6, 1),
            end_time: date(2024, 6, 1),
            amount: 1500,
            currency: Currency::Inr,
            description: "Supervise the on-site crew".into(),
            image: vec![],
            status: JobStatus::Pending,
            user_id: "u-204".into(),
        }
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "requires postgres reachable at DATABASE_URL"]
    async fn test_created_jobs_come_back_through_list() -> Result<()> {
        let state = migrated_state().await?;
        let service = JobService::new(&state);

        let created = service.create(sample("Crane operator")).await?;
        let listed = service.list().await?;
        let found = listed
            .iter()
            .find(|job| job.id == created.id)
            .expect("created job should be listed");

        assert_eq!(found.title, "Crane operator");
        assert_eq!(found.skill_ids, vec!["welding", "rigging"]);
        assert_eq!(found.location, "Pune");
        assert_eq!(found.start_date, date(2024, 6, 1));
        assert_eq!(found.end_date, date(2024, 6, 30));
        assert_eq!(found.start_time, date(2024, 6, 1));
        assert_eq!(found.end_time, date(2024, 6, 1));
        assert_eq!(found.amount, 1500);
        assert_eq!(found.currency, Currency::Inr);
        assert_eq!(found.description, "Supervise the on-site crew");
        assert!(found.image.is_empty());
        assert_eq!(found.status, JobStatus::Pending);
        assert_eq!(found.user_id, "u-204");

        service.delete(created.id).await?;
        Ok(())
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "requires postgres reachable at DATABASE_URL"]
    async fn test_update_replaces_the_whole_document() -> Result<()> {
        let state = migrated_state().await?;
        let service = JobService::new(&state);

        let created = service.create(sample("Night shift lead")).await?;
        let mut replacement = sample("Day shift lead");
        replacement.amount = 2000;
        replacement.status = JobStatus::Completed;

        let updated = service
            .update(created.id, replacement)
            .await?
            .expect("existing job should update");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Day shift lead");
        assert_eq!(updated.amount, 2000);
        assert_eq!(updated.status, JobStatus::Completed);

        service.delete(created.id).await?;
        Ok(())
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "requires postgres reachable at DATABASE_URL"]
    async fn test_update_on_a_missing_id_creates_nothing() -> Result<()> {
        let state = migrated_state().await?;
        let service = JobService::new(&state);

        let missing = Uuid::nil();
        let outcome = service.update(missing, sample("Ghost posting")).await?;
        assert!(outcome.is_none());
        assert!(service.list().await?.iter().all(|job| job.id != missing));
        Ok(())
    }

    #[traced_test]
    #[tokio::test]
    #[ignore = "requires postgres reachable at DATABASE_URL"]
    async fn test_delete_is_idempotent() -> Result<()> {
        let state = migrated_state().await?;
        let service = JobService::new(&state);

        let created = service.create(sample("Scaffolder")).await?;
        assert!(service.delete(created.id).await?);
        assert!(!service.delete(created.id).await?);
        assert!(service.list().await?.iter().all(|job| job.id != created.id));
        Ok(())
    }
}
