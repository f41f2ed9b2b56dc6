use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::pkg::internal::adaptors::jobs::spec::{parse_job_date, Currency, JobEntry, JobStatus};
use crate::pkg::internal::jobs::JobService;
use crate::pkg::server::extract::{FieldOrder, ValidatedJson};
use crate::pkg::server::response::{ApiError, Envelope};
use crate::pkg::server::state::AppState;

/// Raw request body for create and update. Every field is optional so the
/// rule set below can report absence with its own message instead of a
/// deserializer error; rules are checked per field, first failure wins.
#[derive(Debug, Deserialize, Validate)]
pub struct JobBody {
    #[validate(required(message = "Title is required."), custom = "validate_title")]
    pub title: Option<String>,
    #[validate(
        required(message = "Skill are required."),
        length(min = 1, message = "Skill are required.")
    )]
    pub skill_ids: Option<Vec<String>>,
    #[validate(required(message = "Location is required."))]
    pub location: Option<String>,
    #[validate(
        required(message = "start date is required."),
        custom = "validate_start_date"
    )]
    pub start_date: Option<String>,
    #[validate(
        required(message = "end date is required."),
        custom = "validate_end_date"
    )]
    pub end_date: Option<String>,
    #[validate(
        required(message = "start time is required."),
        custom = "validate_start_time"
    )]
    pub start_time: Option<String>,
    #[validate(
        required(message = "end time is required."),
        custom = "validate_end_time"
    )]
    pub end_time: Option<String>,
    #[validate(
        required(message = "amount is required."),
        range(min = 1, message = "amount can't be 0 or negative value.")
    )]
    pub amount: Option<i64>,
    #[validate(
        required(message = "currency is required."),
        custom = "validate_currency"
    )]
    pub currency: Option<String>,
    #[validate(
        required(message = "Description is required."),
        custom = "validate_description"
    )]
    pub description: Option<String>,
    #[validate(required(message = "image must be list of images."))]
    pub image: Option<Vec<String>>,
    #[validate(required(message = "status is required."), custom = "validate_status")]
    pub status: Option<String>,
    #[validate(required(message = "user_id is required."))]
    pub user_id: Option<String>,
}

impl FieldOrder for JobBody {
    const FIELDS: &'static [&'static str] = &[
        "title",
        "skill_ids",
        "location",
        "start_date",
        "end_date",
        "start_time",
        "end_time",
        "amount",
        "currency",
        "description",
        "image",
        "status",
        "user_id",
    ];
}

/// A body that passed the rule set, with dates and enums parsed. This is
/// what the adaptors persist.
#[derive(Debug)]
pub struct JobRecord {
    pub title: String,
    pub skill_ids: Vec<String>,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveDate,
    pub end_time: NaiveDate,
    pub amount: i64,
    pub currency: Currency,
    pub description: String,
    pub image: Vec<String>,
    pub status: JobStatus,
    pub user_id: String,
}

impl JobBody {
    /// Converts into the typed record. Always called after validation, so
    /// each step re-reports the matching rule message should a caller skip
    /// the extractor.
    pub fn record(self) -> Result<JobRecord, ApiError> {
        let title = self
            .title
            .ok_or_else(|| ApiError::bad_request("Title is required."))?;
        let description = self
            .description
            .ok_or_else(|| ApiError::bad_request("Description is required."))?;
        Ok(JobRecord {
            title: title.trim().to_string(),
            skill_ids: self
                .skill_ids
                .ok_or_else(|| ApiError::bad_request("Skill are required."))?,
            location: self
                .location
                .ok_or_else(|| ApiError::bad_request("Location is required."))?,
            start_date: parse_record_date(self.start_date, "start date")?,
            end_date: parse_record_date(self.end_date, "end date")?,
            start_time: parse_record_date(self.start_time, "start time")?,
            end_time: parse_record_date(self.end_time, "end time")?,
            amount: self
                .amount
                .ok_or_else(|| ApiError::bad_request("amount is required."))?,
            currency: self
                .currency
                .as_deref()
                .and_then(Currency::parse)
                .ok_or_else(|| ApiError::bad_request(CURRENCY_MESSAGE))?,
            description: description.trim().to_string(),
            image: self
                .image
                .ok_or_else(|| ApiError::bad_request("image must be list of images."))?,
            status: self
                .status
                .as_deref()
                .and_then(JobStatus::parse)
                .ok_or_else(|| ApiError::bad_request(STATUS_MESSAGE))?,
            user_id: self
                .user_id
                .ok_or_else(|| ApiError::bad_request("user_id is required."))?,
        })
    }
}

fn parse_record_date(value: Option<String>, label: &str) -> Result<NaiveDate, ApiError> {
    value
        .as_deref()
        .and_then(parse_job_date)
        .ok_or_else(|| {
            ApiError::bad_request(format!("{label} must be a Date and in YYYY-MM-DD format."))
        })
}

const CURRENCY_MESSAGE: &str = "currency must be one of the following : ['USD', 'INR'].";
const STATUS_MESSAGE: &str =
    "status must be one of the following : ['active', 'pending', 'completed', 'draft'].";

fn rule_failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut failure = ValidationError::new(code);
    failure.message = Some(message.into());
    failure
}

fn bounded_text(
    value: &str,
    empty_message: &'static str,
    overflow_message: &'static str,
) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(rule_failure("empty", empty_message));
    }
    if trimmed.chars().count() > 150 {
        return Err(rule_failure("max_length", overflow_message));
    }
    Ok(())
}

fn validate_title(value: &str) -> Result<(), ValidationError> {
    bounded_text(
        value,
        "Title is required.",
        "Title must not exceed 150 characters.",
    )
}

fn validate_description(value: &str) -> Result<(), ValidationError> {
    bounded_text(
        value,
        "Description is required.",
        "Description must not exceed 150 characters.",
    )
}

fn date_rule(value: &str, message: &'static str) -> Result<(), ValidationError> {
    parse_job_date(value)
        .map(|_| ())
        .ok_or_else(|| rule_failure("date", message))
}

fn validate_start_date(value: &str) -> Result<(), ValidationError> {
    date_rule(value, "start date must be a Date and in YYYY-MM-DD format.")
}

fn validate_end_date(value: &str) -> Result<(), ValidationError> {
    date_rule(value, "end date must be a Date and in YYYY-MM-DD format.")
}

fn validate_start_time(value: &str) -> Result<(), ValidationError> {
    date_rule(value, "start time must be a Date and in YYYY-MM-DD format.")
}

fn validate_end_time(value: &str) -> Result<(), ValidationError> {
    date_rule(value, "end time must be a Date and in YYYY-MM-DD format.")
}

fn validate_currency(value: &str) -> Result<(), ValidationError> {
    Currency::parse(value)
        .map(|_| ())
        .ok_or_else(|| rule_failure("currency", CURRENCY_MESSAGE))
}

fn validate_status(value: &str) -> Result<(), ValidationError> {
    JobStatus::parse(value)
        .map(|_| ())
        .ok_or_else(|| rule_failure("status", STATUS_MESSAGE))
}

pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<JobBody>,
) -> Result<Json<Envelope<JobEntry>>, ApiError> {
    let job = JobService::new(&state).create(body.record()?).await?;
    Ok(Envelope::ok(job))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<JobEntry>>>, ApiError> {
    let jobs = JobService::new(&state).list().await?;
    Ok(Envelope::ok(jobs))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<JobBody>,
) -> Result<Json<Envelope<JobEntry>>, ApiError> {
    match JobService::new(&state).update(id, body.record()?).await? {
        Some(job) => Ok(Envelope::ok(job)),
        None => Err(ApiError::not_found("Job not found or not updated")),
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<&'static str>>, ApiError> {
    if JobService::new(&state).delete(id).await? {
        Ok(Envelope::ok("Job deleted successfully"))
    } else {
        Err(ApiError::not_found("Job not found or not deleted"))
    }
}
