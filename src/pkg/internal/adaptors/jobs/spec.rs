use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "currency", rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Inr,
}

impl Currency {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "USD" => Some(Currency::Usd),
            "INR" => Some(Currency::Inr),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Pending,
    Completed,
    Draft,
}

impl JobStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(JobStatus::Active),
            "pending" => Some(JobStatus::Pending),
            "completed" => Some(JobStatus::Completed),
            "draft" => Some(JobStatus::Draft),
            _ => None,
        }
    }
}

/// A job row as stored, id assigned by the database on insert.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct JobEntry {
    pub id: Uuid,
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

pub fn parse_job_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
