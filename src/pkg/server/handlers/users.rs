use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use crate::pkg::internal::adaptors::users::spec::UserEntry;
use crate::pkg::internal::users::UserService;
use crate::pkg::server::extract::{FieldOrder, ValidatedJson};
use crate::pkg::server::response::{ApiError, Envelope};
use crate::pkg::server::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct UserProfile {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub email: String,
}

impl FieldOrder for UserProfile {
    const FIELDS: &'static [&'static str] = &["name", "email"];
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(profile): ValidatedJson<UserProfile>,
) -> Result<Json<Envelope<UserEntry>>, ApiError> {
    match UserService::new(&state).update(&id, profile).await? {
        Some(user) => Ok(Envelope::ok(user)),
        None => Err(ApiError::not_found("User not found or not updated")),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use validator::Validate;

    use super::UserProfile;
    use crate::pkg::server::extract::first_message;

    #[test]
    fn rejects_an_empty_name() {
        let profile: UserProfile =
            serde_json::from_value(json!({"name": "", "email": "a@b.co"})).expect("deserialize");
        let errors = profile.validate().expect_err("should fail");
        assert_eq!(first_message::<UserProfile>(&errors), "Field cannot be empty");
    }

    #[test]
    fn accepts_a_populated_profile() {
        let profile: UserProfile =
            serde_json::from_value(json!({"name": "Asha", "email": "asha@example.com"}))
                .expect("deserialize");
        assert!(profile.validate().is_ok());
    }
}
