use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct UserEntry {
    pub user_id: String,
    pub name: String,
    pub email: String,
}
