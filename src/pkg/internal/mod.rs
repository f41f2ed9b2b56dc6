pub mod adaptors;
pub mod jobs;
pub mod users;
