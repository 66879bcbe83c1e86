mod appointments;
mod users;

pub use appointments::AppointmentRequest;
pub use users::RegisterUserRequest;

use serde::{Deserialize, Serialize};

/// Body returned by the insert endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
