use serde::Deserialize;

/// Body for add and edit. `appointment_id` stays a raw JSON value because a
/// caller may send a number, a numeric string, an arbitrary string, or
/// nothing; coercion happens in one place (`AppointmentId::from_body`).
#[derive(Debug, Deserialize)]
pub struct AppointmentRequest {
    pub appointment_id: Option<serde_json::Value>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub user_id: Option<String>,
}
