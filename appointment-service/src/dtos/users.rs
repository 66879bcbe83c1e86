use serde::Deserialize;

/// Registration body. No field is validated and no uniqueness is enforced;
/// whatever the caller sends is stored as-is.
#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub mobile: Option<String>,
}
