use crate::dtos::{CreatedResponse, RegisterUserRequest};
use crate::models::User;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mongodb::bson::doc;
use service_core::error::AppError;

/// Exact-match lookup by `user_id`. A missing user is a 404 with a literal
/// `null` body, not an error envelope.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, AppError> {
    let user = state
        .db
        .users()
        .find_one(doc! { "user_id": &user_id }, None)
        .await?;

    match user {
        Some(user) => Ok(Json(user).into_response()),
        None => Ok((StatusCode::NOT_FOUND, Json(serde_json::Value::Null)).into_response()),
    }
}

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = User {
        id: None,
        user_id: body.user_id,
        user_name: body.user_name,
        password: body.password,
        mobile: body.mobile,
    };

    let result = state.db.users().insert_one(&user, None).await.map_err(|e| {
        tracing::error!("Failed to insert user into database: {}", e);
        AppError::from(e)
    })?;

    let inserted_id = result
        .inserted_id
        .as_object_id()
        .map(|oid| oid.to_hex())
        .unwrap_or_default();

    tracing::info!(user_id = ?user.user_id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "User registered".to_string(),
            inserted_id,
        }),
    ))
}
