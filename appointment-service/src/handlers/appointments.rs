use crate::dtos::{AppointmentRequest, CreatedResponse, MessageResponse};
use crate::models::{parse_date, Appointment, AppointmentId};
use crate::resolver;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson};
use service_core::error::AppError;

/// All appointments referencing a user, by exact `user_id` match. An empty
/// array is a normal response, not an error.
pub async fn list_user_appointments(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let mut cursor = state
        .db
        .appointments()
        .find(doc! { "user_id": &user_id }, None)
        .await?;

    let mut appointments = Vec::new();
    while let Some(appointment) = cursor.try_next().await? {
        appointments.push(appointment);
    }

    Ok(Json(appointments))
}

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let appointments = state.db.appointments();
    let found = resolver::resolve(&id, |filter| {
        let appointments = appointments.clone();
        async move { appointments.find_one(filter, None).await.map_err(AppError::from) }
    })
    .await?;

    match found {
        Some(appointment) => Ok(Json(appointment).into_response()),
        None => Ok((StatusCode::NOT_FOUND, Json(serde_json::Value::Null)).into_response()),
    }
}

pub async fn add_appointment(
    State(state): State<AppState>,
    Json(body): Json<AppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Absent or empty identifier gets a time-derived one.
    let appointment_id = AppointmentId::from_body(body.appointment_id.as_ref())
        .unwrap_or_else(AppointmentId::generated);

    let appointment = Appointment {
        id: None,
        appointment_id: Some(appointment_id),
        title: body.title,
        description: body.description,
        date: body.date.as_deref().and_then(parse_date),
        user_id: body.user_id,
    };

    let result = state
        .db
        .appointments()
        .insert_one(&appointment, None)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert appointment into database: {}", e);
            AppError::from(e)
        })?;

    let inserted_id = result
        .inserted_id
        .as_object_id()
        .map(|oid| oid.to_hex())
        .unwrap_or_default();

    tracing::info!(appointment_id = ?appointment.appointment_id, "Appointment added");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Appointment added".to_string(),
            inserted_id,
        }),
    ))
}

/// Full-field replace. The identifier is recomputed from the body, so a body
/// without one clears the stored `appointment_id`.
pub async fn edit_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AppointmentRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let appointment_id = AppointmentId::from_body(body.appointment_id.as_ref());

    let update = doc! {
        "$set": {
            "appointment_id": appointment_id.as_ref().map_or(Bson::Null, Bson::from),
            "title": body.title.map_or(Bson::Null, Bson::String),
            "description": body.description.map_or(Bson::Null, Bson::String),
            "date": body.date.as_deref().and_then(parse_date).map_or(Bson::Null, Bson::DateTime),
            "user_id": body.user_id.map_or(Bson::Null, Bson::String),
        }
    };

    let appointments = state.db.appointments();
    let matched = resolver::resolve(&id, |filter| {
        let appointments = appointments.clone();
        let update = update.clone();
        async move {
            let result = appointments
                .update_one(filter, update, None)
                .await
                .map_err(AppError::from)?;
            Ok((result.matched_count > 0).then_some(()))
        }
    })
    .await?;

    match matched {
        Some(()) => {
            tracing::info!(id = %id, "Appointment updated");
            Ok(Json(MessageResponse {
                message: "Appointment updated".to_string(),
            }))
        }
        None => Err(AppError::NotFound(anyhow::anyhow!("Not found"))),
    }
}

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let appointments = state.db.appointments();
    let deleted = resolver::resolve(&id, |filter| {
        let appointments = appointments.clone();
        async move {
            let result = appointments
                .delete_one(filter, None)
                .await
                .map_err(AppError::from)?;
            Ok((result.deleted_count > 0).then_some(()))
        }
    })
    .await?;

    match deleted {
        Some(()) => {
            tracing::info!(id = %id, "Appointment deleted");
            Ok(Json(MessageResponse {
                message: "Appointment deleted".to_string(),
            }))
        }
        None => Err(AppError::NotFound(anyhow::anyhow!("Not found"))),
    }
}
