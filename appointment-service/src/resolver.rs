//! Identifier resolution for appointment routes.
//!
//! A path identifier may refer to a numerically-keyed appointment, a
//! string-keyed one, or the storage-assigned `_id`. The candidate filters are
//! tried strictly in that order and resolution stops at the first match, so a
//! record stored with a numeric identifier is never shadowed by a
//! coincidental string match (and vice versa), and a write touches at most
//! one document.

use crate::models::AppointmentId;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use service_core::error::AppError;
use std::future::Future;

/// Candidate filters for a raw path identifier, in resolution order.
pub fn candidate_filters(raw_id: &str) -> Vec<Document> {
    let mut filters = Vec::with_capacity(3);
    if let Some(numeric) = AppointmentId::coerce_numeric(raw_id) {
        filters.push(doc! { "appointment_id": Bson::from(&numeric) });
    }
    filters.push(doc! { "appointment_id": raw_id });
    if let Ok(oid) = ObjectId::parse_str(raw_id) {
        filters.push(doc! { "_id": oid });
    }
    filters
}

/// Run `action` against each candidate filter in order, returning the first
/// positive result, or `Ok(None)` when no strategy matched.
pub async fn resolve<T, F, Fut>(raw_id: &str, mut action: F) -> Result<Option<T>, AppError>
where
    F: FnMut(Document) -> Fut,
    Fut: Future<Output = Result<Option<T>, AppError>>,
{
    for filter in candidate_filters(raw_id) {
        if let Some(hit) = action(filter).await? {
            return Ok(Some(hit));
        }
    }
    Ok(None)
}
