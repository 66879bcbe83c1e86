use chrono::{DateTime, NaiveDate, Utc};
use mongodb::bson::{self, oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

/// Domain identifier of an appointment. Distinct from the storage-assigned
/// `_id`: callers may supply a number, an arbitrary string, or nothing at
/// all, and lookups have to honor whichever form was stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppointmentId {
    Int(i64),
    Float(f64),
    Str(String),
}

/// High-water mark for generated identifiers, so two adds landing in the
/// same millisecond still receive distinct values.
static LAST_GENERATED: AtomicI64 = AtomicI64::new(0);

impl AppointmentId {
    /// Numeric coercion of a raw string: integer first, then float, else
    /// `None`.
    pub fn coerce_numeric(raw: &str) -> Option<Self> {
        if let Ok(n) = raw.parse::<i64>() {
            return Some(AppointmentId::Int(n));
        }
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => Some(AppointmentId::Float(f)),
            _ => None,
        }
    }

    /// Coerce a caller-supplied identifier, keeping the original string when
    /// it is not a number.
    pub fn coerce(raw: &str) -> Self {
        Self::coerce_numeric(raw).unwrap_or_else(|| AppointmentId::Str(raw.to_string()))
    }

    /// Recompute the identifier from a request body value: numbers pass
    /// through, numeric strings are coerced, other strings are kept as-is,
    /// and absent or empty input yields `None`.
    pub fn from_body(value: Option<&serde_json::Value>) -> Option<Self> {
        match value? {
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(AppointmentId::Int(i))
                } else {
                    n.as_f64().map(AppointmentId::Float)
                }
            }
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(Self::coerce(s)),
            _ => None,
        }
    }

    /// Time-derived identifier for appointments added without one. Strictly
    /// increasing within the process even when calls share a millisecond.
    pub fn generated() -> Self {
        let now = Utc::now().timestamp_millis();
        loop {
            let last = LAST_GENERATED.load(Ordering::SeqCst);
            let candidate = now.max(last + 1);
            if LAST_GENERATED
                .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return AppointmentId::Int(candidate);
            }
        }
    }
}

impl From<&AppointmentId> for Bson {
    fn from(id: &AppointmentId) -> Bson {
        match id {
            AppointmentId::Int(n) => Bson::Int64(*n),
            AppointmentId::Float(f) => Bson::Double(*f),
            AppointmentId::Str(s) => Bson::String(s.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<AppointmentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<bson::DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Parse a caller-supplied date string. Accepts RFC 3339 timestamps and bare
/// `YYYY-MM-DD` dates (midnight UTC); anything else is stored as absent.
pub fn parse_date(raw: &str) -> Option<bson::DateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(bson::DateTime::from_chrono(dt.with_timezone(&Utc)));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        let dt = DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc);
        return Some(bson::DateTime::from_chrono(dt));
    }
    None
}
