mod appointment;
mod user;

pub use appointment::{parse_date, Appointment, AppointmentId};
pub use user::User;
