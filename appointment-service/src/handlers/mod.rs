mod appointments;
mod health;
mod users;

pub use appointments::{
    add_appointment, delete_appointment, edit_appointment, get_appointment,
    list_user_appointments,
};
pub use health::health_check;
pub use users::{get_user, register_user};
