pub mod detail;
pub mod list;

pub use detail::ReservationDetail;
pub use list::MyReservations;

pub const CANCEL_CONFIRM: &str = "Are you sure you want to cancel this reservation?";
pub const CANCEL_FAILED: &str = "Failed to cancel reservation";
