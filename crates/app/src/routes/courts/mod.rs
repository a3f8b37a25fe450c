pub mod detail;
pub mod list;
pub mod reserve_modal;

pub use detail::CourtDetail;
pub use list::Courts;
pub use reserve_modal::ReserveModal;
