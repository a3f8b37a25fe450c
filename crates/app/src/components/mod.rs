pub mod court_card;
pub mod navbar;
pub mod reservation_card;
pub mod slot_picker;
pub mod status_badge;

pub use court_card::CourtCard;
pub use navbar::Navbar;
pub use reservation_card::ReservationCard;
pub use slot_picker::{SlotPicker, SlotsState};
pub use status_badge::StatusBadge;
