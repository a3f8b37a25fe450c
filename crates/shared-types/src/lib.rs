pub mod error;
pub mod feature_flags;

// Courts reservation domain
pub mod court;
pub mod reservation;
pub mod slot;
pub mod user;

pub use error::*;
pub use feature_flags::*;

pub use court::*;
pub use reservation::*;
pub use slot::*;
pub use user::*;
