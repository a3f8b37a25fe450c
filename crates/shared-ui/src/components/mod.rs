// Standalone components
pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod textarea;

// Primitive wrappers
pub mod alert_dialog;
pub mod dialog;
pub mod toast;

pub use alert::*;
pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use form::*;
pub use input::*;
pub use page_header::*;
pub use skeleton::*;
pub use textarea::*;
pub use toast::*;
