//! Styled Dioxus components for the courts web client.
//!
//! Each component ships its own `style.css`, linked on first render. Colors
//! come from the custom properties declared in the app's `main.css`.

pub mod components;

pub use components::*;
