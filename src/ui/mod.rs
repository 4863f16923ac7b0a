// UI module
// Contains layout, components, and UI-related functionality

pub mod layout;
pub mod components;

pub use layout::{render_app_layout, UiAction};
pub use components::*;
