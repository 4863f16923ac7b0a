// State management module
// Holds the question input, the two output areas and UI preferences

pub mod app_state;

pub use app_state::AppState;
