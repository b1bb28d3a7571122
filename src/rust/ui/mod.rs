//! Terminal presentation of the detector: form state, rendering and the
//! interactive loop.

pub mod animation;
pub mod app;
pub mod render;
mod state;
mod theme;

pub use app::{run_interactive, run_once, AppOptions, Input};
pub use state::{FormState, SubmitOutcome};
pub use theme::Theme;
