//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the playlist, the active
//! prompt and the auto-play state.

mod model;

pub use model::*;
