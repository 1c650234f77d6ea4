//! Playlist core: `OrderedTrackList` and the records it holds.
//!
//! Tracks are kept in insertion order. A cursor marks the current track and
//! is re-seated by navigation and deletion, never left pointing at a removed
//! entry.

mod error;
mod list;
mod model;

pub use error::{PlaylistError, Result};
pub use list::OrderedTrackList;
pub use model::{Entry, Payload, Removed, Track};
