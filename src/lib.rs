//! `cuelist`: an append-ordered playlist with a movable "current track" cursor.
//!
//! The core lives in [`playlist`]. It reports outcomes to a
//! [`notify::NotificationSink`] and pulls audio bytes from a
//! [`store::ContentStore`]; both are supplied by the caller. The terminal
//! front-end in the `cuelist` binary is one such caller.

pub mod config;
pub mod logging;
pub mod notify;
pub mod playlist;
pub mod store;

pub use notify::{LogSink, MessageLog, Notification, NotificationSink, Severity};
pub use playlist::{Entry, OrderedTrackList, Payload, PlaylistError, Removed, Result, Track};
pub use store::{ContentStore, FileStore};
