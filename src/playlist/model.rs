use std::fmt;
use std::sync::Arc;

/// Opaque audio bytes attached to a track.
///
/// Immutable once stored; clones share the same buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Payload(Arc<[u8]>);

impl Payload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payload({} bytes)", self.0.len())
    }
}

/// One playlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub payload: Option<Payload>,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        payload: Option<Payload>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            payload,
        }
    }

    /// Return true if audio bytes were attached when the track was added.
    pub fn has_audio(&self) -> bool {
        self.payload.is_some()
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}

/// A row of the playlist listing, with a 1-indexed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub position: usize,
    pub title: String,
    pub artist: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} by {}", self.position, self.title, self.artist)
    }
}

/// What `delete_by_title` took out of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    /// Zero-based slot the track occupied.
    pub index: usize,
    pub track: Track,
    /// The cursor was on this track and had to be re-seated.
    pub was_current: bool,
}
