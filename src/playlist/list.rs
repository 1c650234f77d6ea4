use std::slice;

use tracing::debug;

use crate::notify::{LogSink, NotificationSink};
use crate::store::ContentStore;

use super::error::{PlaylistError, Result};
use super::model::{Entry, Payload, Removed, Track};

/// An append-ordered list of tracks with a cursor on the "current" one.
///
/// Tracks live in a growable vector in insertion order and the cursor is an
/// index into it. Invariants held after every operation:
///
/// - the list is empty iff the cursor is `None`;
/// - a set cursor is always `< len()`.
///
/// Every failure path reports a message to the sink `S` before returning.
#[derive(Debug)]
pub struct OrderedTrackList<S = LogSink> {
    tracks: Vec<Track>,
    cursor: Option<usize>,
    sink: S,
}

impl OrderedTrackList<LogSink> {
    /// Create an empty list that reports through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(LogSink)
    }
}

impl Default for OrderedTrackList<LogSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: NotificationSink> OrderedTrackList<S> {
    /// Create an empty list reporting outcomes to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            tracks: Vec::new(),
            cursor: None,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Add a track at the end and return its 1-indexed position.
    ///
    /// The first track appended to an empty list becomes current.
    pub fn append(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
        payload: Option<Payload>,
    ) -> usize {
        let track = Track::new(title, artist, payload);
        self.sink.success(&format!("Added: {track}"));
        debug!(title = %track.title, has_audio = track.has_audio(), "appended track");

        self.tracks.push(track);
        if self.cursor.is_none() {
            self.cursor = Some(0);
        }
        self.tracks.len()
    }

    /// Read the payload for `handle` from `store` (once) and append the track.
    ///
    /// A failed read is reported and leaves the list untouched.
    pub fn append_from<C>(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
        store: &C,
        handle: Option<&C::Handle>,
    ) -> Result<usize>
    where
        C: ContentStore + ?Sized,
    {
        let title = title.into();
        let payload = match handle.map(|h| store.read_all(h)).transpose() {
            Ok(bytes) => bytes.map(Payload::from),
            Err(e) => {
                self.sink
                    .error(&format!("Could not read audio for '{title}': {e}"));
                return Err(PlaylistError::Content(e));
            }
        };
        Ok(self.append(title, artist, payload))
    }

    /// Remove the first track whose title equals `title` and return it with
    /// the slot it occupied.
    ///
    /// If the removed track was current, the cursor moves to its successor,
    /// else to its predecessor, else (sole entry) it is cleared.
    pub fn delete_by_title(&mut self, title: &str) -> Result<Removed> {
        if self.tracks.is_empty() {
            self.sink
                .error(&format!("Cannot delete '{title}'. Playlist is empty."));
            return Err(PlaylistError::EmptyList);
        }

        let Some(index) = self.tracks.iter().position(|t| t.title == title) else {
            self.sink
                .error(&format!("Song '{title}' not found in the playlist."));
            return Err(PlaylistError::NotFound(title.to_string()));
        };

        let track = self.tracks.remove(index);
        let was_current = self.cursor == Some(index);
        self.cursor = match self.cursor {
            Some(c) if c == index => {
                if index < self.tracks.len() {
                    // The successor shifted into `index`.
                    Some(index)
                } else if index > 0 {
                    Some(index - 1)
                } else {
                    None
                }
            }
            // Same track, one slot earlier.
            Some(c) if c > index => Some(c - 1),
            other => other,
        };

        self.sink.success(&format!("Deleted: {title}"));
        debug!(title, position = index + 1, cursor = ?self.cursor, "deleted track");
        Ok(Removed {
            index,
            track,
            was_current,
        })
    }

    /// Move the cursor to the next track.
    ///
    /// `Ok(())` means the cursor moved; callers use it to decide auto-play.
    pub fn advance(&mut self) -> Result<()> {
        let Some(c) = self.cursor else {
            self.sink.warning("Playlist is empty.");
            return Err(PlaylistError::EmptyList);
        };
        if c + 1 >= self.tracks.len() {
            self.sink.warning("End of playlist. No next song.");
            return Err(PlaylistError::AtEnd);
        }

        self.cursor = Some(c + 1);
        debug!(cursor = c + 1, "advanced");
        Ok(())
    }

    /// Move the cursor to the previous track.
    ///
    /// `Ok(())` means the cursor moved; callers use it to decide auto-play.
    pub fn retreat(&mut self) -> Result<()> {
        let c = match self.cursor {
            Some(c) if !self.tracks.is_empty() => c,
            _ => {
                self.sink.warning("Playlist is empty or no song is selected.");
                return Err(PlaylistError::EmptyList);
            }
        };
        if c == 0 {
            self.sink.warning("Already at the beginning of the playlist.");
            return Err(PlaylistError::AtStart);
        }

        self.cursor = Some(c - 1);
        debug!(cursor = c - 1, "retreated");
        Ok(())
    }

    /// The track under the cursor, if any.
    pub fn current(&self) -> Option<&Track> {
        self.cursor.and_then(|c| self.tracks.get(c))
    }

    /// Zero-based index of the cursor.
    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Snapshot of the whole list in order, positions starting at 1.
    pub fn list_all(&self) -> Vec<Entry> {
        self.tracks
            .iter()
            .enumerate()
            .map(|(i, t)| Entry {
                position: i + 1,
                title: t.title.clone(),
                artist: t.artist.clone(),
            })
            .collect()
    }
}

impl<'a, S> IntoIterator for &'a OrderedTrackList<S> {
    type Item = &'a Track;
    type IntoIter = slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
