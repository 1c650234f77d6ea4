//! Application model types: `App`, `InputMode` and the add form.
//!
//! `App` owns the playlist and everything the UI needs around it: the
//! current input mode, form buffers and the auto-play state.

use std::path::Path;

use tracing::debug;

use cuelist::{FileStore, MessageLog, NotificationSink, OrderedTrackList, Track};

/// Which prompt, if any, is receiving keystrokes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    AddTitle,
    AddArtist,
    AddFile,
    Delete,
}

impl InputMode {
    /// Prompt label shown next to the input line.
    pub fn label(self) -> Option<&'static str> {
        match self {
            InputMode::Normal => None,
            InputMode::AddTitle => Some("Title"),
            InputMode::AddArtist => Some("Artist"),
            InputMode::AddFile => Some("Audio file (mp3/wav, optional)"),
            InputMode::Delete => Some("Song title to delete"),
        }
    }
}

/// Buffers for the "add song" prompt.
#[derive(Clone, Debug, Default)]
pub struct AddForm {
    pub title: String,
    pub artist: String,
    pub file: String,
}

/// The main application model.
pub struct App {
    pub playlist: OrderedTrackList<MessageLog>,
    pub store: FileStore,
    pub mode: InputMode,
    pub form: AddForm,
    pub delete_title: String,
    pub autoplay_on_navigation: bool,
    /// Whether the current track was started by play or navigation.
    pub playing: bool,
}

impl App {
    /// Create a new `App` with an empty playlist.
    pub fn new(store: FileStore, status_history: usize, autoplay_on_navigation: bool) -> Self {
        Self {
            playlist: OrderedTrackList::with_sink(MessageLog::new(status_history)),
            store,
            mode: InputMode::Normal,
            form: AddForm::default(),
            delete_title: String::new(),
            autoplay_on_navigation,
            playing: false,
        }
    }

    /// The track under the cursor and whether it is playing.
    pub fn now_playing(&self) -> Option<(&Track, bool)> {
        self.playlist.current().map(|t| (t, self.playing))
    }

    pub fn begin_add(&mut self) {
        self.mode = InputMode::AddTitle;
    }

    pub fn begin_delete(&mut self) {
        self.mode = InputMode::Delete;
    }

    /// Leave the active prompt, keeping whatever was typed.
    pub fn cancel_input(&mut self) {
        self.mode = InputMode::Normal;
    }

    fn active_field(&mut self) -> Option<&mut String> {
        match self.mode {
            InputMode::Normal => None,
            InputMode::AddTitle => Some(&mut self.form.title),
            InputMode::AddArtist => Some(&mut self.form.artist),
            InputMode::AddFile => Some(&mut self.form.file),
            InputMode::Delete => Some(&mut self.delete_title),
        }
    }

    /// The text of the active prompt.
    pub fn input(&self) -> &str {
        match self.mode {
            InputMode::Normal => "",
            InputMode::AddTitle => &self.form.title,
            InputMode::AddArtist => &self.form.artist,
            InputMode::AddFile => &self.form.file,
            InputMode::Delete => &self.delete_title,
        }
    }

    /// Append a character to the active prompt.
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.active_field() {
            field.push(c);
        }
    }

    /// Remove the last character from the active prompt.
    pub fn pop_char(&mut self) {
        if let Some(field) = self.active_field() {
            field.pop();
        }
    }

    /// Confirm the active prompt: move to the next add field, or run the
    /// add/delete once its last field is confirmed.
    pub fn submit(&mut self) {
        match self.mode {
            InputMode::Normal => {}
            InputMode::AddTitle => self.mode = InputMode::AddArtist,
            InputMode::AddArtist => self.mode = InputMode::AddFile,
            InputMode::AddFile => {
                self.mode = InputMode::Normal;
                self.add_song();
            }
            InputMode::Delete => {
                self.mode = InputMode::Normal;
                self.delete_song();
            }
        }
    }

    /// Add the song described by the form. Clears the form on success.
    pub fn add_song(&mut self) -> bool {
        let title = self.form.title.trim().to_string();
        let artist = self.form.artist.trim().to_string();
        if title.is_empty() || artist.is_empty() {
            self.playlist
                .sink_mut()
                .warning("Title and artist are required to add a song.");
            return false;
        }

        let file = self.form.file.trim();
        let handle = (!file.is_empty()).then(|| Path::new(file));

        match self
            .playlist
            .append_from(title, artist, &self.store, handle)
        {
            Ok(position) => {
                debug!(position, "song added from form");
                self.form = AddForm::default();
                true
            }
            Err(_) => false,
        }
    }

    /// Delete the first song titled like the delete prompt.
    ///
    /// Playback stops if the cursor had to move off the deleted song.
    pub fn delete_song(&mut self) -> bool {
        let title = self.delete_title.trim().to_string();
        if title.is_empty() {
            self.playlist
                .sink_mut()
                .warning("Enter a song title to delete.");
            return false;
        }

        match self.playlist.delete_by_title(&title) {
            Ok(removed) => {
                self.delete_title.clear();
                if removed.was_current {
                    self.playing = false;
                }
                debug!(
                    index = removed.index,
                    was_current = removed.was_current,
                    "song deleted from form"
                );
                true
            }
            Err(_) => false,
        }
    }

    /// Move to the next song; auto-plays it when navigation happened.
    pub fn next(&mut self) {
        let moved = self.playlist.advance().is_ok();
        self.after_navigation(moved);
    }

    /// Move to the previous song; auto-plays it when navigation happened.
    pub fn prev(&mut self) {
        let moved = self.playlist.retreat().is_ok();
        self.after_navigation(moved);
    }

    fn after_navigation(&mut self, moved: bool) {
        if !moved {
            return;
        }
        self.playing = self.autoplay_on_navigation
            && self.playlist.current().is_some_and(Track::has_audio);
        debug!(playing = self.playing, "navigation occurred");
    }

    /// Start the current song, reporting what happened.
    pub fn play_current(&mut self) {
        let Some(track) = self.playlist.current() else {
            self.playlist
                .sink_mut()
                .warning("Playlist is empty or no song is selected to play.");
            self.playing = false;
            return;
        };

        let message = format!("Now playing: {track}");
        let has_audio = track.has_audio();
        let sink = self.playlist.sink_mut();
        sink.success(&message);
        if !has_audio {
            sink.warning("No audio data available for this song.");
        }
        self.playing = has_audio;
    }
}
