use std::io;

/// Failure outcomes of playlist operations.
///
/// None of these leave the list in an inconsistent state; callers decide how
/// to present them.
#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    #[error("playlist is empty")]
    EmptyList,

    #[error("song '{0}' not found in the playlist")]
    NotFound(String),

    #[error("end of playlist, no next song")]
    AtEnd,

    #[error("already at the beginning of the playlist")]
    AtStart,

    #[error("failed to read audio content: {0}")]
    Content(#[from] io::Error),
}

impl PlaylistError {
    /// True for `AtEnd` / `AtStart`: navigation hit an edge, nothing changed.
    pub fn is_boundary(&self) -> bool {
        matches!(self, Self::AtEnd | Self::AtStart)
    }
}

pub type Result<T> = std::result::Result<T, PlaylistError>;
