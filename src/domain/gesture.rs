use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque token identifying a recognized gesture class, e.g. "swipe_left".
/// Compared by exact value equality; the core never inspects its structure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GestureId(String);

impl GestureId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GestureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GestureId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Zero-argument playback operation a gesture can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackAction {
    PlayPause,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
}

impl PlaybackAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackAction::PlayPause => "play-pause",
            PlaybackAction::NextTrack => "next-track",
            PlaybackAction::PreviousTrack => "previous-track",
            PlaybackAction::VolumeUp => "volume-up",
            PlaybackAction::VolumeDown => "volume-down",
        }
    }
}

impl fmt::Display for PlaybackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
