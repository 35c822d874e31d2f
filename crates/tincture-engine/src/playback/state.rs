use std::fmt;

/// Whether the render loop is producing frames.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PlaybackState {
    #[default]
    Playing,
    Stopped,
}

impl PlaybackState {
    #[inline]
    pub fn is_playing(self) -> bool {
        self == PlaybackState::Playing
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackState::Playing => f.write_str("playing"),
            PlaybackState::Stopped => f.write_str("stopped"),
        }
    }
}
