use std::collections::HashMap;

use super::{GestureId, PlaybackAction};

/// Static gesture-to-action table, built once at startup and read-only after.
#[derive(Clone, Debug, Default)]
pub struct ActionRegistry {
    bindings: HashMap<GestureId, PlaybackAction>,
}

impl ActionRegistry {
    pub fn from_bindings<I>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (GestureId, PlaybackAction)>,
    {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// The bindings the original deployment shipped with.
    pub fn with_default_bindings() -> Self {
        Self::from_bindings([
            (GestureId::from("play_pause"), PlaybackAction::PlayPause),
            (GestureId::from("fist"), PlaybackAction::PlayPause),
            (GestureId::from("swipe_right"), PlaybackAction::NextTrack),
            (GestureId::from("swipe_left"), PlaybackAction::PreviousTrack),
            (GestureId::from("thumbs_up"), PlaybackAction::VolumeUp),
            (GestureId::from("thumbs_down"), PlaybackAction::VolumeDown),
        ])
    }

    /// Pure lookup; unknown gestures yield `None`, never an error.
    pub fn lookup(&self, gesture: &GestureId) -> Option<PlaybackAction> {
        self.bindings.get(gesture).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_gesture_yields_none() {
        let registry = ActionRegistry::with_default_bindings();
        assert_eq!(registry.lookup(&GestureId::from("wiggle")), None);
    }

    #[test]
    fn default_bindings_cover_transport_controls() {
        let registry = ActionRegistry::with_default_bindings();
        assert_eq!(
            registry.lookup(&GestureId::from("swipe_right")),
            Some(PlaybackAction::NextTrack)
        );
        assert_eq!(
            registry.lookup(&GestureId::from("fist")),
            Some(PlaybackAction::PlayPause)
        );
    }
}
