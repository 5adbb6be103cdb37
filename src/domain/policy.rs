use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::GestureId;

/// Per-gesture cooldown tracker.
///
/// The caller supplies `now`, which keeps the gate deterministic under test.
/// `allow` and `mark_fired` are not atomic on their own: callers must hold a
/// single lock across the check-and-mark sequence, otherwise two concurrent
/// producers can both pass the check before either marks and double-fire.
/// `DispatchManager` is the only intended caller and enforces this.
pub struct DebounceGate {
    cooldown: Duration,
    last_fired: HashMap<GestureId, Instant>,
}

impl DebounceGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_fired: HashMap::new(),
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// A gesture with no prior firing is always allowed.
    pub fn allow(&self, gesture: &GestureId, now: Instant) -> bool {
        match self.last_fired.get(gesture) {
            None => true,
            Some(last) => now.duration_since(*last) >= self.cooldown,
        }
    }

    pub fn mark_fired(&mut self, gesture: &GestureId, now: Instant) {
        self.last_fired.insert(gesture.clone(), now);
    }
}
