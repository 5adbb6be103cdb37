use std::collections::VecDeque;

use async_trait::async_trait;

use crate::application::{AppResult, GestureSensor};
use crate::domain::GestureId;

/// Deterministic sensor replaying a fixed gesture sequence, then reporting
/// exhaustion. Used by tests and by `--source scripted` smoke runs.
pub struct ScriptedSensor {
    queue: VecDeque<GestureId>,
}

impl ScriptedSensor {
    pub fn new<I>(gestures: I) -> Self
    where
        I: IntoIterator<Item = GestureId>,
    {
        Self {
            queue: gestures.into_iter().collect(),
        }
    }
}

#[async_trait]
impl GestureSensor for ScriptedSensor {
    async fn next_gesture(&mut self) -> AppResult<Option<GestureId>> {
        Ok(self.queue.pop_front())
    }
}
