use async_trait::async_trait;

use crate::application::{AppResult, PlaybackController};
use crate::domain::PlaybackAction;

/// Prints the action instead of calling the playback service (`--dry-run`).
pub struct ConsoleController;

impl ConsoleController {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleController {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaybackController for ConsoleController {
    async fn perform(&self, action: PlaybackAction) -> AppResult<()> {
        println!("PLAYBACK: {action}");
        Ok(())
    }
}
