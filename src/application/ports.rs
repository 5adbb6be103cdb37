use async_trait::async_trait;

use crate::domain::{GestureId, PlaybackAction};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("controller error: {0}")]
    Controller(String),
    #[error("sensor error: {0}")]
    Sensor(String),
    #[error("invalid config: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Perform a playback operation against the external service.
#[async_trait]
pub trait PlaybackController: Send + Sync {
    async fn perform(&self, action: PlaybackAction) -> AppResult<()>;
}

/// Hand the core the next recognized gesture identifier.
///
/// `Ok(None)` means the source is exhausted and the loop should stop.
/// An error means the sensor lost its device and cannot continue.
#[async_trait]
pub trait GestureSensor: Send {
    async fn next_gesture(&mut self) -> AppResult<Option<GestureId>>;
}
