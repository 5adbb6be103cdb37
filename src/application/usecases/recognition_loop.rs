use std::sync::Arc;

use tokio::sync::watch;

use crate::application::usecases::DispatchManager;
use crate::application::{AppResult, GestureSensor};

/// Drives a gesture sensor until the shutdown flag flips.
///
/// Each recognized gesture goes through the shared `DispatchManager`.
/// A sensor failure ends this loop only; the HTTP producer keeps serving.
/// The sensor is dropped when the loop returns, which releases whatever
/// device or socket it holds.
pub struct RecognitionLoop {
    manager: Arc<DispatchManager>,
    shutdown: watch::Receiver<bool>,
}

impl RecognitionLoop {
    pub fn new(manager: Arc<DispatchManager>, shutdown: watch::Receiver<bool>) -> Self {
        Self { manager, shutdown }
    }

    pub async fn run(mut self, mut sensor: Box<dyn GestureSensor>) -> AppResult<()> {
        loop {
            tokio::select! {
                changed = self.shutdown.changed() => {
                    // a dropped sender also means shutdown
                    if changed.is_err() || *self.shutdown.borrow() {
                        break;
                    }
                }
                sensed = sensor.next_gesture() => {
                    match sensed {
                        Ok(Some(gesture)) => {
                            let result = self.manager.dispatch(&gesture).await;
                            tracing::debug!(%gesture, result = result.as_str(), "recognition loop dispatched");
                        }
                        Ok(None) => {
                            tracing::info!("gesture source exhausted");
                            break;
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "gesture sensor failed");
                            return Err(e);
                        }
                    }
                }
            }
        }

        tracing::info!("recognition loop stopped");
        Ok(())
    }
}
