use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::application::PlaybackController;
use crate::domain::{ActionRegistry, DebounceGate, DispatchResult, GestureId};

/// Routes gesture identifiers from any producer to playback actions.
///
/// Sole owner of the cooldown table: both the HTTP handler and the
/// recognition loop share one instance by `Arc`. The check-and-mark
/// sequence runs under one lock, so two simultaneous triggers for the
/// same gesture can never both fire. The mark lands before the action
/// call starts, so a slow external round-trip cannot reopen the window
/// for a concurrent duplicate.
pub struct DispatchManager {
    registry: ActionRegistry,
    gate: Mutex<DebounceGate>,
    controller: Arc<dyn PlaybackController>,
}

impl DispatchManager {
    pub fn new(
        registry: ActionRegistry,
        cooldown: Duration,
        controller: Arc<dyn PlaybackController>,
    ) -> Self {
        Self {
            registry,
            gate: Mutex::new(DebounceGate::new(cooldown)),
            controller,
        }
    }

    pub async fn dispatch(&self, gesture: &GestureId) -> DispatchResult {
        self.dispatch_at(gesture, Instant::now()).await
    }

    /// Like `dispatch` but with an explicit clock reading, so cooldown
    /// behavior can be exercised without sleeping.
    pub async fn dispatch_at(&self, gesture: &GestureId, now: Instant) -> DispatchResult {
        let Some(action) = self.registry.lookup(gesture) else {
            tracing::warn!(%gesture, "no action bound to gesture");
            return DispatchResult::UnknownGesture;
        };

        {
            let mut gate = self.gate.lock().await;
            if !gate.allow(gesture, now) {
                tracing::debug!(%gesture, "suppressed inside cooldown window");
                return DispatchResult::Suppressed;
            }
            gate.mark_fired(gesture, now);
        }

        // A failed invocation still consumed the window: retrying inside the
        // cooldown would only hammer an already failing downstream API.
        match self.controller.perform(action).await {
            Ok(()) => tracing::info!(%gesture, %action, "action fired"),
            Err(e) => tracing::error!(%gesture, %action, error = %e, "action invocation failed"),
        }

        DispatchResult::Fired
    }
}
