use serde::{Deserialize, Serialize};

/// Outcome of routing one gesture through the dispatch core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchResult {
    /// The bound action was invoked.
    Fired,
    /// Known gesture inside its cooldown window; no action invoked.
    Suppressed,
    /// No registry entry for this gesture; no action invoked.
    UnknownGesture,
}

impl DispatchResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchResult::Fired => "fired",
            DispatchResult::Suppressed => "suppressed",
            DispatchResult::UnknownGesture => "unknown_gesture",
        }
    }
}
