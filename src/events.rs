//! Autoplay events
//!
//! Event-based communication for host synchronization. Events are queued on
//! the controller and drained by the host:
//! - `Play` / `Pause` on playback transitions
//! - `Playing` on every progress frame

use serde::{Deserialize, Serialize};

/// Events emitted by the autoplay controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AutoplayEvent {
    /// The timer started or resumed
    Play,

    /// The timer was paused (manual stop or hover/focus suspension)
    Pause,

    /// Fractional progress through the current dwell interval
    Playing {
        /// Elapsed fraction in `[0, 1]`
        rate: f32,
    },
}
