//! Core types for autoplay control

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{AutoplayError, Result};

/// How autoplay behaves when the widget mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoplayStart {
    /// Autoplay is off; `mount()` is a no-op
    Disabled,

    /// Start advancing immediately on mount
    Immediate,

    /// Mount in the stopped state and wait for an explicit `play()`
    Paused,
}

/// Localized strings for the toggle control's accessible label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleLabels {
    /// Label shown while stopped (pressing starts playback)
    pub play: String,

    /// Label shown while running (pressing stops playback)
    pub pause: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self {
            play: "Start autoplay".to_string(),
            pause: "Pause autoplay".to_string(),
        }
    }
}

/// Configuration for the autoplay controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoplayConfig {
    /// Initial autoplay state (default: Disabled)
    pub start: AutoplayStart,

    /// Default dwell time per slide (default: 5s)
    pub interval: Duration,

    /// Suspend while the pointer is over the widget (default: true)
    pub pause_on_hover: bool,

    /// Suspend while focus is inside the widget (default: true)
    pub pause_on_focus: bool,

    /// Restart progress from zero when resuming (default: true)
    pub reset_progress: bool,

    /// Advance in randomized, non-repeating order (default: false)
    pub shuffle: bool,

    /// Accessible labels for the toggle control
    pub labels: ToggleLabels,
}

impl AutoplayConfig {
    /// Validate the configuration
    ///
    /// # Errors
    /// Returns [`AutoplayError::ZeroInterval`] if the dwell interval is zero.
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(AutoplayError::ZeroInterval);
        }
        Ok(())
    }
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            start: AutoplayStart::Disabled,
            interval: Duration::from_secs(5),
            pause_on_hover: true,
            pause_on_focus: true,
            reset_progress: true,
            shuffle: false,
            labels: ToggleLabels::default(),
        }
    }
}

/// Stop/hover/focus flag bundle
///
/// Replaced wholesale on every transition rather than mutated field by
/// field. `stopped` is the sticky manual pause and always wins over the
/// transient hover/focus flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFlags {
    /// Manual pause, sticky until an explicit play
    pub stopped: bool,

    /// Pointer is over the widget root
    pub hovered: bool,

    /// Focus is inside the widget root
    pub focused: bool,
}

impl ActivityFlags {
    /// Flag state immediately after a successful play
    pub fn cleared() -> Self {
        Self {
            stopped: false,
            hovered: false,
            focused: false,
        }
    }

    /// Transient suspension from hover or focus
    pub fn suspended(self) -> bool {
        self.hovered || self.focused
    }

    /// Effective run condition
    pub fn running(self) -> bool {
        !self.stopped && !self.suspended()
    }

    /// Copy with the stop flag replaced
    pub fn with_stopped(self, stopped: bool) -> Self {
        Self { stopped, ..self }
    }

    /// Copy with the hover flag replaced
    pub fn with_hovered(self, hovered: bool) -> Self {
        Self { hovered, ..self }
    }

    /// Copy with the focus flag replaced
    pub fn with_focused(self, focused: bool) -> Self {
        Self { focused, ..self }
    }
}

impl Default for ActivityFlags {
    /// The widget starts stopped; `play()` clears the flag
    fn default() -> Self {
        Self {
            stopped: true,
            hovered: false,
            focused: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AutoplayConfig::default();
        assert_eq!(config.start, AutoplayStart::Disabled);
        assert_eq!(config.interval, Duration::from_secs(5));
        assert!(config.pause_on_hover);
        assert!(config.pause_on_focus);
        assert!(config.reset_progress);
        assert!(!config.shuffle);
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let config = AutoplayConfig {
            interval: Duration::ZERO,
            ..AutoplayConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AutoplayError::ZeroInterval)
        ));
    }

    #[test]
    fn default_flags_are_stopped() {
        let flags = ActivityFlags::default();
        assert!(flags.stopped);
        assert!(!flags.suspended());
        assert!(!flags.running());
    }

    #[test]
    fn stopped_wins_over_hover_and_focus() {
        let flags = ActivityFlags::cleared()
            .with_stopped(true)
            .with_hovered(true)
            .with_focused(true);
        assert!(!flags.running());

        // Clearing hover and focus does not make a stopped widget run
        let flags = flags.with_hovered(false).with_focused(false);
        assert!(flags.stopped);
        assert!(!flags.running());
    }

    #[test]
    fn running_requires_all_flags_clear() {
        assert!(ActivityFlags::cleared().running());
        assert!(!ActivityFlags::cleared().with_hovered(true).running());
        assert!(!ActivityFlags::cleared().with_focused(true).running());
        assert!(!ActivityFlags::cleared().with_stopped(true).running());
    }
}
