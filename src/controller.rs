//! Autoplay controller - core orchestration
//!
//! Owns the activity flags, the shuffle sequence, and the timer handle.
//! Turns host notifications into play/pause transitions and timer ticks
//! into slide navigation.

use std::time::Duration;

use crate::{
    carousel::{Carousel, MoveTarget},
    error::{AutoplayError, Result},
    events::AutoplayEvent,
    sequence::ShuffleSequence,
    timer::IntervalTimer,
    types::{ActivityFlags, AutoplayConfig, AutoplayStart},
};

/// Autoplay state machine for a carousel widget
///
/// Generic over the host's carousel surface and timer capability so both
/// can be substituted with deterministic fakes in tests. All entry points
/// take `&mut self`; one call runs to completion before the next begins,
/// so no transition is ever observed half-applied.
pub struct AutoplayController<C: Carousel, T: IntervalTimer> {
    // State
    config: AutoplayConfig,
    flags: ActivityFlags,
    mounted: bool,

    // Shuffle
    sequence: ShuffleSequence,

    // Collaborators
    carousel: C,
    timer: T,

    // Event queue for host synchronization
    pending_events: Vec<AutoplayEvent>,
}

impl<C: Carousel, T: IntervalTimer> AutoplayController<C, T> {
    /// Create a new controller
    ///
    /// Validates the configuration and programs the timer with the default
    /// dwell interval. The controller stays inert until [`mount`](Self::mount).
    ///
    /// # Errors
    /// Returns [`AutoplayError::ZeroInterval`] if the configured interval
    /// is zero.
    pub fn new(config: AutoplayConfig, carousel: C, mut timer: T) -> Result<Self> {
        config.validate()?;
        timer.set_interval(config.interval);

        Ok(Self {
            flags: ActivityFlags::default(),
            mounted: false,
            sequence: ShuffleSequence::new(),
            carousel,
            timer,
            pending_events: Vec::new(),
            config,
        })
    }

    // ===== Lifecycle =====

    /// Attach the controller to the mounted widget
    ///
    /// No-op unless autoplay is enabled in configuration. Links the toggle
    /// control for accessibility, applies the configured shuffle mode,
    /// starts playback unless configured to start paused, and synchronizes
    /// the toggle UI.
    pub fn mount(&mut self) {
        if self.config.start == AutoplayStart::Disabled || self.mounted {
            return;
        }
        self.mounted = true;
        tracing::debug!("autoplay mounted");

        if self.carousel.has_toggle() {
            self.carousel.link_toggle();
        }
        if self.config.shuffle {
            self.sequence.enable(self.carousel.slide_count());
        }
        if self.config.start != AutoplayStart::Paused {
            self.play();
        }
        self.update();
    }

    /// Tear the controller down
    ///
    /// Cancels the timer so no further ticks or progress frames arrive and
    /// deactivates every notification entry point. Safe to call from within
    /// a host callback; idempotent.
    pub fn destroy(&mut self) {
        self.timer.cancel();
        self.mounted = false;
    }

    // ===== Playback Control =====

    /// Start or resume automatic advancement
    ///
    /// Silent no-op unless the timer is currently paused and the collection
    /// has enough slides. Callers observe the outcome through
    /// [`is_paused`](Self::is_paused) rather than an error.
    pub fn play(&mut self) {
        if !self.timer.is_paused() || !self.carousel.has_enough_to_autoplay() {
            return;
        }

        self.timer.start(!self.config.reset_progress);
        self.flags = ActivityFlags::cleared();
        self.update();
        self.pending_events.push(AutoplayEvent::Play);
        tracing::debug!("autoplay playing");
    }

    /// Pause automatic advancement
    ///
    /// `stop = true` is the sticky manual stop that hover/focus changes
    /// cannot undo; `stop = false` is the transient suspension used while
    /// hovered or focused. The stop flag and toggle UI are updated even
    /// when the timer is already paused; the `Pause` event fires only on
    /// the actual running-to-paused transition.
    pub fn pause(&mut self, stop: bool) {
        self.flags = self.flags.with_stopped(stop);
        self.update();

        if !self.timer.is_paused() {
            self.timer.pause();
            self.pending_events.push(AutoplayEvent::Pause);
            tracing::debug!("autoplay paused (stop: {stop})");
        }
    }

    /// Whether automatic advancement is currently paused
    pub fn is_paused(&self) -> bool {
        self.timer.is_paused()
    }

    /// Re-evaluate playback after a hover or focus transition
    ///
    /// Manual stop has precedence: while stopped, hover and focus changes
    /// never restart playback.
    fn auto_toggle(&mut self) {
        if self.flags.stopped {
            return;
        }
        if self.flags.suspended() {
            self.pause(false);
        } else {
            self.play();
        }
    }

    /// Sync the toggle control with the stop flag
    fn update(&mut self) {
        if !self.carousel.has_toggle() {
            return;
        }
        self.carousel.set_toggle_active(!self.flags.stopped);
        let label = if self.flags.stopped {
            &self.config.labels.play
        } else {
            &self.config.labels.pause
        };
        self.carousel.set_toggle_label(label);
    }

    // ===== Timer Callbacks =====

    /// Advance to the next slide; called by the host timer on interval elapse
    ///
    /// With shuffle enabled and more than two slides, the target is drawn
    /// from the shuffle sequence; otherwise sequential advance. A shuffle
    /// over two or fewer slides degenerates under the non-repeat
    /// constraint, so it is bypassed transparently.
    pub fn tick(&mut self) {
        let count = self.carousel.slide_count();
        let target = if self.sequence.is_enabled() && count > 2 {
            MoveTarget::Index(self.sequence.draw(self.carousel.current_index(), count))
        } else {
            MoveTarget::Next
        };
        self.carousel.go_to(target);
    }

    /// Forward frame progress; called by the host timer on every frame
    ///
    /// `rate` is the elapsed fraction of the current interval in `[0, 1]`.
    /// Pure forwarding; no state accumulates here.
    pub fn frame(&mut self, rate: f32) {
        if self.carousel.has_progress_bar() {
            self.carousel.set_progress(rate);
        }
        self.pending_events.push(AutoplayEvent::Playing { rate });
    }

    // ===== Host Notifications =====

    /// Pointer entered the widget root
    pub fn on_pointer_enter(&mut self) {
        self.set_hovered(true);
    }

    /// Pointer left the widget root
    pub fn on_pointer_leave(&mut self) {
        self.set_hovered(false);
    }

    /// Focus moved inside the widget root
    pub fn on_focus_in(&mut self) {
        self.set_focused(true);
    }

    /// Focus left the widget root
    pub fn on_focus_out(&mut self) {
        self.set_focused(false);
    }

    /// The play/pause toggle control was activated
    pub fn on_toggle_pressed(&mut self) {
        if !self.mounted {
            return;
        }
        if self.flags.stopped {
            self.play();
        } else {
            self.pause(true);
        }
    }

    /// The active slide changed (via autoplay or any other subsystem)
    ///
    /// Restarts the current interval and applies the new slide's dwell
    /// override when it carries a numeric one; malformed overrides fall
    /// back to the configured interval.
    pub fn on_move(&mut self, index: usize) {
        if !self.mounted {
            return;
        }
        self.timer.rewind();

        let interval = match self.carousel.slide_interval_attr(index) {
            Some(raw) => parse_interval_attr(&raw).unwrap_or_else(|err| {
                tracing::debug!("slide {index} interval override ignored: {err}");
                self.config.interval
            }),
            None => self.config.interval,
        };
        self.timer.set_interval(interval);
    }

    /// The carousel was scrolled by an external subsystem
    ///
    /// Restarts the current interval regardless of play state.
    pub fn on_scroll(&mut self) {
        if !self.mounted {
            return;
        }
        self.timer.rewind();
    }

    /// The widget was refreshed (slides re-collected, layout redone)
    ///
    /// Restarts the current interval regardless of play state.
    pub fn on_refresh(&mut self) {
        if !self.mounted {
            return;
        }
        self.timer.rewind();
    }

    fn set_hovered(&mut self, hovered: bool) {
        if !self.mounted || !self.config.pause_on_hover {
            return;
        }
        self.flags = self.flags.with_hovered(hovered);
        self.auto_toggle();
    }

    fn set_focused(&mut self, focused: bool) {
        if !self.mounted || !self.config.pause_on_focus {
            return;
        }
        self.flags = self.flags.with_focused(focused);
        self.auto_toggle();
    }

    // ===== Shuffle =====

    /// Turn randomized visitation order on or off
    ///
    /// Idempotent. Turning shuffle off discards the pending order; turning
    /// it back on reseeds from scratch.
    pub fn shuffle(&mut self, on: bool) {
        if on {
            self.sequence.enable(self.carousel.slide_count());
        } else {
            self.sequence.disable();
        }
    }

    /// Whether shuffle mode is active
    pub fn is_shuffled(&self) -> bool {
        self.sequence.is_enabled()
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event emitted since the last drain. Hosts call this
    /// from their frame loop to stay in sync.
    pub fn drain_events(&mut self) -> Vec<AutoplayEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Accessors =====

    /// Current stop/hover/focus flags
    pub fn flags(&self) -> ActivityFlags {
        self.flags
    }

    /// Controller configuration
    pub fn config(&self) -> &AutoplayConfig {
        &self.config
    }

    /// Borrow the carousel collaborator
    pub fn carousel(&self) -> &C {
        &self.carousel
    }

    /// Mutably borrow the carousel collaborator
    pub fn carousel_mut(&mut self) -> &mut C {
        &mut self.carousel
    }

    /// Borrow the timer collaborator
    pub fn timer(&self) -> &T {
        &self.timer
    }
}

/// Parse a per-slide dwell override attribute as milliseconds
///
/// Zero and non-numeric values are rejected; the caller falls back to the
/// configured interval.
fn parse_interval_attr(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|&ms| ms > 0)
        .map(Duration::from_millis)
        .ok_or_else(|| AutoplayError::InvalidSlideInterval(raw.to_string()))
}
