//! Carousel Autoplay - automatic advancement control
//!
//! Platform-agnostic autoplay control for slide-based carousel widgets.
//!
//! This crate provides:
//! - Play/pause state machine with a sticky manual stop
//! - Hover and focus suspension with per-option gating
//! - Non-repeating shuffle visitation order
//! - Per-slide dwell-time overrides
//! - Toggle-control synchronization and progress forwarding
//! - Event queue for host synchronization
//!
//! # Architecture
//!
//! `carousel-autoplay` is completely platform-agnostic:
//! - No dependency on any DOM or GUI toolkit
//! - No internal scheduling; the host timer drives
//!   [`AutoplayController::tick`] and [`AutoplayController::frame`]
//! - Works wherever a widget can implement the [`Carousel`] and
//!   [`IntervalTimer`] traits
//!
//! Platform-specific concerns (the slide engine, the pausable timer, the
//! toggle and progress elements) are provided via traits.
//!
//! # Example: Configuration
//!
//! ```rust
//! use carousel_autoplay::{AutoplayConfig, AutoplayStart};
//! use std::time::Duration;
//!
//! let config = AutoplayConfig {
//!     start: AutoplayStart::Immediate,
//!     interval: Duration::from_secs(3),
//!     shuffle: true,
//!     ..AutoplayConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust
//! use carousel_autoplay::{
//!     AutoplayConfig, AutoplayController, AutoplayEvent, AutoplayStart, Carousel,
//!     IntervalTimer, MoveTarget,
//! };
//! use std::time::Duration;
//!
//! // Implement Carousel for your widget
//! struct MyCarousel {
//!     current: usize,
//! }
//!
//! impl Carousel for MyCarousel {
//!     fn slide_count(&self) -> usize {
//!         5
//!     }
//!
//!     fn has_enough_to_autoplay(&self) -> bool {
//!         true
//!     }
//!
//!     fn current_index(&self) -> usize {
//!         self.current
//!     }
//!
//!     fn go_to(&mut self, target: MoveTarget) {
//!         self.current = match target {
//!             MoveTarget::Index(index) => index,
//!             MoveTarget::Next => (self.current + 1) % self.slide_count(),
//!         };
//!     }
//! }
//!
//! // Implement IntervalTimer over your platform's frame scheduler
//! struct MyTimer {
//!     paused: bool,
//! }
//!
//! impl IntervalTimer for MyTimer {
//!     fn start(&mut self, _resume: bool) {
//!         self.paused = false;
//!     }
//!
//!     fn pause(&mut self) {
//!         self.paused = true;
//!     }
//!
//!     fn rewind(&mut self) {}
//!
//!     fn set_interval(&mut self, _interval: Duration) {}
//!
//!     fn cancel(&mut self) {
//!         self.paused = true;
//!     }
//!
//!     fn is_paused(&self) -> bool {
//!         self.paused
//!     }
//! }
//!
//! let config = AutoplayConfig {
//!     start: AutoplayStart::Immediate,
//!     ..AutoplayConfig::default()
//! };
//! let mut controller = AutoplayController::new(
//!     config,
//!     MyCarousel { current: 0 },
//!     MyTimer { paused: true },
//! )?;
//!
//! // The host lifecycle drives the controller
//! controller.mount();
//! assert!(!controller.is_paused());
//!
//! // Timer callbacks advance the carousel and report progress
//! controller.tick();
//! assert_eq!(controller.carousel().current_index(), 1);
//! controller.frame(0.5);
//!
//! for event in controller.drain_events() {
//!     match event {
//!         AutoplayEvent::Play => { /* update UI */ }
//!         AutoplayEvent::Pause => {}
//!         AutoplayEvent::Playing { rate } => assert!(rate <= 1.0),
//!     }
//! }
//! # Ok::<(), carousel_autoplay::AutoplayError>(())
//! ```

mod carousel;
mod controller;
mod error;
mod events;
mod sequence;
mod timer;
pub mod types;

// Public exports
pub use carousel::{Carousel, MoveTarget};
pub use controller::AutoplayController;
pub use error::{AutoplayError, Result};
pub use events::AutoplayEvent;
pub use sequence::ShuffleSequence;
pub use timer::IntervalTimer;
pub use types::{ActivityFlags, AutoplayConfig, AutoplayStart, ToggleLabels};
