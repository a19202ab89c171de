//! Carousel collaborator surface
//!
//! The slide-movement engine, the slide collection, and the widget's toggle
//! and progress elements all live outside this crate. Hosts implement
//! [`Carousel`] to wire the controller into their widget. The UI methods
//! carry no-op defaults so headless hosts and test fakes only need the
//! slide-collection half.

/// Navigation target for a slide transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Jump to a specific slide index
    Index(usize),

    /// Advance to the sequential next slide
    Next,
}

/// Host carousel surface consumed by the controller
pub trait Carousel {
    /// Number of slides in the collection
    fn slide_count(&self) -> usize;

    /// Whether there are enough slides to justify autoplay
    ///
    /// Typically true when `slide_count()` exceeds the number of slides
    /// visible at once.
    fn has_enough_to_autoplay(&self) -> bool;

    /// Index of the currently shown slide
    fn current_index(&self) -> usize;

    /// Move the carousel to the given target
    fn go_to(&mut self, target: MoveTarget);

    /// Raw per-slide dwell override attribute, if the slide carries one
    ///
    /// The controller parses the value as milliseconds; malformed values
    /// fall back to the configured interval.
    fn slide_interval_attr(&self, index: usize) -> Option<String> {
        let _ = index;
        None
    }

    // ===== Toggle control =====

    /// Whether the widget has a play/pause toggle control
    fn has_toggle(&self) -> bool {
        false
    }

    /// Associate the toggle control with the slide track for accessibility
    fn link_toggle(&mut self) {}

    /// Reflect the running state on the toggle control
    fn set_toggle_active(&mut self, active: bool) {
        let _ = active;
    }

    /// Set the toggle control's accessible label
    fn set_toggle_label(&mut self, label: &str) {
        let _ = label;
    }

    // ===== Progress indicator =====

    /// Whether the widget has a progress bar element
    fn has_progress_bar(&self) -> bool {
        false
    }

    /// Set the progress bar fill to the elapsed fraction in `[0, 1]`
    fn set_progress(&mut self, rate: f32) {
        let _ = rate;
    }
}

/// Dummy carousel for testing
///
/// Tracks the active index and records navigation and UI calls
#[cfg(test)]
pub struct DummyCarousel {
    /// Number of slides
    pub slides: usize,

    /// Active slide index
    pub current: usize,

    /// Per-slide dwell override attributes
    pub interval_attrs: Vec<Option<String>>,

    /// Whether the widget carries a toggle control
    pub toggle: bool,

    /// Whether `link_toggle` was called
    pub toggle_linked: bool,

    /// Last value passed to `set_toggle_active`
    pub toggle_active: Option<bool>,

    /// Last value passed to `set_toggle_label`
    pub toggle_label: Option<String>,

    /// Last value passed to `set_progress`
    pub progress: Option<f32>,

    /// Every navigation target, in order
    pub moves: Vec<MoveTarget>,
}

#[cfg(test)]
impl DummyCarousel {
    /// Create a dummy carousel with the given slide count and a toggle
    pub fn new(slides: usize) -> Self {
        Self {
            slides,
            current: 0,
            interval_attrs: vec![None; slides],
            toggle: true,
            toggle_linked: false,
            toggle_active: None,
            toggle_label: None,
            progress: None,
            moves: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Carousel for DummyCarousel {
    fn slide_count(&self) -> usize {
        self.slides
    }

    fn has_enough_to_autoplay(&self) -> bool {
        self.slides > 1
    }

    fn current_index(&self) -> usize {
        self.current
    }

    fn go_to(&mut self, target: MoveTarget) {
        self.current = match target {
            MoveTarget::Index(index) => index,
            MoveTarget::Next => (self.current + 1) % self.slides.max(1),
        };
        self.moves.push(target);
    }

    fn slide_interval_attr(&self, index: usize) -> Option<String> {
        self.interval_attrs.get(index).cloned().flatten()
    }

    fn has_toggle(&self) -> bool {
        self.toggle
    }

    fn link_toggle(&mut self) {
        self.toggle_linked = true;
    }

    fn set_toggle_active(&mut self, active: bool) {
        self.toggle_active = Some(active);
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.toggle_label = Some(label.to_string());
    }

    fn has_progress_bar(&self) -> bool {
        true
    }

    fn set_progress(&mut self, rate: f32) {
        self.progress = Some(rate);
    }
}
