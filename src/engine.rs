use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::bounce::{Bounce, BounceState, ClickOutcome};
use crate::config::{self, Config, OptionsInput, Resolved};
use crate::debounce::{Debouncer, Ticket};
use crate::geometry::{Point, Rect};
use crate::mount::ElementIds;
use crate::orientation::{Orientation, Phase};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique widget identity. Allocated in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Allocate the next id. Safe to call from any thread.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Actions returned from event handlers for the host to apply to the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    None,
    /// Write the angle (degrees) into the rotation custom property.
    SetRotation(f64),
    /// Add the bouncing class, starting the bounce animation.
    AddBounceClass,
    /// Remove the bouncing class.
    RemoveBounceClass,
}

/// Where an instance is in its one-way lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Constructed,
    Mounted,
    /// At least one frame has run.
    Running,
    Destroyed,
}

/// Core widget state: everything that doesn't touch the DOM.
///
/// Separated from `widget::Friend` so it can be tested without WASM/browser
/// dependencies. Every entry point is a no-op once the instance is destroyed.
#[derive(Debug)]
pub struct WidgetCore {
    id: InstanceId,
    config: Config,
    pointer: Point,
    orientation: Orientation,
    bounce: Bounce,
    resize: Debouncer,
    lifecycle: Lifecycle,
}

impl WidgetCore {
    /// Resolve `input` and create a fresh instance. Configuration warnings are
    /// logged against the new id.
    #[must_use]
    pub fn new(input: OptionsInput) -> Self {
        let id = InstanceId::next();
        let Resolved { config, warnings } = config::resolve(input);
        for warning in &warnings {
            log::warn!("Friend #{id}: {warning}");
        }
        Self::with_id(id, config)
    }

    /// Create an instance from an already resolved configuration.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self::with_id(InstanceId::next(), config)
    }

    fn with_id(id: InstanceId, config: Config) -> Self {
        Self {
            id,
            orientation: Orientation::new(config.smoothing, config.rotation_offset),
            config,
            pointer: Point::default(),
            bounce: Bounce::default(),
            resize: Debouncer::new(),
            lifecycle: Lifecycle::Constructed,
        }
    }

    // --- Lifecycle ---

    /// Record that the element and stylesheet have been attached.
    pub fn mark_mounted(&mut self) {
        if self.lifecycle == Lifecycle::Constructed {
            self.lifecycle = Lifecycle::Mounted;
            log::debug!("Friend #{}: mounted", self.id);
        }
    }

    /// Stop the instance for good. Returns `false` if it was already destroyed.
    pub fn destroy(&mut self) -> bool {
        if self.lifecycle == Lifecycle::Destroyed {
            return false;
        }
        self.lifecycle = Lifecycle::Destroyed;
        self.resize.cancel();
        log::debug!("Friend #{}: destroyed", self.id);
        true
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == Lifecycle::Destroyed
    }

    // --- Input events ---

    /// Latest pointer position wins.
    pub fn on_pointer_move(&mut self, pt: Point) {
        if self.is_destroyed() {
            return;
        }
        self.pointer = pt;
    }

    /// A click anywhere on the page. `rect` is the element's current box.
    pub fn on_click(&mut self, pt: Point, rect: Option<Rect>) -> Action {
        if self.is_destroyed() {
            return Action::None;
        }
        match self.bounce.click(pt, rect) {
            ClickOutcome::Started => Action::AddBounceClass,
            ClickOutcome::AlreadyBouncing | ClickOutcome::Missed => Action::None,
        }
    }

    /// The element's bounce animation completed.
    pub fn on_animation_end(&mut self) -> Action {
        if self.is_destroyed() {
            return Action::None;
        }
        self.bounce.finish();
        Action::RemoveBounceClass
    }

    /// The viewport was resized. The returned ticket should be handed back to
    /// [`WidgetCore::resize_due`] once the debounce window has elapsed.
    pub fn on_resize(&mut self) -> Option<Ticket> {
        if self.is_destroyed() {
            return None;
        }
        self.resize.trigger()
    }

    /// Whether `ticket` belongs to the last resize of its burst. When `true`
    /// the host should measure the element and call
    /// [`WidgetCore::recompute_center`].
    pub fn resize_due(&mut self, ticket: Ticket) -> bool {
        !self.is_destroyed() && self.resize.fire(ticket)
    }

    // --- Orientation ---

    /// Re-measure the rotation pivot. A missing element keeps the old center.
    pub fn recompute_center(&mut self, rect: Option<Rect>) {
        if self.is_destroyed() {
            return;
        }
        if let Some(rect) = rect {
            self.orientation.set_center(rect);
        }
    }

    /// Advance one frame and return the angle to publish.
    pub fn on_frame(&mut self) -> Action {
        match self.lifecycle {
            Lifecycle::Constructed | Lifecycle::Destroyed => Action::None,
            Lifecycle::Mounted | Lifecycle::Running => {
                self.lifecycle = Lifecycle::Running;
                Action::SetRotation(self.orientation.step(self.pointer))
            }
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.id
    }

    #[must_use]
    pub fn ids(&self) -> ElementIds {
        ElementIds::for_instance(self.id)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    #[must_use]
    pub fn center(&self) -> Option<Point> {
        self.orientation.center()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.orientation.phase()
    }

    /// Accumulated heading in degrees.
    #[must_use]
    pub fn current_angle(&self) -> f64 {
        self.orientation.current()
    }

    #[must_use]
    pub fn bounce_state(&self) -> BounceState {
        self.bounce.state()
    }

    #[must_use]
    pub fn is_bouncing(&self) -> bool {
        self.bounce.is_bouncing()
    }

    /// Whether a resize is waiting out its debounce window.
    #[must_use]
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }
}
