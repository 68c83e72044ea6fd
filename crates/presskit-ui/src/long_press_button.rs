use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use presskit_core::{
    BoundingBox, Clock, LayoutEvent, PointerEvent, Scene, Scope,
};

use crate::config::PressConfig;
use crate::long_press::LongPress;
use crate::measurement::Measurable;
use crate::move_away::MoveAwayButton;
use crate::press::{PressCallbacks, PressHandle, PressPhase};
use crate::ripple::TickReport;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// The long-press deadline fired this frame.
    pub long_pressed: bool,
    pub ripples: TickReport,
}

/// Press-and-hold button: a `MoveAwayButton` whose press state is owned by a
/// `LongPress` timer.
///
/// ```rust
/// use std::rc::Rc;
/// use std::sync::Arc;
/// use presskit_core::*;
/// use presskit_ui::*;
/// use web_time::Duration;
///
/// let clock = Arc::new(ManualClock::new());
/// let mut button = LongPressButton::new(PressConfig::default(), clock.clone());
/// button.bind(Rc::new(Rect::new(0.0, 0.0, 80.0, 40.0)));
/// button.on_layout(&LayoutEvent::new(Vec2::ZERO, Size::new(80.0, 40.0)));
///
/// button.pointer_down(&PointerEvent::down(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0)));
/// clock.advance(Duration::from_millis(800));
/// assert!(button.frame().long_pressed);
/// assert_eq!(button.phase(), PressPhase::LongPressed);
/// ```
pub struct LongPressButton {
    long_press: LongPress,
    button: MoveAwayButton,
    mounted: Rc<Cell<bool>>,
}

impl LongPressButton {
    pub fn new(config: PressConfig, clock: Arc<dyn Clock>) -> Self {
        let long_press = LongPress::new(config.long_press_timeout, clock.clone());
        let button = MoveAwayButton::new(config, long_press.handle().clone(), clock);
        Self {
            long_press,
            button,
            mounted: Rc::new(Cell::new(true)),
        }
    }

    pub fn callbacks(mut self, callbacks: PressCallbacks) -> Self {
        self.button.set_callbacks(callbacks);
        self
    }

    pub fn set_callbacks(&mut self, callbacks: PressCallbacks) {
        self.button.set_callbacks(callbacks);
    }

    /// Ties teardown to `scope`: disposing it disarms the timer and stops
    /// this button from reacting to further input.
    pub fn mount(&self, scope: &Scope) {
        let disarm = self.long_press.disarm_on_dispose();
        let mounted = self.mounted.clone();
        scope.add_disposer(move || {
            mounted.set(false);
            disarm.run();
        });
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn press(&self) -> &PressHandle {
        self.long_press.handle()
    }

    pub fn phase(&self) -> PressPhase {
        self.long_press.handle().phase()
    }

    pub fn long_press(&self) -> &LongPress {
        &self.long_press
    }

    pub fn button(&self) -> &MoveAwayButton {
        &self.button
    }

    pub fn bounds(&self) -> BoundingBox {
        self.button.bounds()
    }

    pub fn bind(&mut self, target: Rc<dyn Measurable>) {
        self.button.bind(target);
    }

    pub fn on_layout(&mut self, layout: &LayoutEvent) {
        if self.is_mounted() {
            self.button.on_layout(layout);
        }
    }

    pub fn handle(&mut self, event: &PointerEvent) {
        if self.is_mounted() {
            self.button.handle(event);
        }
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) {
        if self.is_mounted() {
            self.button.pointer_down(event);
        }
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) {
        if self.is_mounted() {
            self.button.pointer_move(event);
        }
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) {
        if self.is_mounted() {
            self.button.pointer_up(event);
        }
    }

    /// Clears a finished long press so the next press can start.
    pub fn reset(&self) {
        self.long_press.reset();
    }

    pub fn frame(&mut self) -> FrameReport {
        if !self.is_mounted() {
            return FrameReport::default();
        }
        FrameReport {
            long_pressed: self.long_press.poll(),
            ripples: self.button.frame(),
        }
    }

    pub fn paint(&self, scene: &mut Scene) {
        if self.is_mounted() {
            self.button.paint(scene);
        }
    }

    /// Disarms the timer and drops every ripple. Idempotent.
    pub fn unmount(&mut self) {
        if self.mounted.replace(false) {
            log::debug!("long press button: unmounted in {:?}", self.phase());
        }
        self.long_press.cancel();
        self.button.clear_ripples();
    }
}

impl Drop for LongPressButton {
    fn drop(&mut self) {
        self.unmount();
    }
}
