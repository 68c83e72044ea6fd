use std::rc::Rc;
use std::sync::Arc;

use presskit_core::{
    BoundingBox, Clock, LayoutEvent, PointerEvent, PointerEventKind, Scene, text_direction,
};

use crate::config::PressConfig;
use crate::measurement::{Measurable, MeasurementTracker};
use crate::press::{PressCallback, PressCallbacks, PressHandle, PressPhase};
use crate::ripple::TickReport;
use crate::surface::{ResponderPhase, RippleSurface};

/// A press that is cancelled by dragging off the element.
///
/// The press flag lives in a `PressHandle` supplied by the caller, so a
/// wrapper such as `LongPressButton` can observe and drive the same state.
/// Move events are tested against the element's buffered screen box; leaving
/// it drops the press without an `on_press_out`.
pub struct MoveAwayButton {
    press: PressHandle,
    tracker: MeasurementTracker,
    /// `None` when ripples are disabled: a plain surface.
    surface: Option<RippleSurface>,
    callbacks: PressCallbacks,
}

impl MoveAwayButton {
    pub fn new(config: PressConfig, press: PressHandle, clock: Arc<dyn Clock>) -> Self {
        let surface =
            (!config.disable_ripple).then(|| RippleSurface::new(config.ripple.clone(), clock));
        Self {
            press,
            tracker: MeasurementTracker::new(config.move_cancel_buffer),
            surface,
            callbacks: PressCallbacks::default(),
        }
    }

    pub fn callbacks(mut self, callbacks: PressCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn set_callbacks(&mut self, callbacks: PressCallbacks) {
        self.callbacks = callbacks;
    }

    pub fn press(&self) -> &PressHandle {
        &self.press
    }

    pub fn phase(&self) -> PressPhase {
        self.press.phase()
    }

    pub fn bounds(&self) -> BoundingBox {
        self.tracker.bounds()
    }

    /// Whether `bounds` comes from a real measurement yet.
    pub fn is_measured(&self) -> bool {
        self.tracker.is_measured()
    }

    pub fn surface(&self) -> Option<&RippleSurface> {
        self.surface.as_ref()
    }

    pub fn active_ripples(&self) -> usize {
        self.surface.as_ref().map_or(0, |s| s.manager().len())
    }

    pub fn bind(&mut self, target: Rc<dyn Measurable>) {
        self.tracker.bind(target);
    }

    pub fn on_layout(&mut self, layout: &LayoutEvent) {
        self.tracker.on_layout(layout);
        if let Some(surface) = &mut self.surface {
            surface.on_layout(layout);
        }
    }

    /// Routes a raw pointer event to the matching handler.
    pub fn handle(&mut self, event: &PointerEvent) {
        match event.event {
            PointerEventKind::Down(_) => self.pointer_down(event),
            PointerEventKind::Move => self.pointer_move(event),
            PointerEventKind::Up(_) => self.pointer_up(event),
            PointerEventKind::Cancel => self.pointer_cancel(),
        }
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) {
        if self.press.is_long_pressed() {
            log::debug!("move-away: ignoring press while long-pressed");
            return;
        }
        // on_press_in only fires for a press that arrives while already pressed
        let was_pressed = self.press.is_pressed();
        let on_press_in = self.callbacks.on_press_in.clone().filter(|_| was_pressed);
        self.press.set_pressed(true);

        self.dispatch(ResponderPhase::PressIn, event, on_press_in);
        let on_press = self.callbacks.on_press.clone();
        self.dispatch(ResponderPhase::Press, event, on_press);
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) {
        if !self.press.is_pressed() {
            return;
        }
        let on_move = self.callbacks.on_move.clone();
        self.dispatch(ResponderPhase::Move, event, on_move);

        // without a measurement there is no box to leave
        if !self.tracker.is_measured() {
            return;
        }
        let bounds = self.tracker.bounds();
        if bounds.is_outside(event.page_position) {
            log::debug!(
                "move-away: ({:.1}, {:.1}) left {:?}; cancelling",
                event.page_position.x,
                event.page_position.y,
                bounds
            );
            self.press.set_pressed(false);
        }
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) {
        let was_pressed = self.press.is_pressed();
        let on_press_out = self.callbacks.on_press_out.clone().filter(|_| was_pressed);
        self.dispatch(ResponderPhase::PressOut, event, on_press_out);
        if was_pressed {
            self.press.set_pressed(false);
        }
    }

    /// The host took the pointer away. Drops the press without callbacks.
    pub fn pointer_cancel(&mut self) {
        if self.press.is_pressed() {
            log::debug!("move-away: responder cancelled");
            self.press.set_pressed(false);
        }
    }

    fn dispatch(
        &mut self,
        phase: ResponderPhase,
        event: &PointerEvent,
        callback: Option<PressCallback>,
    ) {
        match &mut self.surface {
            Some(surface) => {
                surface.handle(phase, event, callback);
            }
            None => {
                if let Some(cb) = callback {
                    cb(event);
                }
            }
        }
    }

    /// Advances ripples and runs deferred callbacks. A plain surface has
    /// nothing to do.
    pub fn frame(&mut self) -> TickReport {
        self.surface
            .as_mut()
            .map(RippleSurface::frame)
            .unwrap_or_default()
    }

    pub fn clear_ripples(&mut self) {
        if let Some(surface) = &mut self.surface {
            surface.clear();
        }
    }

    /// Paints the ripples in the current `text_direction()`.
    pub fn paint(&self, scene: &mut Scene) {
        if let Some(surface) = &self.surface {
            surface.paint(scene, text_direction());
        }
    }
}
