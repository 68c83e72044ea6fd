use std::collections::VecDeque;
use std::sync::Arc;

use presskit_core::{Clock, LayoutEvent, PointerEvent, Scene, TextDirection, Vec2};

use crate::config::{RippleConfig, RippleTriggers};
use crate::press::{PressCallback, PressCallbacks};
use crate::ripple::{RippleId, RippleManager, TickReport};

/// Responder phases a ripple surface reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponderPhase {
    PressIn,
    Press,
    Move,
    PressOut,
}

impl ResponderPhase {
    pub fn trigger(self) -> RippleTriggers {
        match self {
            ResponderPhase::PressIn => RippleTriggers::PRESS_IN,
            ResponderPhase::Press => RippleTriggers::PRESS,
            ResponderPhase::PressOut => RippleTriggers::PRESS_OUT,
            ResponderPhase::Move => RippleTriggers::empty(),
        }
    }
}

/// A pressable container that paints ripples.
///
/// When a phase spawns a ripple, that phase's callback is queued and runs on
/// the next `frame()`, so the ripple gets its first frame before user code.
/// Phases that spawn nothing call back synchronously.
pub struct RippleSurface {
    manager: RippleManager,
    callbacks: PressCallbacks,
    origin: Vec2,
    deferred: VecDeque<(PressCallback, PointerEvent)>,
}

impl RippleSurface {
    pub fn new(config: RippleConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            manager: RippleManager::new(config, clock),
            callbacks: PressCallbacks::default(),
            origin: Vec2::ZERO,
            deferred: VecDeque::new(),
        }
    }

    pub fn callbacks(mut self, callbacks: PressCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn set_callbacks(&mut self, callbacks: PressCallbacks) {
        self.callbacks = callbacks;
    }

    pub fn manager(&self) -> &RippleManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut RippleManager {
        &mut self.manager
    }

    pub fn pending_callbacks(&self) -> usize {
        self.deferred.len()
    }

    pub fn on_layout(&mut self, layout: &LayoutEvent) {
        self.origin = layout.origin;
        self.manager.set_container_size(layout.size);
    }

    pub fn press_in(&mut self, event: &PointerEvent) -> Option<RippleId> {
        let cb = self.callbacks.on_press_in.clone();
        self.handle(ResponderPhase::PressIn, event, cb)
    }

    pub fn press(&mut self, event: &PointerEvent) -> Option<RippleId> {
        let cb = self.callbacks.on_press.clone();
        self.handle(ResponderPhase::Press, event, cb)
    }

    pub fn press_out(&mut self, event: &PointerEvent) -> Option<RippleId> {
        let cb = self.callbacks.on_press_out.clone();
        self.handle(ResponderPhase::PressOut, event, cb)
    }

    /// Runs `phase` with an explicit callback instead of the surface's own.
    /// Controllers that wrap a surface use this to route their guarded
    /// callbacks through the same deferral rule.
    pub fn handle(
        &mut self,
        phase: ResponderPhase,
        event: &PointerEvent,
        callback: Option<PressCallback>,
    ) -> Option<RippleId> {
        let spawns = self.manager.config().triggers.intersects(phase.trigger());
        if let Some(cb) = callback {
            if spawns {
                self.deferred.push_back((cb, event.clone()));
            } else {
                cb(event);
            }
        }
        spawns.then(|| self.manager.add_ripple(event))
    }

    /// One host frame: flush deferred callbacks in arrival order, then
    /// advance the ripples.
    pub fn frame(&mut self) -> TickReport {
        while let Some((cb, event)) = self.deferred.pop_front() {
            cb(&event);
        }
        self.manager.tick()
    }

    /// Drops ripples and pending callbacks.
    pub fn clear(&mut self) {
        self.deferred.clear();
        self.manager.clear();
    }

    pub fn paint(&self, scene: &mut Scene, direction: TextDirection) {
        self.manager.paint(scene, self.origin, direction);
    }
}
