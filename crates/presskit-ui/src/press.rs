use std::rc::Rc;

use presskit_core::{PointerEvent, Signal, SubId};

/// Raw press flags as shared between a controller and whoever draws it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressState {
    pub pressed: bool,
    pub long_pressed: bool,
}

impl PressState {
    pub fn phase(&self) -> PressPhase {
        if self.long_pressed {
            PressPhase::LongPressed
        } else if self.pressed {
            PressPhase::Pressed
        } else {
            PressPhase::Idle
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PressPhase {
    Idle,
    Pressed,
    /// Terminal for the gesture; leaves only through `reset`.
    LongPressed,
}

/// Shared handle to one interaction's `PressState`.
///
/// Clones observe the same state. The controller that owns the interaction is
/// the only writer; visual layers and inspectors only read or subscribe.
#[derive(Clone)]
pub struct PressHandle(Signal<PressState>);

impl Default for PressHandle {
    fn default() -> Self {
        Self::new(PressState::default())
    }
}

impl PressHandle {
    pub fn new(initial: PressState) -> Self {
        Self(Signal::new(initial))
    }

    pub fn get(&self) -> PressState {
        self.0.get()
    }

    pub fn phase(&self) -> PressPhase {
        self.0.with(PressState::phase)
    }

    pub fn is_pressed(&self) -> bool {
        self.0.with(|s| s.pressed)
    }

    pub fn is_long_pressed(&self) -> bool {
        self.0.with(|s| s.long_pressed)
    }

    pub fn set(&self, state: PressState) {
        if self.get() != state {
            log::debug!("press: {:?} -> {:?}", self.phase(), state.phase());
            self.0.set(state);
        }
    }

    pub fn set_pressed(&self, pressed: bool) {
        let next = PressState {
            pressed,
            ..self.get()
        };
        self.set(next);
    }

    /// Back to `Idle`, clearing a finished long press.
    pub fn reset(&self) {
        self.set(PressState::default());
    }

    pub fn subscribe(&self, f: impl Fn(&PressState) + 'static) -> SubId {
        self.0.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.0.unsubscribe(id)
    }

    pub fn ptr_eq(&self, other: &PressHandle) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

/// Fire-and-forget input callback. Anything asynchronous it starts is the
/// callee's to drive; controllers never wait on it.
pub type PressCallback = Rc<dyn Fn(&PointerEvent)>;

#[derive(Clone, Default)]
pub struct PressCallbacks {
    pub on_press_in: Option<PressCallback>,
    pub on_press: Option<PressCallback>,
    pub on_move: Option<PressCallback>,
    pub on_press_out: Option<PressCallback>,
}

impl PressCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_press_in(mut self, f: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_press_in = Some(Rc::new(f));
        self
    }

    pub fn on_press(mut self, f: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_press = Some(Rc::new(f));
        self
    }

    pub fn on_move(mut self, f: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_move = Some(Rc::new(f));
        self
    }

    pub fn on_press_out(mut self, f: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_press_out = Some(Rc::new(f));
        self
    }
}
