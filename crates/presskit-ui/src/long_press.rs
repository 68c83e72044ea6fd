use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use presskit_core::{Clock, Dispose, effect, on_unmount};
use web_time::{Duration, Instant};

use crate::press::{PressHandle, PressState};

/// Turns a press held for `timeout` into a long press.
///
/// Owns the `PressHandle` for the interaction and watches it: a
/// `pressed` false→true edge arms one deadline, any true→false edge disarms
/// it. The deadline fires from `poll()`, which the host calls every frame.
pub struct LongPress {
    press: PressHandle,
    timeout: Duration,
    clock: Arc<dyn Clock>,
    deadline: Rc<Cell<Option<Instant>>>,
    subscription: Dispose,
}

impl LongPress {
    pub fn new(timeout: Duration, clock: Arc<dyn Clock>) -> Self {
        Self::with_state(timeout, clock, PressState::default())
    }

    /// Starts from `initial`; an initially pressed state is armed right away.
    pub fn with_state(timeout: Duration, clock: Arc<dyn Clock>, initial: PressState) -> Self {
        let press = PressHandle::new(initial);
        let deadline = Rc::new(Cell::new(None::<Instant>));
        if initial.pressed {
            deadline.set(Some(clock.now() + timeout));
        }

        let subscription = {
            let press = press.clone();
            let deadline = deadline.clone();
            let clock = clock.clone();
            effect(move || {
                let was_pressed = Cell::new(initial.pressed);
                let sub = press.subscribe(move |s| {
                    if s.pressed == was_pressed.get() {
                        return;
                    }
                    was_pressed.set(s.pressed);
                    if s.pressed {
                        let at = clock.now() + timeout;
                        log::trace!("long press: armed for {timeout:?}");
                        deadline.set(Some(at));
                    } else if deadline.take().is_some() {
                        log::trace!("long press: disarmed");
                    }
                });
                on_unmount(move || press.unsubscribe(sub))
            })
        };

        Self {
            press,
            timeout,
            clock,
            deadline,
            subscription,
        }
    }

    pub fn handle(&self) -> &PressHandle {
        &self.press
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.get().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline.get()
    }

    /// Fires the deadline if it is due. Returns true exactly once per armed
    /// episode.
    pub fn poll(&self) -> bool {
        let Some(at) = self.deadline.get() else {
            return false;
        };
        if self.clock.now() < at {
            return false;
        }
        self.deadline.set(None);
        log::debug!("long press: held for {:?}", self.timeout);
        self.press.set(PressState {
            pressed: false,
            long_pressed: true,
        });
        true
    }

    /// Disarms a pending deadline without touching the press state.
    pub fn cancel(&self) {
        self.deadline.set(None);
    }

    /// Clears the press state, leaving `LongPressed` if it was there.
    pub fn reset(&self) {
        self.cancel();
        self.press.reset();
    }

    /// A disposer that disarms this timer; hand it to a `Scope` so teardown
    /// cannot leave a deadline behind.
    pub fn disarm_on_dispose(&self) -> Dispose {
        let deadline = self.deadline.clone();
        on_unmount(move || deadline.set(None))
    }
}

impl Drop for LongPress {
    fn drop(&mut self) {
        self.cancel();
        self.subscription.run();
    }
}
