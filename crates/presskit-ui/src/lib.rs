//! Pressable widget controllers.
//!
//! - [`RippleManager`] / [`RippleSurface`]: material-style ripples driven
//!   from one shared clock.
//! - [`MeasurementTracker`]: buffered screen box of a laid-out element.
//! - [`MoveAwayButton`]: press that cancels when the pointer leaves the box.
//! - [`LongPress`] / [`LongPressButton`]: press-and-hold on top of that.
//!
//! Controllers are driven by the host: forward layout and pointer events as
//! they arrive and call `frame()` once per rendered frame.

pub mod config;
pub mod long_press;
pub mod long_press_button;
pub mod measurement;
pub mod move_away;
pub mod press;
pub mod ripple;
pub mod surface;

mod tests;

pub use config::{PressConfig, RippleConfig, RippleTriggers};
pub use long_press::LongPress;
pub use long_press_button::{FrameReport, LongPressButton};
pub use measurement::{Measurable, MeasurementTracker};
pub use move_away::MoveAwayButton;
pub use press::{PressCallback, PressCallbacks, PressHandle, PressPhase, PressState};
pub use ripple::{
    HorizontalOffset, Ripple, RippleId, RippleManager, RippleStyle, TickReport, ripple_radius,
};
pub use surface::{ResponderPhase, RippleSurface};
