//! Configuration for pressables.
//!
//! Every knob has a documented default; nothing is read from module-level
//! constants. With the `serde` feature both structs load from JSON, durations
//! as integer milliseconds and colors as CSS-ish strings:
//!
//! ```rust
//! # #[cfg(feature = "serde")] {
//! use presskit_ui::PressConfig;
//!
//! let cfg: PressConfig = serde_json::from_str(
//!     r#"{ "long_press_timeout": 500, "ripple": { "color": "rgb(255, 0, 0)", "reset": 4 } }"#,
//! ).unwrap();
//! assert_eq!(cfg.long_press_timeout.as_millis(), 500);
//! assert_eq!(cfg.ripple.reset, 4);
//! assert_eq!(cfg.move_cancel_buffer, 10.0);
//! # }
//! ```

use bitflags::bitflags;
use presskit_core::{Color, Easing, Error, Result};
use web_time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Which responder phases spawn a ripple.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct RippleTriggers: u8 {
        /// Pointer-down granted.
        const PRESS_IN = 1 << 0;
        /// Responder start, after the grant.
        const PRESS = 1 << 1;
        /// Pointer released.
        const PRESS_OUT = 1 << 2;
    }
}

impl Default for RippleTriggers {
    fn default() -> Self {
        RippleTriggers::PRESS_IN
    }
}

/// Look and timing of the ripple effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RippleConfig {
    /// Fill color. Default: black.
    pub color: Color,
    /// Peak opacity, at progress 0. Default: 0.3.
    pub opacity: f32,
    /// Length of one ripple's run. Default: 400 ms.
    #[cfg_attr(feature = "serde", serde(with = "presskit_core::animation::duration_ms"))]
    pub duration: Duration,
    /// Active ripples allowed before the whole set is dropped. Default: 10.
    pub reset: usize,
    /// Explicit diameter; `0` sizes the ripple to reach the far corner.
    pub size: f32,
    /// Spawn at the container center instead of the touch point.
    pub centered: bool,
    /// Keep opacity constant instead of fading to 0.
    pub disable_fade: bool,
    pub triggers: RippleTriggers,
    /// Corner radius of the clip the ripples are drawn in.
    pub container_border_radius: f32,
    /// Radius of the unscaled ripple circle. Default: 10.
    pub base_radius: f32,
    /// Default: `cubic-bezier(0, 0, 0.58, 1)`.
    pub easing: Easing,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            opacity: 0.3,
            duration: Duration::from_millis(400),
            reset: 10,
            size: 0.0,
            centered: false,
            disable_fade: false,
            triggers: RippleTriggers::default(),
            container_border_radius: 0.0,
            base_radius: 10.0,
            easing: Easing::EASE_OUT_BEZIER,
        }
    }
}

impl RippleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn reset(mut self, reset: usize) -> Self {
        self.reset = reset;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn disable_fade(mut self, disable: bool) -> Self {
        self.disable_fade = disable;
        self
    }

    pub fn triggers(mut self, triggers: RippleTriggers) -> Self {
        self.triggers = triggers;
        self
    }

    pub fn container_border_radius(mut self, radius: f32) -> Self {
        self.container_border_radius = radius;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(Error::config("opacity", format!("{} is outside 0..=1", self.opacity)));
        }
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(Error::config("size", format!("{} must be >= 0", self.size)));
        }
        if !self.base_radius.is_finite() || self.base_radius <= 0.0 {
            return Err(Error::config(
                "base_radius",
                format!("{} must be > 0", self.base_radius),
            ));
        }
        if !self.container_border_radius.is_finite() || self.container_border_radius < 0.0 {
            return Err(Error::config(
                "container_border_radius",
                format!("{} must be >= 0", self.container_border_radius),
            ));
        }
        Ok(())
    }
}

/// Behavior of the move-away and long-press buttons.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PressConfig {
    /// Hold time before a press becomes a long press. Default: 800 ms.
    #[cfg_attr(feature = "serde", serde(with = "presskit_core::animation::duration_ms"))]
    pub long_press_timeout: Duration,
    /// Margin around the element that still counts as "inside". Default: 10.
    pub move_cancel_buffer: f32,
    /// Plain surface, no ripple visuals.
    pub disable_ripple: bool,
    pub ripple: RippleConfig,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            long_press_timeout: Duration::from_millis(800),
            move_cancel_buffer: 10.0,
            disable_ripple: false,
            ripple: RippleConfig::default(),
        }
    }
}

impl PressConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn long_press_timeout(mut self, timeout: Duration) -> Self {
        self.long_press_timeout = timeout;
        self
    }

    pub fn move_cancel_buffer(mut self, buffer: f32) -> Self {
        self.move_cancel_buffer = buffer;
        self
    }

    pub fn disable_ripple(mut self, disable: bool) -> Self {
        self.disable_ripple = disable;
        self
    }

    pub fn ripple(mut self, ripple: RippleConfig) -> Self {
        self.ripple = ripple;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.move_cancel_buffer.is_finite() || self.move_cancel_buffer < 0.0 {
            return Err(Error::config(
                "move_cancel_buffer",
                format!("{} must be a finite value >= 0", self.move_cancel_buffer),
            ));
        }
        self.ripple.validate()
    }
}
