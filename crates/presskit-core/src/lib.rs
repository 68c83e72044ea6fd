//! # Core types for pressable widgets
//!
//! Presskit controllers never talk to a window system directly. A host feeds
//! them discrete events and reads back a display list. This crate holds the
//! vocabulary both sides share:
//!
//! - geometry (`Vec2`, `Size`, `Rect`, `BoundingBox`, `Transform`),
//! - `Color`, with a strict `FromStr` for config files,
//! - input (`PointerEvent`, `LayoutEvent`),
//! - time (`Clock`, `ManualClock`, `Timeline`, `Easing`),
//! - shared state (`Signal<T>`) and teardown (`Scope`, `Dispose`),
//! - output (`Scene`, `SceneNode`).
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use presskit_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Deterministic time
//!
//! Anything that animates takes an `Arc<dyn Clock>`. Hosts pass
//! `system_clock()`; tests share a `ManualClock` and step it:
//!
//! ```rust
//! use std::sync::Arc;
//! use presskit_core::*;
//! use web_time::Duration;
//!
//! let clock = Arc::new(ManualClock::new());
//! let tl = Timeline::start(
//!     clock.now(),
//!     AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
//! );
//! clock.advance(Duration::from_millis(50));
//! assert!((tl.value(clock.now()) - 0.5).abs() < 1e-3);
//! ```
//!
//! ## Cleanup
//!
//! Components that hold timers register a disposer with the `Scope` they are
//! mounted in; disposing the scope disarms them.

pub mod animation;
pub mod color;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod input;
pub mod locals;
pub mod scene;
pub mod scope;
pub mod signal;

pub use animation::*;
pub use color::*;
pub use effects::*;
pub use error::{Error, Result};
pub use geometry::*;
pub use input::*;
pub use locals::*;
pub use scene::*;
pub use scope::*;
pub use signal::*;
