//! # Layout direction
//!
//! The host sets the direction once around a paint pass instead of threading
//! it through every call. Buttons read it when painting; ripples mirror
//! their horizontal offset when it is right-to-left.
//!
//! ```rust
//! use presskit_core::*;
//!
//! with_text_direction(TextDirection::Rtl, || {
//!     assert_eq!(text_direction(), TextDirection::Rtl);
//! });
//! assert_eq!(text_direction(), TextDirection::Ltr);
//! ```

use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }
}

thread_local! {
    static TEXT_DIRECTION: Cell<TextDirection> = const { Cell::new(TextDirection::Ltr) };
}

/// Runs `f` with `dir` as the current direction, restoring the previous one
/// afterwards (also on unwind).
pub fn with_text_direction<R>(dir: TextDirection, f: impl FnOnce() -> R) -> R {
    struct Restore(TextDirection);
    impl Drop for Restore {
        fn drop(&mut self) {
            TEXT_DIRECTION.with(|d| d.set(self.0));
        }
    }
    let _restore = Restore(TEXT_DIRECTION.with(|d| d.replace(dir)));
    f()
}

pub fn text_direction() -> TextDirection {
    TEXT_DIRECTION.with(Cell::get)
}
