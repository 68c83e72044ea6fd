use std::rc::Rc;

use presskit_core::{BoundingBox, LayoutEvent, Rect, Vec2};

/// Something that can report where it sits on screen.
///
/// `None` means "not measurable right now" (not attached yet, or the host
/// cannot measure this kind of element). It is not an error.
pub trait Measurable {
    fn measure(&self) -> Option<Rect>;
}

impl Measurable for Rect {
    fn measure(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl<F> Measurable for F
where
    F: Fn() -> Option<Rect>,
{
    fn measure(&self) -> Option<Rect> {
        self()
    }
}

/// Keeps the buffered screen-space box of one bound element up to date.
pub struct MeasurementTracker {
    buffer: f32,
    target: Option<Rc<dyn Measurable>>,
    bounds: BoundingBox,
    measured: bool,
}

impl MeasurementTracker {
    pub fn new(buffer: f32) -> Self {
        Self {
            buffer,
            target: None,
            bounds: BoundingBox::ZERO,
            measured: false,
        }
    }

    pub fn bind(&mut self, target: Rc<dyn Measurable>) {
        self.target = Some(target);
    }

    pub fn unbind(&mut self) {
        self.target = None;
    }

    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    pub fn buffer(&self) -> f32 {
        self.buffer
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// False until one layout has produced a real measurement. Until then
    /// `bounds` is the zero box and should not be used to reject points.
    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Recompute from a fresh layout. The measured position supplies the
    /// screen origin; the layout supplies the size. An unbound or
    /// unmeasurable element leaves the previous box in place.
    pub fn on_layout(&mut self, layout: &LayoutEvent) {
        let Some(target) = &self.target else {
            log::trace!("measurement: layout before bind; keeping {:?}", self.bounds);
            return;
        };
        let Some(screen) = target.measure() else {
            log::debug!("measurement: element not measurable; keeping {:?}", self.bounds);
            return;
        };
        self.bounds = BoundingBox::expanded(
            Vec2::new(screen.x, screen.y),
            layout.size,
            self.buffer,
        );
        self.measured = true;
        log::trace!("measurement: bounds now {:?}", self.bounds);
    }
}
