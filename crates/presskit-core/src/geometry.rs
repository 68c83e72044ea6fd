#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2 {
            x: 0.5 * self.width,
            y: 0.5 * self.height,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.w,
            height: self.h,
        }
    }
}

/// Screen-space extent of an element, optionally grown by a buffer margin.
///
/// Edges are inclusive: a point lying exactly on `max_x` is still inside.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl BoundingBox {
    pub const ZERO: BoundingBox = BoundingBox {
        min_x: 0.0,
        max_x: 0.0,
        min_y: 0.0,
        max_y: 0.0,
    };

    /// Builds the box for an element at `origin` (screen coords) with `size`,
    /// expanded by `buffer` on every side.
    pub fn expanded(origin: Vec2, size: Size, buffer: f32) -> Self {
        Self {
            min_x: origin.x - buffer,
            max_x: origin.x + size.width + buffer,
            min_y: origin.y - buffer,
            max_y: origin.y + size.height + buffer,
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        !self.is_outside(p)
    }

    pub fn is_outside(&self, p: Vec2) -> bool {
        p.x < self.min_x || p.x > self.max_x || p.y < self.min_y || p.y > self.max_y
    }

    pub fn to_rect(&self) -> Rect {
        Rect {
            x: self.min_x,
            y: self.min_y,
            w: self.max_x - self.min_x,
            h: self.max_y - self.min_y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Transform {
    /// Scales about `pivot` instead of the origin.
    pub fn scale_about(s: f32, pivot: Vec2) -> Self {
        Self {
            translate_x: pivot.x * (1.0 - s),
            translate_y: pivot.y * (1.0 - s),
            scale_x: s,
            scale_y: s,
        }
    }

    pub fn apply_to_point(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: p.x * self.scale_x + self.translate_x,
            y: p.y * self.scale_y + self.translate_y,
        }
    }
}
