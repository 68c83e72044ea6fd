use crate::{Size, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
}

/// A pointer sample as delivered by the host's responder system.
///
/// `position` is relative to the element that received the event;
/// `page_position` is the same point in screen coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
    pub page_position: Vec2,
    pub pressure: f32,
}

impl PointerEvent {
    fn touch(event: PointerEventKind, position: Vec2, page_position: Vec2) -> Self {
        Self {
            id: PointerId(0),
            kind: PointerKind::Touch,
            event,
            position,
            page_position,
            pressure: 1.0,
        }
    }

    pub fn down(position: Vec2, page_position: Vec2) -> Self {
        Self::touch(
            PointerEventKind::Down(PointerButton::Primary),
            position,
            page_position,
        )
    }

    pub fn moved(position: Vec2, page_position: Vec2) -> Self {
        Self::touch(PointerEventKind::Move, position, page_position)
    }

    pub fn up(position: Vec2, page_position: Vec2) -> Self {
        Self::touch(
            PointerEventKind::Up(PointerButton::Primary),
            position,
            page_position,
        )
    }
}

/// Layout completion for an element: its size in its parent's space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutEvent {
    pub origin: Vec2,
    pub size: Size,
}

impl LayoutEvent {
    pub fn new(origin: Vec2, size: Size) -> Self {
        Self { origin, size }
    }
}
