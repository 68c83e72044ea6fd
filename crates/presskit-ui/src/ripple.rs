//! Ripple bookkeeping.
//!
//! A `RippleManager` owns every ripple currently animating inside one
//! container. Ripples are not individually timed: each stores the instant it
//! started and the manager derives progress from one shared clock on `tick`.
//! Completed ripples are removed by id, so a completion that arrives after the
//! set has been cleared is harmless.

use std::sync::Arc;

use presskit_core::{
    AnimationSpec, Clock, Color, Interpolate, PointerEvent, Rect, Scene, SceneNode, Size,
    TextDirection, Timeline, Transform, Vec2,
};
use smallvec::SmallVec;
use web_time::Instant;

use crate::config::RippleConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RippleId(pub u64);

#[derive(Clone, Debug)]
pub struct Ripple {
    pub id: RippleId,
    /// Center, in the container's local coordinates.
    pub origin: Vec2,
    /// Fully expanded radius.
    pub radius: f32,
    pub timeline: Timeline,
}

impl Ripple {
    pub fn progress(&self, now: Instant) -> f32 {
        self.timeline.value(now)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.timeline.is_finished(now)
    }
}

/// Radius that covers the container from `origin`: `size / 2` when a size is
/// configured, otherwise the distance to the far corner measured from the
/// container's center outwards.
pub fn ripple_radius(origin: Vec2, container: Size, size: f32) -> f32 {
    if size > 0.0 {
        return 0.5 * size;
    }
    let half = container.center();
    let offset_x = (half.x - origin.x).abs();
    let offset_y = (half.y - origin.y).abs();
    ((half.x + offset_x).powi(2) + (half.y + offset_y).powi(2)).sqrt()
}

/// Horizontal placement of a ripple's box, relative to the edge the layout
/// direction starts from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HorizontalOffset {
    Left(f32),
    Right(f32),
}

/// Paint parameters for one ripple at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleStyle {
    pub id: RippleId,
    pub top: f32,
    pub offset: HorizontalOffset,
    /// Diameter of the unscaled circle.
    pub diameter: f32,
    pub scale: f32,
    pub opacity: f32,
    pub color: Color,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Ripples whose run finished during this tick, oldest first.
    pub completed: SmallVec<[RippleId; 4]>,
    /// The active set outgrew `reset` and was dropped.
    pub reset_triggered: bool,
}

impl TickReport {
    pub fn is_idle(&self) -> bool {
        self.completed.is_empty() && !self.reset_triggered
    }
}

pub struct RippleManager {
    config: RippleConfig,
    container: Size,
    ripples: SmallVec<[Ripple; 4]>,
    next_id: u64,
    clock: Arc<dyn Clock>,
}

impl RippleManager {
    pub fn new(config: RippleConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            container: Size::default(),
            ripples: SmallVec::new(),
            next_id: 0,
            clock,
        }
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    pub fn container_size(&self) -> Size {
        self.container
    }

    pub fn set_container_size(&mut self, size: Size) {
        self.container = size;
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Starts a ripple for `event` and returns its id.
    pub fn add_ripple(&mut self, event: &PointerEvent) -> RippleId {
        let origin = if self.config.centered {
            self.container.center()
        } else {
            event.position
        };
        let radius = ripple_radius(origin, self.container, self.config.size);

        let id = RippleId(self.next_id);
        self.next_id += 1;

        let spec = AnimationSpec::tween(self.config.duration, self.config.easing);
        self.ripples.push(Ripple {
            id,
            origin,
            radius,
            timeline: Timeline::start(self.clock.now(), spec),
        });
        log::debug!(
            "ripple {:?}: spawned at ({:.1}, {:.1}) r={:.2}, {} active",
            id,
            origin.x,
            origin.y,
            radius,
            self.ripples.len()
        );
        id
    }

    /// Removes the ripple with `id`. Returns false if it is already gone.
    pub fn remove_ripple(&mut self, id: RippleId) -> bool {
        match self.ripples.iter().position(|r| r.id == id) {
            Some(idx) => {
                self.ripples.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.ripples.clear();
    }

    /// One update tick: drop finished ripples, then enforce the `reset` cap.
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.now();
        let mut report = TickReport::default();

        let finished: SmallVec<[RippleId; 4]> = self
            .ripples
            .iter()
            .filter(|r| r.is_finished(now))
            .map(|r| r.id)
            .collect();
        for id in finished {
            if self.remove_ripple(id) {
                log::trace!("ripple {id:?}: finished");
                report.completed.push(id);
            }
        }

        if self.ripples.len() > self.config.reset {
            log::debug!(
                "ripple: {} active exceeds reset of {}; clearing",
                self.ripples.len(),
                self.config.reset
            );
            self.ripples.clear();
            report.reset_triggered = true;
        }

        report
    }

    pub fn style_of(&self, ripple: &Ripple, now: Instant, direction: TextDirection) -> RippleStyle {
        let cfg = &self.config;
        let base = cfg.base_radius;
        let p = ripple.progress(now);

        let scale = (0.5 / base).interpolate(&(ripple.radius / base), p);
        let opacity = if cfg.disable_fade {
            cfg.opacity
        } else {
            cfg.opacity.interpolate(&0.0, p)
        };
        let start = ripple.origin.x - base;
        let offset = match direction {
            TextDirection::Ltr => HorizontalOffset::Left(start),
            TextDirection::Rtl => HorizontalOffset::Right(start),
        };

        RippleStyle {
            id: ripple.id,
            top: ripple.origin.y - base,
            offset,
            diameter: 2.0 * base,
            scale,
            opacity,
            color: cfg.color,
        }
    }

    /// Styles for every active ripple, in stacking order (oldest first).
    pub fn styles(&self, direction: TextDirection) -> Vec<RippleStyle> {
        let now = self.clock.now();
        self.ripples
            .iter()
            .map(|r| self.style_of(r, now, direction))
            .collect()
    }

    /// Draws the active ripples clipped to the container placed at `origin`.
    pub fn paint(&self, scene: &mut Scene, origin: Vec2, direction: TextDirection) {
        if self.ripples.is_empty() {
            return;
        }
        let container = Rect::new(
            origin.x,
            origin.y,
            self.container.width,
            self.container.height,
        );
        scene.push(SceneNode::PushClip {
            rect: container,
            radius: self.config.container_border_radius,
        });
        for style in self.styles(direction) {
            let left = match style.offset {
                HorizontalOffset::Left(x) => x,
                HorizontalOffset::Right(x) => self.container.width - x - style.diameter,
            };
            let rect = Rect::new(
                origin.x + left,
                origin.y + style.top,
                style.diameter,
                style.diameter,
            );
            let center = Vec2::new(rect.x + 0.5 * rect.w, rect.y + 0.5 * rect.h);
            scene.push(SceneNode::PushTransform {
                transform: Transform::scale_about(style.scale, center),
            });
            scene.push(SceneNode::Rect {
                rect,
                color: style.color.with_opacity(style.opacity),
                radius: 0.5 * style.diameter,
            });
            scene.push(SceneNode::PopTransform);
        }
        scene.push(SceneNode::PopClip);
    }
}
