use std::sync::Arc;

use web_time::Instant;

use presskit_core::{BoundingBox, Clock, Color, Rect, Scene, SceneNode, system_clock};
use presskit_ui::{MoveAwayButton, PressPhase};


pub struct Hud {
    pub inspector_enabled: bool,
    /// Buffered hit box of the inspected button, drawn as an outline.
    pub highlight: Option<Rect>,
    frame_count: u64,
    last_frame: Option<Instant>,
    fps_smooth: f32,
    pub metrics: Option<Metrics>,
    clock: Arc<dyn Clock>,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self::with_clock(system_clock())
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inspector_enabled: false,
            highlight: None,
            frame_count: 0,
            last_frame: None,
            fps_smooth: 0.0,
            metrics: None,
            clock,
        }
    }

    pub fn toggle_inspector(&mut self) {
        self.inspector_enabled = !self.inspector_enabled;
        log::debug!("hud: inspector {}", self.inspector_enabled);
    }

    pub fn set_highlight(&mut self, r: Option<Rect>) {
        self.highlight = r;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn fps(&self) -> f32 {
        self.fps_smooth
    }

    /// Takes metrics and highlight from a button in one go.
    pub fn observe(&mut self, button: &MoveAwayButton) {
        let m = Metrics::of(button);
        self.highlight = button.is_measured().then(|| m.bounds.to_rect());
        self.metrics = Some(m);
    }

    pub fn status_line(&self) -> String {
        let mut lines = vec![
            format!("frame: {}", self.frame_count),
            format!("fps: {:.1}", self.fps_smooth),
        ];
        if let Some(m) = &self.metrics {
            lines.push(format!("phase: {:?}", m.phase));
            lines.push(format!("ripples: {}", m.active_ripples));
        }
        lines.join("  |  ")
    }

    pub fn overlay(&mut self, scene: &mut Scene) {
        self.frame_count += 1;
        let now = self.clock.now();
        if let Some(prev) = self.last_frame.replace(now) {
            let dt = now.saturating_duration_since(prev).as_secs_f32();
            if dt > 0.0 {
                let fps = 1.0 / dt;
                // EMA
                let a = 0.2;
                self.fps_smooth = if self.fps_smooth == 0.0 {
                    fps
                } else {
                    (1.0 - a) * self.fps_smooth + a * fps
                };
            }
        }

        scene.push(SceneNode::Text {
            rect: Rect::new(8.0, 8.0, 320.0, 16.0),
            text: self.status_line(),
            color: Color::from_hex("#AAAAAA"),
            size: 14.0,
        });

        if let Some(r) = self.highlight {
            scene.push(SceneNode::Border {
                rect: r,
                color: Color::from_hex("#44AAFF"),
                width: 2.0,
                radius: 0.0,
            });
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Metrics {
    pub phase: PressPhase,
    pub active_ripples: usize,
    pub bounds: BoundingBox,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            phase: PressPhase::Idle,
            active_ripples: 0,
            bounds: BoundingBox::ZERO,
        }
    }
}

impl Metrics {
    pub fn of(button: &MoveAwayButton) -> Self {
        Self {
            phase: button.phase(),
            active_ripples: button.active_ripples(),
            bounds: button.bounds(),
        }
    }
}

pub struct Inspector {
    pub hud: Hud,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self { hud: Hud::new() }
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            hud: Hud::with_clock(clock),
        }
    }

    /// Refreshes metrics from `button` and, when enabled, draws the overlay.
    pub fn frame(&mut self, button: &MoveAwayButton, scene: &mut Scene) {
        self.hud.observe(button);
        if self.hud.inspector_enabled {
            self.hud.overlay(scene);
        }
    }
}
