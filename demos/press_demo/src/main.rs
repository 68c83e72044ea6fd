//! Scripted walk through a long-press button on a manual clock.
//!
//! `press_demo [config.json]` loads a `PressConfig` from JSON when given.
//! Run with `RUST_LOG=debug` to see the press and ripple transitions.

use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use presskit_core::{
    LayoutEvent, ManualClock, PointerEvent, Rect, Scene, Scope, TextDirection, Vec2,
    with_text_direction,
};
use presskit_devtools::Inspector;
use presskit_ui::{LongPressButton, PressCallbacks, PressConfig};

const BUTTON: Rect = Rect::new(40.0, 40.0, 160.0, 48.0);

fn load_config() -> anyhow::Result<PressConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(PressConfig::default());
    };
    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config: PressConfig =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;
    config.validate()?;
    Ok(config)
}

fn at(x: f32, y: f32) -> (Vec2, Vec2) {
    (Vec2::new(x, y), Vec2::new(BUTTON.x + x, BUTTON.y + y))
}

fn down(x: f32, y: f32) -> PointerEvent {
    let (local, page) = at(x, y);
    PointerEvent::down(local, page)
}

fn moved(x: f32, y: f32) -> PointerEvent {
    let (local, page) = at(x, y);
    PointerEvent::moved(local, page)
}

fn up(x: f32, y: f32) -> PointerEvent {
    let (local, page) = at(x, y);
    PointerEvent::up(local, page)
}

struct Demo {
    clock: Arc<ManualClock>,
    button: LongPressButton,
    inspector: Inspector,
    direction: TextDirection,
}

impl Demo {
    /// Advances the clock in 16ms frames and renders each one.
    fn run_for(&mut self, total: Duration) {
        let step = Duration::from_millis(16);
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            self.clock.advance(step);
            elapsed += step;
            self.render();
        }
    }

    fn render(&mut self) {
        let report = self.button.frame();
        if report.long_pressed {
            log::info!("long press fired");
        }
        if report.ripples.reset_triggered {
            log::info!("too many ripples; cleared");
        }
        let mut scene = Scene::new();
        with_text_direction(self.direction, || self.button.paint(&mut scene));
        self.inspector.frame(self.button.button(), &mut scene);
        log::trace!("scene: {} nodes", scene.nodes.len());
    }

    fn status(&self, label: &str) {
        log::info!("{label}: {}", self.inspector.hud.status_line());
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = load_config()?;
    let hold = config.long_press_timeout;

    let clock = Arc::new(ManualClock::new());
    let callbacks = PressCallbacks::default()
        .on_press(|e| log::info!("press at ({:.0}, {:.0})", e.position.x, e.position.y))
        .on_press_out(|_| log::info!("released"));
    let mut button = LongPressButton::new(config, clock.clone()).callbacks(callbacks);
    button.bind(Rc::new(BUTTON));
    button.on_layout(&LayoutEvent::new(Vec2::ZERO, BUTTON.size()));

    let scope = Scope::new();
    button.mount(&scope);

    let mut inspector = Inspector::with_clock(clock.clone());
    inspector.hud.toggle_inspector();
    let mut demo = Demo {
        clock,
        button,
        inspector,
        direction: TextDirection::Ltr,
    };

    // tap
    demo.button.pointer_down(&down(20.0, 20.0));
    demo.run_for(Duration::from_millis(100));
    demo.button.pointer_up(&up(20.0, 20.0));
    demo.run_for(Duration::from_millis(500));
    demo.status("after tap");

    // drag off the button
    demo.button.pointer_down(&down(20.0, 20.0));
    demo.button.pointer_move(&moved(20.0, 200.0));
    demo.run_for(hold);
    demo.status("after drag-out");

    // hold
    demo.button.pointer_down(&down(80.0, 24.0));
    demo.run_for(hold + Duration::from_millis(50));
    demo.status("after hold");
    demo.button.reset();

    // rapid taps
    for _ in 0..12 {
        demo.button.pointer_down(&down(10.0, 10.0));
        demo.button.pointer_up(&up(10.0, 10.0));
        demo.run_for(Duration::from_millis(16));
    }
    demo.status("after rapid taps");

    // same taps, mirrored
    demo.direction = TextDirection::Rtl;
    demo.button.pointer_down(&down(10.0, 10.0));
    demo.run_for(Duration::from_millis(100));
    demo.button.pointer_up(&up(10.0, 10.0));
    demo.status("after rtl tap");

    scope.dispose();
    log::info!("mounted after dispose: {}", demo.button.is_mounted());
    Ok(())
}
