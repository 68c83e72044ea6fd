#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::Arc;

    use presskit_core::{
        Color, Easing, LayoutEvent, ManualClock, PointerEvent, Rect, Scene, SceneNode, Scope,
        Size, TextDirection, Vec2, with_text_direction,
    };
    use web_time::Duration;

    use crate::*;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Element laid out at screen (100, 100), 100×50.
    const SCREEN: Rect = Rect::new(100.0, 100.0, 100.0, 50.0);

    fn layout() -> LayoutEvent {
        LayoutEvent::new(Vec2::ZERO, SCREEN.size())
    }

    /// Pointer sample at a local point of the element above.
    fn local(kind: fn(Vec2, Vec2) -> PointerEvent, x: f32, y: f32) -> PointerEvent {
        kind(Vec2::new(x, y), Vec2::new(SCREEN.x + x, SCREEN.y + y))
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn(&PointerEvent) + 'static) {
        let n = Rc::new(Cell::new(0));
        let n2 = n.clone();
        (n, move |_: &PointerEvent| n2.set(n2.get() + 1))
    }

    fn mounted_button(config: PressConfig, clock: &Arc<ManualClock>) -> LongPressButton {
        let mut b = LongPressButton::new(config, clock.clone());
        b.bind(Rc::new(SCREEN));
        b.on_layout(&layout());
        b
    }

    fn manager(config: RippleConfig, clock: &Arc<ManualClock>) -> RippleManager {
        let mut m = RippleManager::new(config, clock.clone());
        m.set_container_size(Size::new(100.0, 50.0));
        m
    }

    // --- ripple geometry -------------------------------------------------

    #[test]
    fn test_radius_reaches_far_corner_from_touch() {
        let r = ripple_radius(Vec2::new(10.0, 10.0), Size::new(100.0, 50.0), 0.0);
        assert!((r - 9700f32.sqrt()).abs() < 1e-3);
        assert!((r - 98.49).abs() < 0.01);
    }

    #[test]
    fn test_radius_equals_distance_to_farthest_corner() {
        let size = Size::new(120.0, 80.0);
        let corners = [
            Vec2::new(0.0, 0.0),
            Vec2::new(size.width, 0.0),
            Vec2::new(0.0, size.height),
            Vec2::new(size.width, size.height),
        ];
        for origin in [
            Vec2::new(0.0, 0.0),
            Vec2::new(30.0, 70.0),
            Vec2::new(60.0, 40.0),
            Vec2::new(119.0, 1.0),
        ] {
            let far = corners
                .iter()
                .map(|c| origin.distance(*c))
                .fold(0.0f32, f32::max);
            let r = ripple_radius(origin, size, 0.0);
            assert!((r - far).abs() < 1e-3, "{origin:?}: {r} vs {far}");
        }
    }

    #[test]
    fn test_explicit_size_is_a_diameter() {
        let clock = Arc::new(ManualClock::new());
        let mut m = manager(RippleConfig::new().size(40.0), &clock);
        m.add_ripple(&PointerEvent::down(Vec2::new(3.0, 4.0), Vec2::ZERO));
        assert_eq!(m.ripples()[0].radius, 20.0);
    }

    #[test]
    fn test_centered_ignores_touch_point() {
        let clock = Arc::new(ManualClock::new());
        let mut m = manager(RippleConfig::new().centered(true), &clock);
        m.add_ripple(&PointerEvent::down(Vec2::new(3.0, 4.0), Vec2::ZERO));
        let r = &m.ripples()[0];
        assert_eq!(r.origin, Vec2::new(50.0, 25.0));
        assert!((r.radius - (50f32.powi(2) + 25f32.powi(2)).sqrt()).abs() < 1e-3);
    }

    // --- ripple lifecycle ------------------------------------------------

    #[test]
    fn test_ids_strictly_increase_and_survive_clear() {
        let clock = Arc::new(ManualClock::new());
        let mut m = manager(RippleConfig::default(), &clock);
        let ev = PointerEvent::down(Vec2::new(1.0, 1.0), Vec2::ZERO);

        let a = m.add_ripple(&ev);
        let b = m.add_ripple(&ev);
        assert!(b > a);
        m.clear();
        let c = m.add_ripple(&ev);
        assert!(c > b);
        assert_eq!(c, RippleId(2));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let clock = Arc::new(ManualClock::new());
        let mut m = manager(RippleConfig::default(), &clock);
        let ev = PointerEvent::down(Vec2::new(1.0, 1.0), Vec2::ZERO);
        let a = m.add_ripple(&ev);
        let b = m.add_ripple(&ev);

        assert!(m.remove_ripple(a));
        assert!(!m.remove_ripple(a));
        assert_eq!(m.ripples().len(), 1);
        assert_eq!(m.ripples()[0].id, b);

        m.clear();
        assert!(!m.remove_ripple(b));
    }

    #[test]
    fn test_count_is_added_minus_completed() {
        init_logs();
        let clock = Arc::new(ManualClock::new());
        let mut m = manager(RippleConfig::default(), &clock);
        let ev = PointerEvent::down(Vec2::new(1.0, 1.0), Vec2::ZERO);

        let early: Vec<RippleId> = (0..3).map(|_| m.add_ripple(&ev)).collect();
        clock.advance(ms(200));
        for _ in 0..2 {
            m.add_ripple(&ev);
        }
        assert!(m.tick().is_idle());
        assert_eq!(m.len(), 5);

        clock.advance(ms(250));
        let report = m.tick();
        assert_eq!(report.completed.as_slice(), early.as_slice());
        assert!(!report.reset_triggered);
        assert_eq!(m.len(), 2);

        clock.advance(ms(200));
        assert_eq!(m.tick().completed.len(), 2);
        assert!(m.is_empty());
    }

    #[test]
    fn test_eleven_rapid_taps_trip_the_reset() {
        let clock = Arc::new(ManualClock::new());
        let mut m = manager(RippleConfig::new().reset(10), &clock);
        let ev = PointerEvent::down(Vec2::new(1.0, 1.0), Vec2::ZERO);

        for tap in 1..=10 {
            m.add_ripple(&ev);
            clock.advance(ms(1));
            assert!(!m.tick().reset_triggered, "tap {tap}");
        }
        assert_eq!(m.len(), 10);

        m.add_ripple(&ev);
        let report = m.tick();
        assert!(report.reset_triggered);
        assert!(report.completed.is_empty());
        assert_eq!(m.len(), 0);

        // a late completion for a cleared ripple is a no-op
        assert!(!m.remove_ripple(RippleId(3)));
        assert_eq!(m.add_ripple(&ev), RippleId(11));
    }

    #[test]
    fn test_zero_duration_completes_on_next_tick() {
        let clock = Arc::new(ManualClock::new());
        let mut m = manager(RippleConfig::new().duration(Duration::ZERO), &clock);
        let id = m.add_ripple(&PointerEvent::down(Vec2::new(1.0, 1.0), Vec2::ZERO));
        assert_eq!(m.tick().completed.as_slice(), &[id]);
    }

    // --- ripple styling --------------------------------------------------

    #[test]
    fn test_style_interpolates_scale_and_opacity() {
        let clock = Arc::new(ManualClock::new());
        let config = RippleConfig {
            easing: Easing::Linear,
            ..RippleConfig::default()
        };
        let mut m = manager(config, &clock);
        m.add_ripple(&PointerEvent::down(Vec2::new(10.0, 10.0), Vec2::ZERO));
        let radius = m.ripples()[0].radius;

        let s0 = m.styles(TextDirection::Ltr)[0];
        assert!((s0.scale - 0.05).abs() < 1e-6);
        assert!((s0.opacity - 0.3).abs() < 1e-6);
        assert_eq!(s0.top, 0.0);
        assert_eq!(s0.offset, HorizontalOffset::Left(0.0));
        assert_eq!(s0.diameter, 20.0);
        assert_eq!(s0.color, Color::BLACK);

        clock.advance(ms(200));
        let s1 = m.styles(TextDirection::Ltr)[0];
        let expected_scale = 0.05 + (radius / 10.0 - 0.05) * 0.5;
        assert!((s1.scale - expected_scale).abs() < 1e-3);
        assert!((s1.opacity - 0.15).abs() < 1e-3);

        clock.advance(ms(200));
        let s2 = m.styles(TextDirection::Ltr)[0];
        assert!((s2.scale - radius / 10.0).abs() < 1e-3);
        assert!(s2.opacity.abs() < 1e-6);
    }

    #[test]
    fn test_disabled_fade_holds_opacity() {
        let clock = Arc::new(ManualClock::new());
        let mut m = manager(RippleConfig::new().disable_fade(true).opacity(0.5), &clock);
        m.add_ripple(&PointerEvent::down(Vec2::new(10.0, 10.0), Vec2::ZERO));
        clock.advance(ms(399));
        assert_eq!(m.styles(TextDirection::Ltr)[0].opacity, 0.5);
    }

    #[test]
    fn test_rtl_mirrors_horizontal_offset() {
        let clock = Arc::new(ManualClock::new());
        let mut m = manager(RippleConfig::default(), &clock);
        m.add_ripple(&PointerEvent::down(Vec2::new(30.0, 10.0), Vec2::ZERO));
        assert_eq!(
            m.styles(TextDirection::Rtl)[0].offset,
            HorizontalOffset::Right(20.0)
        );

        let mut ltr = Scene::new();
        let mut rtl = Scene::new();
        m.paint(&mut ltr, Vec2::ZERO, TextDirection::Ltr);
        m.paint(&mut rtl, Vec2::ZERO, TextDirection::Rtl);
        let circle_x = |s: &Scene| {
            s.nodes
                .iter()
                .find_map(|n| match n {
                    SceneNode::Rect { rect, .. } => Some(rect.x),
                    _ => None,
                })
                .unwrap()
        };
        assert_eq!(circle_x(&ltr), 20.0);
        // mirrored about the container's vertical center line: 100 - 30 - 10
        assert_eq!(circle_x(&rtl), 60.0);
    }

    #[test]
    fn test_paint_emits_clipped_circles() {
        let clock = Arc::new(ManualClock::new());
        let mut m = manager(RippleConfig::new().container_border_radius(8.0), &clock);

        let mut empty = Scene::new();
        m.paint(&mut empty, Vec2::ZERO, TextDirection::Ltr);
        assert!(empty.nodes.is_empty());

        m.add_ripple(&PointerEvent::down(Vec2::new(10.0, 10.0), Vec2::ZERO));
        m.add_ripple(&PointerEvent::down(Vec2::new(50.0, 20.0), Vec2::ZERO));
        let mut scene = Scene::new();
        m.paint(&mut scene, Vec2::new(5.0, 5.0), TextDirection::Ltr);

        assert!(scene.is_balanced());
        assert_eq!(
            scene.nodes[0],
            SceneNode::PushClip {
                rect: Rect::new(5.0, 5.0, 100.0, 50.0),
                radius: 8.0,
            }
        );
        let circles: Vec<_> = scene
            .nodes
            .iter()
            .filter_map(|n| match n {
                SceneNode::Rect {
                    rect,
                    color,
                    radius,
                } => Some((*rect, *color, *radius)),
                _ => None,
            })
            .collect();
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0].0, Rect::new(5.0, 5.0, 20.0, 20.0));
        assert_eq!(circles[0].1, Color(0, 0, 0, 77));
        assert_eq!(circles[0].2, 10.0);
    }

    // --- ripple surface --------------------------------------------------

    #[test]
    fn test_surface_defers_callback_of_spawning_phase() {
        let clock = Arc::new(ManualClock::new());
        let (press_in, on_press_in) = counter();
        let (press_out, on_press_out) = counter();
        let mut surface = RippleSurface::new(RippleConfig::default(), clock.clone()).callbacks(
            PressCallbacks::new()
                .on_press_in(on_press_in)
                .on_press_out(on_press_out),
        );
        surface.on_layout(&layout());

        let ev = local(PointerEvent::down, 10.0, 10.0);
        assert!(surface.press_in(&ev).is_some());
        assert_eq!(press_in.get(), 0);
        assert_eq!(surface.pending_callbacks(), 1);

        // press-out spawns nothing by default, so it calls straight through
        assert!(surface.press_out(&local(PointerEvent::up, 10.0, 10.0)).is_none());
        assert_eq!(press_out.get(), 1);

        surface.frame();
        assert_eq!(press_in.get(), 1);
        assert_eq!(surface.pending_callbacks(), 0);
        assert_eq!(surface.manager().len(), 1);
    }

    #[test]
    fn test_surface_triggers_select_phases() {
        let clock = Arc::new(ManualClock::new());
        let (pressed, on_press) = counter();
        let config =
            RippleConfig::new().triggers(RippleTriggers::PRESS | RippleTriggers::PRESS_OUT);
        let mut surface = RippleSurface::new(config, clock.clone())
            .callbacks(PressCallbacks::new().on_press(on_press));
        surface.on_layout(&layout());

        let down = local(PointerEvent::down, 10.0, 10.0);
        assert!(surface.press_in(&down).is_none());
        assert!(surface.press(&down).is_some());
        assert_eq!(pressed.get(), 0);
        assert!(surface.press_out(&local(PointerEvent::up, 10.0, 10.0)).is_some());
        assert_eq!(surface.manager().len(), 2);

        surface.frame();
        assert_eq!(pressed.get(), 1);
    }

    // --- measurement -----------------------------------------------------

    #[test]
    fn test_tracker_waits_for_bind_and_layout() {
        let mut t = MeasurementTracker::new(10.0);
        t.on_layout(&layout());
        assert_eq!(t.bounds(), presskit_core::BoundingBox::ZERO);

        t.bind(Rc::new(SCREEN));
        assert_eq!(t.bounds(), presskit_core::BoundingBox::ZERO);
        t.on_layout(&layout());
        let b = t.bounds();
        assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (90.0, 210.0, 90.0, 160.0));
    }

    #[test]
    fn test_tracker_keeps_box_when_measure_fails() {
        let screen = Rc::new(RefCell::new(Some(SCREEN)));
        let source = screen.clone();
        let mut t = MeasurementTracker::new(0.0);
        t.bind(Rc::new(move || *source.borrow()));
        t.on_layout(&layout());
        let before = t.bounds();
        assert_eq!(before.min_x, 100.0);

        *screen.borrow_mut() = None;
        t.on_layout(&LayoutEvent::new(Vec2::ZERO, Size::new(500.0, 500.0)));
        assert_eq!(t.bounds(), before);

        // the layout size wins over the measured size
        *screen.borrow_mut() = Some(Rect::new(0.0, 0.0, 1.0, 1.0));
        t.on_layout(&LayoutEvent::new(Vec2::ZERO, Size::new(30.0, 40.0)));
        assert_eq!(t.bounds().max_x, 30.0);
        assert_eq!(t.bounds().max_y, 40.0);

        t.unbind();
        assert!(!t.is_bound());
    }

    // --- move-away -------------------------------------------------------

    #[test]
    fn test_drag_out_cancels_exactly_once() {
        init_logs();
        let clock = Arc::new(ManualClock::new());
        let (moves, on_move) = counter();
        let (outs, on_press_out) = counter();
        let transitions = Rc::new(RefCell::new(Vec::new()));

        let press = PressHandle::default();
        {
            let transitions = transitions.clone();
            press.subscribe(move |s| transitions.borrow_mut().push(s.phase()));
        }
        let mut b = MoveAwayButton::new(PressConfig::default(), press.clone(), clock.clone())
            .callbacks(
                PressCallbacks::new()
                    .on_move(on_move)
                    .on_press_out(on_press_out),
            );
        b.bind(Rc::new(SCREEN));
        b.on_layout(&layout());

        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        assert_eq!(b.phase(), PressPhase::Pressed);

        // inside the buffer still counts
        b.pointer_move(&local(PointerEvent::moved, -9.0, 55.0));
        assert_eq!(b.phase(), PressPhase::Pressed);

        b.pointer_move(&local(PointerEvent::moved, -11.0, 10.0));
        assert_eq!(b.phase(), PressPhase::Idle);
        b.pointer_move(&local(PointerEvent::moved, -50.0, 10.0));
        b.pointer_move(&local(PointerEvent::moved, 10.0, 10.0));
        b.pointer_up(&local(PointerEvent::up, 10.0, 10.0));

        assert_eq!(moves.get(), 2);
        assert_eq!(outs.get(), 0);
        assert_eq!(
            *transitions.borrow(),
            vec![PressPhase::Pressed, PressPhase::Idle]
        );
    }

    #[test]
    fn test_release_fires_press_out_and_goes_idle() {
        let clock = Arc::new(ManualClock::new());
        let (outs, on_press_out) = counter();
        let mut b = MoveAwayButton::new(
            PressConfig::default(),
            PressHandle::default(),
            clock.clone(),
        )
        .callbacks(PressCallbacks::new().on_press_out(on_press_out));
        b.bind(Rc::new(SCREEN));
        b.on_layout(&layout());
        assert!(b.is_measured());

        b.pointer_up(&local(PointerEvent::up, 10.0, 10.0));
        assert_eq!(outs.get(), 0);

        b.handle(&local(PointerEvent::down, 10.0, 10.0));
        b.handle(&local(PointerEvent::up, 10.0, 10.0));
        assert_eq!(outs.get(), 1);
        assert_eq!(b.phase(), PressPhase::Idle);
    }

    #[test]
    fn test_press_in_callback_needs_prior_press() {
        let clock = Arc::new(ManualClock::new());
        let (ins, on_press_in) = counter();
        let mut b = MoveAwayButton::new(
            PressConfig::default(),
            PressHandle::default(),
            clock.clone(),
        )
        .callbacks(PressCallbacks::new().on_press_in(on_press_in));
        b.on_layout(&layout());

        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        b.frame();
        assert_eq!(ins.get(), 0);

        // second pointer while still pressed: deferred behind its ripple
        b.pointer_down(&local(PointerEvent::down, 20.0, 10.0));
        assert_eq!(ins.get(), 0);
        b.frame();
        assert_eq!(ins.get(), 1);
        assert_eq!(b.active_ripples(), 2);
    }

    #[test]
    fn test_unmeasured_button_never_cancels() {
        let clock = Arc::new(ManualClock::new());
        let unmeasurable: Rc<dyn Measurable> = Rc::new(|| None::<Rect>);
        let mut b = MoveAwayButton::new(
            PressConfig::default(),
            PressHandle::default(),
            clock.clone(),
        );
        b.bind(unmeasurable);
        b.on_layout(&layout());
        assert_eq!(b.bounds(), presskit_core::BoundingBox::ZERO);
        assert!(!b.is_measured());

        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        b.pointer_move(&local(PointerEvent::moved, 5000.0, -5000.0));
        assert_eq!(b.phase(), PressPhase::Pressed);
    }

    #[test]
    fn test_plain_surface_without_ripples() {
        let clock = Arc::new(ManualClock::new());
        let (ins, on_press_in) = counter();
        let mut b = MoveAwayButton::new(
            PressConfig::default().disable_ripple(true),
            PressHandle::new(PressState {
                pressed: true,
                long_pressed: false,
            }),
            clock.clone(),
        )
        .callbacks(PressCallbacks::new().on_press_in(on_press_in));
        b.on_layout(&layout());

        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        assert_eq!(ins.get(), 1);
        assert!(b.surface().is_none());
        assert_eq!(b.active_ripples(), 0);
        assert_eq!(b.frame(), TickReport::default());

        let mut scene = Scene::new();
        b.paint(&mut scene);
        assert!(scene.nodes.is_empty());
    }

    #[test]
    fn test_button_paints_in_ambient_direction() {
        let clock = Arc::new(ManualClock::new());
        let mut b = mounted_button(PressConfig::default(), &clock);
        b.pointer_down(&local(PointerEvent::down, 30.0, 10.0));
        let circle_x = |s: &Scene| {
            s.nodes.iter().find_map(|n| match n {
                SceneNode::Rect { rect, .. } => Some(rect.x),
                _ => None,
            })
        };

        let mut ltr = Scene::new();
        b.paint(&mut ltr);
        let mut rtl = Scene::new();
        with_text_direction(TextDirection::Rtl, || b.paint(&mut rtl));

        assert_eq!(circle_x(&ltr), Some(20.0));
        assert_eq!(circle_x(&rtl), Some(60.0));
    }

    #[test]
    fn test_cancel_event_drops_press_silently() {
        let clock = Arc::new(ManualClock::new());
        let (outs, on_press_out) = counter();
        let mut b = MoveAwayButton::new(
            PressConfig::default(),
            PressHandle::default(),
            clock.clone(),
        )
        .callbacks(PressCallbacks::new().on_press_out(on_press_out));

        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        let mut cancel = local(PointerEvent::up, 10.0, 10.0);
        cancel.event = presskit_core::PointerEventKind::Cancel;
        b.handle(&cancel);
        assert_eq!(b.phase(), PressPhase::Idle);
        assert_eq!(outs.get(), 0);
    }

    #[test]
    fn test_press_out_trigger_spawns_on_release() {
        let clock = Arc::new(ManualClock::new());
        let config = PressConfig::default()
            .ripple(RippleConfig::new().triggers(RippleTriggers::PRESS_OUT));
        let mut b = MoveAwayButton::new(config, PressHandle::default(), clock.clone());
        b.on_layout(&layout());

        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        assert_eq!(b.active_ripples(), 0);
        b.pointer_up(&local(PointerEvent::up, 10.0, 10.0));
        assert_eq!(b.active_ripples(), 1);
    }

    // --- long press ------------------------------------------------------

    #[test]
    fn test_short_press_never_long_presses() {
        let clock = Arc::new(ManualClock::new());
        let mut b = mounted_button(PressConfig::default(), &clock);

        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        clock.advance(ms(799));
        assert!(!b.frame().long_pressed);
        b.pointer_up(&local(PointerEvent::up, 10.0, 10.0));
        assert!(!b.long_press().is_armed());

        clock.advance(ms(1000));
        assert!(!b.frame().long_pressed);
        assert_eq!(b.phase(), PressPhase::Idle);
    }

    #[test]
    fn test_held_press_long_presses_once() {
        init_logs();
        let clock = Arc::new(ManualClock::new());
        let mut b = mounted_button(PressConfig::default(), &clock);
        let fired = Rc::new(Cell::new(0));
        {
            let fired = fired.clone();
            b.press().subscribe(move |s| {
                if s.long_pressed {
                    fired.set(fired.get() + 1);
                }
            });
        }

        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        clock.advance(ms(800));
        assert!(b.frame().long_pressed);
        assert_eq!(b.phase(), PressPhase::LongPressed);

        for _ in 0..5 {
            clock.advance(ms(800));
            assert!(!b.frame().long_pressed);
        }
        assert_eq!(fired.get(), 1);

        // terminal: a new press is ignored until reset
        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        assert_eq!(b.phase(), PressPhase::LongPressed);
        assert!(!b.long_press().is_armed());

        b.reset();
        assert_eq!(b.phase(), PressPhase::Idle);
        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        assert_eq!(b.phase(), PressPhase::Pressed);
        assert!(b.long_press().is_armed());
    }

    #[test]
    fn test_drag_out_disarms_timer() {
        let clock = Arc::new(ManualClock::new());
        let mut b = mounted_button(PressConfig::default(), &clock);

        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        clock.advance(ms(400));
        b.pointer_move(&local(PointerEvent::moved, 200.0, 10.0));
        assert_eq!(b.phase(), PressPhase::Idle);
        assert!(!b.long_press().is_armed());

        clock.advance(ms(1000));
        assert!(!b.frame().long_pressed);
    }

    #[test]
    fn test_stale_timer_does_not_fire_into_next_press() {
        let clock = Arc::new(ManualClock::new());
        let mut b = mounted_button(PressConfig::default(), &clock);

        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        clock.advance(ms(500));
        b.pointer_up(&local(PointerEvent::up, 10.0, 10.0));
        clock.advance(ms(100));
        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));

        clock.advance(ms(400));
        assert!(!b.frame().long_pressed);
        assert_eq!(b.phase(), PressPhase::Pressed);

        clock.advance(ms(400));
        assert!(b.frame().long_pressed);
    }

    #[test]
    fn test_custom_timeout_is_honored() {
        let clock = Arc::new(ManualClock::new());
        let mut b = mounted_button(PressConfig::new().long_press_timeout(ms(300)), &clock);
        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        clock.advance(ms(300));
        assert!(b.frame().long_pressed);
    }

    #[test]
    fn test_initially_pressed_state_is_armed() {
        let clock = Arc::new(ManualClock::new());
        let lp = LongPress::with_state(
            ms(100),
            clock.clone(),
            PressState {
                pressed: true,
                long_pressed: false,
            },
        );
        assert!(lp.is_armed());
        clock.advance(ms(100));
        assert!(lp.poll());
        assert!(!lp.poll());
        assert_eq!(lp.handle().phase(), PressPhase::LongPressed);
    }

    #[test]
    fn test_long_press_drop_unsubscribes() {
        let clock = Arc::new(ManualClock::new());
        let lp = LongPress::new(ms(100), clock.clone());
        let handle = lp.handle().clone();
        drop(lp);
        // nobody is listening any more; writes must still be fine
        handle.set_pressed(true);
        assert!(handle.is_pressed());
    }

    // --- teardown --------------------------------------------------------

    #[test]
    fn test_scope_dispose_disarms_pending_timer() {
        let clock = Arc::new(ManualClock::new());
        let scope = Scope::new();
        let mut b = mounted_button(PressConfig::default(), &clock);
        b.mount(&scope);

        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        assert!(b.long_press().is_armed());

        scope.dispose();
        assert!(!b.is_mounted());
        assert!(!b.long_press().is_armed());

        clock.advance(ms(1000));
        assert_eq!(b.frame(), FrameReport::default());
        b.pointer_up(&local(PointerEvent::up, 10.0, 10.0));
        assert_eq!(b.phase(), PressPhase::Pressed);
    }

    #[test]
    fn test_unmount_clears_ripples_and_timer() {
        let clock = Arc::new(ManualClock::new());
        let mut b = mounted_button(PressConfig::default(), &clock);
        b.pointer_down(&local(PointerEvent::down, 10.0, 10.0));
        assert_eq!(b.button().active_ripples(), 1);

        b.unmount();
        b.unmount();
        assert_eq!(b.button().active_ripples(), 0);
        assert!(!b.long_press().is_armed());

        let mut scene = Scene::new();
        b.paint(&mut scene);
        assert!(scene.nodes.is_empty());
    }

    // --- config ----------------------------------------------------------

    #[test]
    fn test_defaults() {
        let c = PressConfig::default();
        assert_eq!(c.long_press_timeout, ms(800));
        assert_eq!(c.move_cancel_buffer, 10.0);
        assert!(!c.disable_ripple);
        assert_eq!(c.ripple.color, Color::BLACK);
        assert_eq!(c.ripple.opacity, 0.3);
        assert_eq!(c.ripple.duration, ms(400));
        assert_eq!(c.ripple.reset, 10);
        assert_eq!(c.ripple.size, 0.0);
        assert!(!c.ripple.centered);
        assert!(!c.ripple.disable_fade);
        assert_eq!(c.ripple.triggers, RippleTriggers::PRESS_IN);
        assert_eq!(c.ripple.base_radius, 10.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_opacity = PressConfig::default().ripple(RippleConfig::new().opacity(1.5));
        assert!(matches!(
            bad_opacity.validate(),
            Err(presskit_core::Error::InvalidConfig {
                field: "opacity",
                ..
            })
        ));
        assert!(PressConfig::default().move_cancel_buffer(-1.0).validate().is_err());
        assert!(
            PressConfig::default()
                .move_cancel_buffer(f32::NAN)
                .validate()
                .is_err()
        );
        let zero_base = RippleConfig {
            base_radius: 0.0,
            ..RippleConfig::default()
        };
        assert!(zero_base.validate().is_err());
        assert!(RippleConfig::new().size(-2.0).validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let cfg: PressConfig = serde_json::from_str(
            r#"{
                "long_press_timeout": 650,
                "disable_ripple": true,
                "ripple": {
                    "color": "rgba(255, 0, 0, 0.5)",
                    "duration": 250,
                    "triggers": "PRESS | PRESS_OUT",
                    "centered": true
                }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.long_press_timeout, ms(650));
        assert!(cfg.disable_ripple);
        assert_eq!(cfg.ripple.color, Color(255, 0, 0, 128));
        assert_eq!(cfg.ripple.duration, ms(250));
        assert_eq!(
            cfg.ripple.triggers,
            RippleTriggers::PRESS | RippleTriggers::PRESS_OUT
        );
        assert!(cfg.ripple.centered);
        assert_eq!(cfg.ripple.reset, 10);

        let err = serde_json::from_str::<RippleConfig>(r#"{ "color": "chartreuse-ish" }"#);
        assert!(err.is_err());
    }
}
