use crate::*;

use infinite_pager::{
    DismissGesture, DragEnd, DragEndOutcome, PageDirection, PageSlot, PageWindow, PagerOptions,
    PagerPhase, SettleCompletion, Vector,
};
use std::sync::{Arc, Mutex};

fn recorder() -> (
    Arc<Mutex<Vec<PageDirection>>>,
    impl Fn(PageDirection) + Send + Sync + 'static,
) {
    let pages = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&pages);
    (pages, move |d: PageDirection| sink.lock().unwrap().push(d))
}

fn controller(extent: f32) -> (Controller<u32>, Arc<Mutex<Vec<PageDirection>>>) {
    let (pages, on_page) = recorder();
    let c = Controller::new(PagerOptions::new(PageWindow::new(0, 1, 2), extent, on_page));
    (c, pages)
}

fn h(x: f32) -> Vector {
    Vector::new(x, 0.0)
}

/// Ticks every 16 ms until the animation stops, returning the sampled offsets.
fn run(c: &mut Controller<u32>, mut now_ms: u64) -> Vec<f32> {
    let mut out = Vec::new();
    while c.is_animating() {
        now_ms += 16;
        out.extend(c.tick(now_ms));
        assert!(out.len() < 1_000, "animation never finished");
    }
    out
}

#[test]
fn easing_curves_start_at_zero_and_end_at_one() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::Smooth,
    ] {
        assert!(easing.sample(0.0).abs() < 1e-6, "{easing:?}");
        assert!((easing.sample(1.0) - 1.0).abs() < 1e-6, "{easing:?}");

        let mut last = 0.0f32;
        for i in 1..=20 {
            let v = easing.sample(i as f32 / 20.0);
            assert!(v >= last, "{easing:?} is not monotonic");
            last = v;
        }
    }
    // The smooth curve front-loads its motion.
    assert!(Easing::Smooth.sample(0.3) > Easing::SmoothStep.sample(0.3));
}

#[test]
fn tween_samples_between_endpoints_and_lands_on_target() {
    let tween = Tween::new(-620.0, -600.0, 1_000, 100, Easing::Linear);
    assert_eq!(tween.sample(1_000), -620.0);
    assert_eq!(tween.sample(1_050), -610.0);
    assert_eq!(tween.sample(1_100), -600.0);
    assert_eq!(tween.sample(5_000), -600.0);
    assert!(!tween.is_done(1_099));
    assert!(tween.is_done(1_100));
    assert_eq!(tween.remaining_ms(1_030), 70);
    assert_eq!(tween.remaining_ms(2_000), 0);

    let instant = Tween::new(0.0, 10.0, 0, 0, Easing::Smooth);
    assert_eq!(instant.duration_ms, 1);
}

#[test]
fn retarget_continues_from_the_current_sample() {
    let mut tween = Tween::new(-620.0, -600.0, 1_000, 100, Easing::Linear);
    tween.retarget(1_050, -400.0, tween.remaining_ms(1_050));

    assert_eq!(tween.from, -610.0);
    assert_eq!(tween.to, -400.0);
    assert_eq!(tween.start_ms, 1_050);
    assert_eq!(tween.sample(1_075), -505.0);
    assert!(tween.is_done(1_100));
    assert_eq!(tween.sample(1_100), -400.0);
    assert_eq!(tween.easing, Easing::Linear);
}

#[test]
fn controller_settles_forward_and_fires_once_at_the_end() {
    let (mut c, pages) = controller(300.0);

    c.on_drag_changed(h(-320.0));
    let outcome = c.on_drag_ended(DragEnd::new(h(-320.0), h(-400.0)), 0);
    assert!(matches!(outcome, DragEndOutcome::Settle(_)));
    assert!(c.is_animating());

    let mut now_ms = 0u64;
    let mut samples = Vec::new();
    while c.is_animating() {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if c.is_animating() {
                assert!(pages.lock().unwrap().is_empty());
            }
            samples.push(off);
        }
    }

    assert!(samples.windows(2).all(|w| w[1] >= w[0]));
    assert_eq!(*samples.last().unwrap(), -600.0);
    assert_eq!(*pages.lock().unwrap(), [PageDirection::Forward]);
    assert_eq!(
        c.take_completion(),
        Some(SettleCompletion::Paged(PageDirection::Forward))
    );
    assert_eq!(c.take_completion(), None);
    assert_eq!(c.pager().phase(), PagerPhase::Idle);
    assert_eq!(c.tick(now_ms + 16), None);
}

#[test]
fn host_recentres_after_paging() {
    let (mut c, pages) = controller(300.0);
    c.on_drag_ended(DragEnd::new(h(-320.0), h(-400.0)), 0);
    run(&mut c, 0);

    let direction = pages.lock().unwrap()[0];
    let next = c
        .pager()
        .window()
        .clone()
        .shifted(direction, |edge, _| edge + 1);
    c.pager_mut().set_window(next);

    assert_eq!(c.pager().window().as_array(), &[1, 2, 3]);
    assert_eq!(c.pager().settled_offset(), -300.0);
    assert_eq!(c.pager().current_slot(), Some(PageSlot::Current));
}

#[test]
fn pointer_path_honours_minimum_distance() {
    let (pages, on_page) = recorder();
    let mut c = Controller::new(
        PagerOptions::new(PageWindow::new(0, 1, 2), 300.0, on_page).with_minimum_distance(10.0),
    );
    assert_eq!(c.recognizer().minimum_distance(), 10.0);

    c.pointer_down(Vector::new(200.0, 100.0), 0);
    c.pointer_move(Vector::new(195.0, 100.0), 16);
    assert!(!c.pager().is_dragging());
    assert_eq!(c.pager().drag_offset(), 0.0);

    // Released before the drag was recognised: no paging decision at all.
    assert_eq!(c.pointer_up(Vector::new(196.0, 101.0), 32), None);
    assert!(!c.is_animating());
    assert!(pages.lock().unwrap().is_empty());
}

#[test]
fn minimum_distance_follows_option_updates() {
    let (mut c, _) = controller(300.0);
    c.pager_mut().update_options(|o| o.minimum_distance = 50.0);

    c.pointer_down(Vector::new(200.0, 100.0), 0);
    assert_eq!(c.recognizer().minimum_distance(), 50.0);
    c.pointer_move(Vector::new(190.0, 100.0), 16);
    assert!(!c.pager().is_dragging());

    c.pointer_move(Vector::new(140.0, 100.0), 32);
    assert!(c.pager().is_dragging());
}

#[test]
fn pointer_fling_pages_forward() {
    let (mut c, pages) = controller(300.0);

    let mut now_ms = 0u64;
    c.pointer_down(Vector::new(280.0, 50.0), now_ms);
    let mut x = 280.0;
    for _ in 0..6 {
        now_ms += 16;
        x -= 40.0;
        c.pointer_move(Vector::new(x, 50.0), now_ms);
    }
    assert!(c.pager().is_dragging());
    assert_eq!(c.pager().drag_offset(), -240.0);

    now_ms += 16;
    let outcome = c.pointer_up(Vector::new(x - 40.0, 50.0), now_ms);
    let Some(DragEndOutcome::Settle(settle)) = outcome else {
        panic!("expected a settle, got {outcome:?}");
    };
    assert_eq!(settle.new_index, PageSlot::Next);
    assert_eq!(c.pager().drag_offset(), 0.0);

    run(&mut c, now_ms);
    assert_eq!(*pages.lock().unwrap(), [PageDirection::Forward]);
}

#[test]
fn pointer_pulled_back_snaps_back() {
    let (mut c, pages) = controller(300.0);

    c.pointer_down(Vector::new(280.0, 50.0), 0);
    c.pointer_move(Vector::new(60.0, 50.0), 200);
    c.pointer_move(Vector::new(60.0, 50.0), 400);
    c.pointer_move(Vector::new(80.0, 50.0), 450);
    let outcome = c.pointer_up(Vector::new(100.0, 50.0), 500);
    let Some(DragEndOutcome::Settle(settle)) = outcome else {
        panic!("expected a settle, got {outcome:?}");
    };
    assert_eq!(settle.new_index, PageSlot::Current);

    run(&mut c, 500);
    assert!(pages.lock().unwrap().is_empty());
    assert_eq!(c.take_completion(), Some(SettleCompletion::SnapBack));
    assert_eq!(c.pager().settled_offset(), -300.0);
}

#[test]
fn pointer_cancel_discards_the_drag() {
    let (mut c, _) = controller(300.0);
    c.pointer_down(Vector::ZERO, 0);
    c.pointer_move(h(-50.0), 16);
    assert_eq!(c.pager().drag_offset(), -50.0);

    c.pointer_cancel();
    assert_eq!(c.pager().drag_offset(), 0.0);
    assert!(!c.recognizer().is_tracking());
    assert!(!c.is_animating());
}

#[test]
fn reset_during_settle_converges_on_centre_and_reports_stale_completion() {
    let (mut c, pages) = controller(300.0);
    c.on_drag_ended(DragEnd::new(h(-320.0), h(-400.0)), 0);
    c.tick(32);

    c.pager_mut().set_page_extent(400.0);
    let samples = run(&mut c, 32);
    assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(samples.last(), Some(&-400.0));

    // The settle completion is not suppressed by the reset.
    assert_eq!(*pages.lock().unwrap(), [PageDirection::Forward]);
    assert_eq!(c.pager().settled_offset(), -400.0);
}

#[test]
fn reset_during_settle_keeps_the_original_end_time() {
    let (mut c, _) = controller(300.0);
    c.on_drag_ended(DragEnd::new(h(-320.0), h(-400.0)), 0);
    c.tick(40);
    c.pager_mut().reset();

    c.tick(60);
    assert!(c.is_animating());
    c.tick(100);
    assert!(!c.is_animating());
}

#[test]
fn dismissal_does_not_animate() {
    let dismissed = Arc::new(Mutex::new(0u32));
    let (pages, on_page) = recorder();
    let mut c = Controller::new(
        PagerOptions::new(PageWindow::new(0, 1, 2), 300.0, on_page)
            .with_dismiss_gesture(DismissGesture::CrossAxis)
            .with_on_dismiss(Some({
                let dismissed = Arc::clone(&dismissed);
                move || *dismissed.lock().unwrap() += 1
            })),
    );

    c.pointer_down(Vector::new(150.0, 100.0), 0);
    c.pointer_move(Vector::new(152.0, 300.0), 100);
    let outcome = c.pointer_up(Vector::new(153.0, 520.0), 200);
    assert_eq!(outcome, Some(DragEndOutcome::Dismissed));
    assert!(!c.is_animating());
    assert_eq!(*dismissed.lock().unwrap(), 1);
    assert!(pages.lock().unwrap().is_empty());
}

#[test]
fn new_drag_end_supersedes_running_animation() {
    let (mut c, pages) = controller(300.0);
    c.on_drag_ended(DragEnd::new(h(-320.0), h(-400.0)), 0);
    c.tick(16);

    c.on_drag_changed(h(20.0));
    c.on_drag_ended(DragEnd::new(h(20.0), h(20.0)), 20);
    assert_eq!(*pages.lock().unwrap(), [PageDirection::Forward]);

    // The window was never re-centred, so the small drag predicts the middle slot again.
    run(&mut c, 20);
    assert_eq!(c.pager().settled_offset(), -300.0);
    assert_eq!(c.take_completion(), Some(SettleCompletion::SnapBack));
    assert_eq!(*pages.lock().unwrap(), [PageDirection::Forward]);
}

#[test]
fn superseded_settle_completion_is_kept() {
    let (mut c, pages) = controller(300.0);
    c.on_drag_ended(DragEnd::new(h(-320.0), h(-400.0)), 0);
    c.tick(16);

    c.on_drag_changed(h(20.0));
    c.on_drag_ended(DragEnd::new(h(20.0), h(20.0)), 20);
    assert_eq!(*pages.lock().unwrap(), [PageDirection::Forward]);
    assert_eq!(
        c.take_completion(),
        Some(SettleCompletion::Paged(PageDirection::Forward))
    );
    assert!(c.is_animating());
}

#[test]
fn cancel_animation_finishes_immediately() {
    let (mut c, pages) = controller(300.0);
    c.on_drag_ended(DragEnd::new(h(200.0), h(400.0)), 0);

    assert_eq!(
        c.cancel_animation(),
        Some(SettleCompletion::Paged(PageDirection::Backward))
    );
    assert!(!c.is_animating());
    assert_eq!(c.pager().settled_offset(), 0.0);
    assert_eq!(*pages.lock().unwrap(), [PageDirection::Backward]);
    assert_eq!(c.cancel_animation(), None);
}

#[test]
fn recognizer_predicts_from_recent_velocity() {
    let mut r = DragRecognizer::new(0.0).with_deceleration_rate(0.9);
    r.press(Vector::ZERO, 0);
    assert!(r.is_tracking());
    assert_eq!(r.motion(h(-10.0), 10), Some(h(-10.0)));
    assert!(r.is_recognized());
    r.motion(h(-20.0), 20);

    assert_eq!(r.velocity(), h(-1.0));

    let end = r.release(h(-30.0), 30).unwrap();
    assert_eq!(end.translation, h(-30.0));
    // velocity -1/ms, horizon 0.9 / 0.1 = 9 ms.
    assert!((end.predicted_end_translation.x + 39.0).abs() < 1e-3);
    assert_eq!(end.predicted_end_translation.y, 0.0);
    assert!(!r.is_tracking());
}

#[test]
fn recognizer_ignores_stale_samples_for_velocity() {
    let mut r = DragRecognizer::new(0.0);
    r.press(Vector::ZERO, 0);
    r.motion(h(-200.0), 50);
    r.motion(h(-200.0), 400);
    r.motion(h(-200.0), 450);

    assert_eq!(r.velocity(), Vector::ZERO);
    let end = r.release(h(-200.0), 500).unwrap();
    assert_eq!(end.predicted_end_translation, h(-200.0));
}

#[test]
fn recognizer_without_press_reports_nothing() {
    let mut r = DragRecognizer::default();
    assert_eq!(r.motion(h(10.0), 0), None);
    assert_eq!(r.release(h(10.0), 0), None);
    assert!(!r.cancel());
    assert_eq!(r.velocity(), Vector::ZERO);
}
