use std::sync::mpsc;

use infinite_pager::{PageWindow, PagerOptions, Vector};
use infinite_pager_adapter::{Controller, Easing};

fn main() {
    // Example: a frame loop driving a carousel without holding any UI objects.
    //
    // An adapter would:
    // - forward pointer events to the controller
    // - call tick(now_ms) every frame while the controller is animating
    // - apply pager().visual_offset() to the page strip
    // - rebuild the page window after each reported page change
    let (tx, rx) = mpsc::channel();
    let mut c = Controller::new(
        PagerOptions::new(PageWindow::new('a', 'b', 'c'), 320.0, move |direction| {
            let _ = tx.send(direction);
        })
        .with_minimum_distance(10.0),
    );
    c.set_easing(Easing::Smooth);

    let mut now_ms = 0u64;
    for swipe in 0..3 {
        c.pointer_down(Vector::new(300.0, 200.0), now_ms);
        let mut x = 300.0;
        for _ in 0..8 {
            now_ms += 16;
            x -= 30.0;
            c.pointer_move(Vector::new(x, 200.0), now_ms);
        }
        now_ms += 16;
        let outcome = c.pointer_up(Vector::new(x - 30.0, 200.0), now_ms);
        println!("swipe {swipe}: {outcome:?}");

        while c.is_animating() {
            now_ms += 16;
            if let Some(off) = c.tick(now_ms) {
                println!("  t={now_ms} off={off:.1}");
            }
        }

        for direction in rx.try_iter() {
            let next = c
                .pager()
                .window()
                .clone()
                .shifted(direction, |edge, _| char::from(*edge as u8 + 1));
            c.pager_mut().set_window(next);
        }
        println!(
            "  window={:?} offset={:?}",
            c.pager().window(),
            c.pager().visual_offset()
        );
    }
}
