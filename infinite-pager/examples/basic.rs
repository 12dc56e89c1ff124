use std::sync::{Arc, Mutex};

use infinite_pager::{
    DragEnd, DragEndOutcome, PageDirection, PageWindow, Pager, PagerOptions, Vector,
};

fn main() {
    // Example: an infinite day-by-day pager. The host owns the page numbers and re-centres the
    // window whenever the pager reports a page change.
    let turned = Arc::new(Mutex::new(Vec::<PageDirection>::new()));
    let sink = Arc::clone(&turned);

    let mut pager = Pager::new(
        PagerOptions::new(PageWindow::new(-1i64, 0, 1), 390.0, move |direction| {
            sink.lock().unwrap().push(direction);
        })
        .with_minimum_distance(8.0),
    );
    println!("start: window={:?} offset={:?}", pager.window(), pager.visual_offset());

    // A fling to the left: the UI reports total translations while dragging...
    for x in [-20.0, -80.0, -160.0, -240.0] {
        pager.on_drag_changed(Vector::new(x, 3.0));
        println!("drag:  offset={:?}", pager.visual_offset());
    }

    // ...then the release, with the translation the fling would have reached.
    let outcome = pager.on_drag_ended(DragEnd::new(
        Vector::new(-260.0, 4.0),
        Vector::new(-620.0, 6.0),
    ));
    let DragEndOutcome::Settle(settle) = outcome else {
        unreachable!("dismissal is disabled");
    };
    println!("settle: {settle:?}");

    // A real host animates these frames; here we step linearly.
    for step in 1..=5 {
        let t = step as f32 / 5.0;
        pager.set_settle_offset(settle.from + (settle.to - settle.from) * t);
    }
    let completion = pager.finish_settle();
    println!("completion: {completion:?}");

    for direction in turned.lock().unwrap().drain(..) {
        let next = pager
            .window()
            .clone()
            .shifted(direction, |edge, direction| match direction {
                PageDirection::Forward => edge + 1,
                PageDirection::Backward => edge - 1,
            });
        pager.set_window(next);
    }
    println!("end:   window={:?} offset={:?}", pager.window(), pager.visual_offset());
}
