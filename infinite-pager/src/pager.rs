use std::cell::Cell;
use std::sync::Arc;

use crate::{
    DragEnd, DragEndOutcome, PageSlot, PageWindow, PagerOptions, PagerPhase, PagerState, Settle,
    SettleCompletion, Vector,
};

/// A headless paging gesture controller for a three-slot `[previous, current, next]` window.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects and never animates by itself.
/// - Your adapter feeds it drag events, animation frames and external window/extent changes.
/// - Rendering reads [`Pager::visual_offset`], or subscribes through `on_change`.
///
/// For a frame-driven animation runner and a gesture recognizer, see the
/// `infinite-pager-adapter` crate.
#[derive(Clone, Debug)]
pub struct Pager<T> {
    options: PagerOptions<T>,
    settled_offset: f32,
    drag_offset: f32,
    dismiss_offset: f32,
    phase: PagerPhase,
    settle: Option<Settle>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<T> Pager<T> {
    /// Creates a pager centred on the middle slot of `options.window`.
    pub fn new(options: PagerOptions<T>) -> Self {
        let centre = PageSlot::Current.offset(options.page_extent);
        pdebug!(
            page_extent = options.page_extent,
            dismiss_gesture = ?options.dismiss_gesture,
            "Pager::new"
        );
        Self {
            options,
            settled_offset: centre,
            drag_offset: 0.0,
            dismiss_offset: centre,
            phase: PagerPhase::Idle,
            settle: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &PagerOptions<T> {
        &self.options
    }

    pub fn window(&self) -> &PageWindow<T> {
        &self.options.window
    }

    pub fn page_extent(&self) -> f32 {
        self.options.page_extent
    }

    pub fn phase(&self) -> PagerPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == PagerPhase::Dragging
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// The settle animation currently waiting for its completion notification, if any.
    pub fn pending_settle(&self) -> Option<Settle> {
        self.settle
    }

    /// The paging-axis offset of the centred page (live animated value while settling).
    pub fn settled_offset(&self) -> f32 {
        self.settled_offset
    }

    /// The paging-axis offset contributed by the drag in progress (`0` when not dragging).
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Accumulated perpendicular displacement used to recognise dismiss gestures.
    pub fn dismiss_offset(&self) -> f32 {
        self.dismiss_offset
    }

    /// The paging-axis offset presented to rendering: `settled_offset + drag_offset`.
    pub fn offset(&self) -> f32 {
        self.settled_offset + self.drag_offset
    }

    /// The 2D offset to apply to the page strip.
    pub fn visual_offset(&self) -> Vector {
        self.options.alignment.to_visual_offset(self.offset())
    }

    /// The slot the settled offset currently centres, if it is inside the window.
    pub fn current_slot(&self) -> Option<PageSlot> {
        PageSlot::from_index(current_index(self.settled_offset, self.options.page_extent))
    }

    /// Returns a lightweight snapshot of the pager's offsets.
    pub fn state(&self) -> PagerState {
        PagerState {
            settled_offset: self.settled_offset,
            drag_offset: self.drag_offset,
            dismiss_offset: self.dismiss_offset,
            page_extent: self.options.page_extent,
            phase: self.phase,
        }
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Pager<T>, Vector) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.visual_offset());
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        let out = f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
        out
    }

    /// Reports the total translation of the drag in progress.
    ///
    /// Every update carries the translation since the drag started, so repeating an update is a
    /// no-op.
    pub fn on_drag_changed(&mut self, translation: Vector) {
        let offset = self.options.alignment.axis_projection(translation);
        ptrace!(x = translation.x, y = translation.y, offset, "on_drag_changed");
        if self.phase == PagerPhase::Dragging && self.drag_offset == offset {
            return;
        }
        self.phase = PagerPhase::Dragging;
        self.drag_offset = offset;
        self.notify();
    }

    /// Abandons the drag in progress without a paging decision.
    pub fn cancel_drag(&mut self) {
        if self.phase != PagerPhase::Dragging {
            return;
        }
        pdebug!(drag_offset = self.drag_offset, "cancel_drag");
        self.drag_offset = 0.0;
        self.phase = if self.settle.is_some() {
            PagerPhase::Settling
        } else {
            PagerPhase::Idle
        };
        self.notify();
    }

    /// Handles the end of a drag.
    ///
    /// Folds the drag into the settled offset, predicts the slot to settle on from
    /// `predicted_end_translation`, and either requests a settle animation or, when the drag was
    /// a dismiss gesture, fires the dismiss callback and skips settling entirely.
    ///
    /// A settle that is still pending from an earlier drag is completed first (firing its
    /// callback), so settles never overlap.
    pub fn on_drag_ended(&mut self, end: DragEnd) -> DragEndOutcome {
        let (previous, outcome) = self.batch_update(|p| {
            let previous = p.complete_settle();
            (previous, p.end_drag(end))
        });

        if let Some(completion) = previous {
            self.dispatch_completion(completion);
        }
        if let (DragEndOutcome::Dismissed, Some(on_dismiss)) =
            (outcome, &self.options.on_dismiss)
        {
            on_dismiss();
        }
        outcome
    }

    fn end_drag(&mut self, end: DragEnd) -> DragEndOutcome {
        let extent = self.options.page_extent;
        let alignment = Arc::clone(&self.options.alignment);

        let old_index = current_index(self.settled_offset, extent);
        self.settled_offset += alignment.axis_projection(end.translation);
        self.drag_offset = 0.0;

        let predicted = alignment.axis_projection(end.predicted_end_translation);
        let new_index = target_slot(predicted, extent);

        if self.options.dismissal_enabled() {
            self.dismiss_offset += alignment.dismiss_axis_projection(end.translation);
            if predicted.abs() < self.dismiss_offset.abs() && self.dismiss_offset > 0.0 {
                pdebug!(
                    predicted,
                    dismiss_offset = self.dismiss_offset,
                    "drag ended as dismissal"
                );
                self.phase = PagerPhase::Dismissed;
                self.notify();
                return DragEndOutcome::Dismissed;
            }
        }

        let settle = Settle {
            from: self.settled_offset,
            to: new_index.offset(extent),
            duration_ms: self.options.settle_duration_ms,
            old_index,
            new_index,
        };
        pdebug!(
            old_index,
            new_index = new_index.index(),
            predicted,
            from = settle.from,
            to = settle.to,
            "drag ended, settling"
        );
        self.settle = Some(settle);
        self.phase = PagerPhase::Settling;
        self.notify();
        DragEndOutcome::Settle(settle)
    }

    /// Applies one frame of the settle animation.
    ///
    /// Ignored when no settle is pending.
    pub fn set_settle_offset(&mut self, offset: f32) {
        if self.settle.is_none() {
            ptrace!(offset, "set_settle_offset ignored: no pending settle");
            return;
        }
        if self.settled_offset == offset {
            return;
        }
        self.settled_offset = offset;
        self.notify();
    }

    /// Completion notification for the pending settle animation.
    ///
    /// Snaps the settled offset to the target, returns to `Idle` and fires the paging callback
    /// when the settle crossed into the previous or next slot. The decision uses the indexes
    /// captured when the drag ended, even if the window was reset since.
    ///
    /// Returns `None` when no settle was pending.
    pub fn finish_settle(&mut self) -> Option<SettleCompletion> {
        let completion = self.batch_update(|p| p.complete_settle())?;
        self.dispatch_completion(completion);
        Some(completion)
    }

    fn complete_settle(&mut self) -> Option<SettleCompletion> {
        let settle = self.settle.take()?;
        self.settled_offset = settle.to;
        if self.phase == PagerPhase::Settling {
            self.phase = PagerPhase::Idle;
        }

        let completion = if settle.crosses_page() {
            settle
                .new_index
                .direction()
                .map_or(SettleCompletion::SnapBack, SettleCompletion::Paged)
        } else {
            SettleCompletion::SnapBack
        };
        pdebug!(
            old_index = settle.old_index,
            new_index = settle.new_index.index(),
            ?completion,
            "settle finished"
        );
        self.notify();
        Some(completion)
    }

    fn dispatch_completion(&self, completion: SettleCompletion) {
        if let SettleCompletion::Paged(direction) = completion {
            (self.options.on_page)(direction);
        }
    }

    /// Re-centres on the middle slot: `settled_offset = dismiss_offset = -page_extent` and
    /// `drag_offset = 0`.
    ///
    /// A pending settle is not cancelled. Its target is moved to the centre so the animation
    /// runner converges there, and its completion still reports the indexes captured at drag end.
    pub fn reset(&mut self) {
        let centre = PageSlot::Current.offset(self.options.page_extent);
        pdebug!(centre, pending_settle = self.settle.is_some(), "reset");
        self.settled_offset = centre;
        self.drag_offset = 0.0;
        self.dismiss_offset = centre;
        if let Some(settle) = &mut self.settle {
            settle.from = centre;
            settle.to = centre;
        }
        if self.phase == PagerPhase::Dismissed {
            self.phase = PagerPhase::Idle;
        }
        self.notify();
    }

    /// External page extent change. Re-centres when the extent actually changed.
    pub fn set_page_extent(&mut self, page_extent: f32) {
        if self.options.page_extent == page_extent {
            return;
        }
        if !is_usable_extent(page_extent) {
            pwarn!(page_extent, "set_page_extent: degenerate page extent");
        }
        self.options.page_extent = page_extent;
        self.reset();
    }
}

impl<T: PartialEq> Pager<T> {
    /// External window change. Re-centres when the window actually changed.
    ///
    /// Hosts call this from their paging callback handling, with a window whose middle slot holds
    /// the newly current page.
    pub fn set_window(&mut self, window: PageWindow<T>) {
        if self.options.window == window {
            return;
        }
        self.options.window = window;
        self.reset();
    }

    /// Replaces the options. Re-centres when the window or page extent changed.
    pub fn set_options(&mut self, options: PagerOptions<T>) {
        let recenter = self.options.window != options.window
            || self.options.page_extent != options.page_extent;
        self.options = options;
        ptrace!(
            page_extent = self.options.page_extent,
            recenter,
            "Pager::set_options"
        );
        if recenter {
            self.reset();
        } else {
            self.notify();
        }
    }
}

impl<T: Clone + PartialEq> Pager<T> {
    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut PagerOptions<T>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }
}

fn is_usable_extent(page_extent: f32) -> bool {
    page_extent.is_finite() && page_extent > 0.0
}

/// Recovers the centred slot from a settled offset: `floor(0.5 - settled_offset / page_extent)`.
///
/// The result is not clamped; an offset outside the window yields an index outside `0..=2`.
/// Degenerate extents (non-positive or non-finite) yield the middle slot.
pub fn current_index(settled_offset: f32, page_extent: f32) -> i32 {
    if !is_usable_extent(page_extent) {
        pwarn!(page_extent, "current_index: degenerate page extent");
        return PageSlot::Current.index();
    }
    (0.5 - settled_offset / page_extent).floor() as i32
}

/// Predicts the slot to settle on: `clamp(round(1 - predicted_offset / page_extent), 0, 2)`.
///
/// Rounds half away from zero, unlike [`current_index`]. Degenerate extents yield the middle slot.
pub fn target_slot(predicted_offset: f32, page_extent: f32) -> PageSlot {
    if !is_usable_extent(page_extent) {
        pwarn!(page_extent, "target_slot: degenerate page extent");
        return PageSlot::Current;
    }
    PageSlot::clamped((1.0 - predicted_offset / page_extent).round())
}
