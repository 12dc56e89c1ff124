use infinite_pager::{DragEnd, DragEndOutcome, Pager, PagerOptions, SettleCompletion, Vector};

use crate::{DragRecognizer, Easing, Tween};

/// A framework-neutral controller that wraps an `infinite_pager::Pager` and plays its settle
/// animations.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `pointer_down` / `pointer_move` / `pointer_up` with raw pointer samples, or
///   `on_drag_changed` / `on_drag_ended` when the UI toolkit recognises drags itself
/// - `tick(now_ms)` each frame while [`Controller::is_animating`] is true
///
/// Render with [`Pager::visual_offset`] after each call.
#[derive(Clone, Debug)]
pub struct Controller<T> {
    pager: Pager<T>,
    recognizer: DragRecognizer,
    tween: Option<Tween>,
    easing: Easing,
    completion: Option<SettleCompletion>,
}

impl<T> Controller<T> {
    pub fn new(options: PagerOptions<T>) -> Self {
        Self::from_pager(Pager::new(options))
    }

    /// Wraps an existing pager. The drag recognizer follows the pager's `minimum_distance`.
    pub fn from_pager(pager: Pager<T>) -> Self {
        let recognizer = DragRecognizer::new(pager.options().minimum_distance);
        Self {
            pager,
            recognizer,
            tween: None,
            easing: Easing::default(),
            completion: None,
        }
    }

    pub fn pager(&self) -> &Pager<T> {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager<T> {
        &mut self.pager
    }

    pub fn into_pager(self) -> Pager<T> {
        self.pager
    }

    pub fn recognizer(&self) -> &DragRecognizer {
        &self.recognizer
    }

    pub fn recognizer_mut(&mut self) -> &mut DragRecognizer {
        &mut self.recognizer
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Sets the curve used for subsequent settle animations.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Takes the result of the most recently completed settle, if it was not taken yet.
    pub fn take_completion(&mut self) -> Option<SettleCompletion> {
        self.completion.take()
    }

    /// Starts tracking a press. The recognizer picks up the pager's current `minimum_distance`
    /// here, so option changes apply from the next press on.
    pub fn pointer_down(&mut self, position: Vector, now_ms: u64) {
        self.recognizer
            .set_minimum_distance(self.pager.options().minimum_distance);
        self.recognizer.press(position, now_ms);
    }

    pub fn pointer_move(&mut self, position: Vector, now_ms: u64) {
        if let Some(translation) = self.recognizer.motion(position, now_ms) {
            self.pager.on_drag_changed(translation);
        }
    }

    /// Returns `None` when the press never turned into a drag.
    pub fn pointer_up(&mut self, position: Vector, now_ms: u64) -> Option<DragEndOutcome> {
        let end = self.recognizer.release(position, now_ms)?;
        Some(self.on_drag_ended(end, now_ms))
    }

    pub fn pointer_cancel(&mut self) {
        if self.recognizer.cancel() {
            self.pager.cancel_drag();
        }
    }

    pub fn on_drag_changed(&mut self, translation: Vector) {
        self.pager.on_drag_changed(translation);
    }

    /// Forwards a drag end to the pager and starts the requested settle animation.
    ///
    /// An animation still running from an earlier drag is superseded: its settle completes first,
    /// and the result is kept for [`Controller::take_completion`].
    pub fn on_drag_ended(&mut self, end: DragEnd, now_ms: u64) -> DragEndOutcome {
        if let Some(completion) = self.pager.finish_settle() {
            pdebug!(?completion, "settle superseded by a new drag end");
            self.completion = Some(completion);
        }
        let outcome = self.pager.on_drag_ended(end);
        self.tween = match outcome {
            DragEndOutcome::Settle(settle) => {
                pdebug!(
                    from = settle.from,
                    to = settle.to,
                    duration_ms = settle.duration_ms,
                    "settle tween started"
                );
                Some(Tween::new(
                    settle.from,
                    settle.to,
                    now_ms,
                    settle.duration_ms,
                    self.easing,
                ))
            }
            DragEndOutcome::Dismissed => None,
        };
        outcome
    }

    /// Advances the settle animation.
    ///
    /// - If a tween is active, applies the sampled offset to the pager and returns the pager's
    ///   paging-axis offset. The final tick finishes the settle, which fires the paging callback.
    /// - Otherwise returns `None`.
    ///
    /// When the pager was re-centred during the animation, the tween is retargeted: it continues
    /// from its current sample towards the new target and still ends at the original time.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let mut tween = self.tween?;
        let Some(settle) = self.pager.pending_settle() else {
            self.tween = None;
            return None;
        };

        if settle.to != tween.to {
            ptrace!(old_to = tween.to, new_to = settle.to, "settle target moved");
            tween.retarget(now_ms, settle.to, tween.remaining_ms(now_ms));
        }

        self.pager.set_settle_offset(tween.sample(now_ms));

        if tween.is_done(now_ms) {
            self.tween = None;
            self.completion = self.pager.finish_settle();
            pdebug!(completion = ?self.completion, "settle tween finished");
        } else {
            self.tween = Some(tween);
        }

        Some(self.pager.offset())
    }

    /// Jumps the running settle animation to its end and finishes it.
    pub fn cancel_animation(&mut self) -> Option<SettleCompletion> {
        self.tween.take()?;
        let completion = self.pager.finish_settle();
        self.completion = completion;
        completion
    }
}
