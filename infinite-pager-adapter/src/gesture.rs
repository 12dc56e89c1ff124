use std::collections::VecDeque;

use infinite_pager::{DragEnd, Vector};

/// Samples older than this (relative to the newest one) are ignored for velocity estimation.
pub const VELOCITY_WINDOW_MS: u64 = 100;

/// Per-millisecond velocity retention used to project a fling's resting point.
pub const DEFAULT_DECELERATION_RATE: f32 = 0.998;

const MAX_SAMPLES: usize = 16;

/// Turns raw pointer samples into the drag events a [`infinite_pager::Pager`] consumes.
///
/// - A drag is recognised once the pointer travelled at least `minimum_distance` from the press.
/// - Translations are always totals since the press.
/// - On release, the predicted end translation extrapolates the recent pointer velocity with an
///   exponential deceleration: `translation + velocity * rate / (1 - rate)`.
#[derive(Clone, Debug)]
pub struct DragRecognizer {
    minimum_distance: f32,
    deceleration_rate: f32,
    origin: Option<Vector>,
    recognized: bool,
    samples: VecDeque<(Vector, u64)>,
}

impl DragRecognizer {
    pub fn new(minimum_distance: f32) -> Self {
        Self {
            minimum_distance: minimum_distance.max(0.0),
            deceleration_rate: DEFAULT_DECELERATION_RATE,
            origin: None,
            recognized: false,
            samples: VecDeque::with_capacity(MAX_SAMPLES),
        }
    }

    /// Sets the deceleration rate, clamped into `[0, 0.9999]`.
    pub fn with_deceleration_rate(mut self, rate: f32) -> Self {
        self.deceleration_rate = rate.clamp(0.0, 0.9999);
        self
    }

    pub fn minimum_distance(&self) -> f32 {
        self.minimum_distance
    }

    pub fn set_minimum_distance(&mut self, minimum_distance: f32) {
        self.minimum_distance = minimum_distance.max(0.0);
    }

    /// Whether a pointer is down.
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Whether the current press has turned into a drag.
    pub fn is_recognized(&self) -> bool {
        self.recognized
    }

    pub fn press(&mut self, position: Vector, now_ms: u64) {
        self.origin = Some(position);
        self.recognized = false;
        self.samples.clear();
        self.push_sample(position, now_ms);
    }

    /// Reports pointer motion. Returns the total translation once the drag is recognised.
    pub fn motion(&mut self, position: Vector, now_ms: u64) -> Option<Vector> {
        let origin = self.origin?;
        self.push_sample(position, now_ms);
        let translation = position - origin;
        if !self.recognized && translation.length() < self.minimum_distance {
            return None;
        }
        self.recognized = true;
        Some(translation)
    }

    /// Reports the pointer release. Returns `None` when the press never became a drag.
    pub fn release(&mut self, position: Vector, now_ms: u64) -> Option<DragEnd> {
        let translation = self.motion(position, now_ms);
        let velocity = self.velocity();
        self.reset();

        let translation = translation?;
        let horizon = self.deceleration_rate / (1.0 - self.deceleration_rate);
        Some(DragEnd::new(translation, translation + velocity * horizon))
    }

    /// Abandons the current press. Returns whether a recognised drag was cancelled.
    pub fn cancel(&mut self) -> bool {
        let was_recognized = self.recognized;
        self.reset();
        was_recognized
    }

    /// Estimated pointer velocity in units per millisecond over the last
    /// [`VELOCITY_WINDOW_MS`].
    pub fn velocity(&self) -> Vector {
        let Some(&(newest, newest_ms)) = self.samples.back() else {
            return Vector::ZERO;
        };
        let oldest = self
            .samples
            .iter()
            .find(|(_, ms)| newest_ms.saturating_sub(*ms) <= VELOCITY_WINDOW_MS);
        let Some(&(oldest, oldest_ms)) = oldest else {
            return Vector::ZERO;
        };
        let dt = newest_ms.saturating_sub(oldest_ms);
        if dt == 0 {
            return Vector::ZERO;
        }
        (newest - oldest) * (1.0 / dt as f32)
    }

    fn push_sample(&mut self, position: Vector, now_ms: u64) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back((position, now_ms));
    }

    fn reset(&mut self) {
        self.origin = None;
        self.recognized = false;
        self.samples.clear();
    }
}

impl Default for DragRecognizer {
    fn default() -> Self {
        Self::new(0.0)
    }
}
