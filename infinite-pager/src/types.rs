use core::ops::{Add, Mul, Neg, Sub};

/// A 2D translation or visual offset, in the host's layout units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageDirection {
    Forward,
    Backward,
}

impl PageDirection {
    /// The slot a page advance in this direction settles on.
    pub fn slot(self) -> PageSlot {
        match self {
            Self::Forward => PageSlot::Next,
            Self::Backward => PageSlot::Previous,
        }
    }
}

/// One of the three slots of the sliding page window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageSlot {
    Previous = 0,
    Current = 1,
    Next = 2,
}

impl PageSlot {
    pub const ALL: [PageSlot; 3] = [Self::Previous, Self::Current, Self::Next];

    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Previous),
            1 => Some(Self::Current),
            2 => Some(Self::Next),
            _ => None,
        }
    }

    /// Clamps a real-valued (already rounded) slot index into `[0, 2]`.
    ///
    /// `NaN` maps to [`PageSlot::Current`].
    pub fn clamped(index: f32) -> Self {
        if index.is_nan() {
            return Self::Current;
        }
        let clamped = index.clamp(0.0, 2.0) as i32;
        Self::from_index(clamped).unwrap_or(Self::Current)
    }

    /// The paging-axis offset that centres this slot.
    pub fn offset(self, page_extent: f32) -> f32 {
        -page_extent * self.index() as f32
    }

    pub fn direction(self) -> Option<PageDirection> {
        match self {
            Self::Previous => Some(PageDirection::Backward),
            Self::Current => None,
            Self::Next => Some(PageDirection::Forward),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PagerPhase {
    #[default]
    Idle,
    Dragging,
    Settling,
    /// The last drag ended as a dismissal. Cleared by the next drag or a reset.
    Dismissed,
}

/// The final event of a drag, as reported by the gesture source.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragEnd {
    /// Total translation since the drag started.
    pub translation: Vector,
    /// Where the drag would come to rest if the pointer's velocity decayed naturally.
    pub predicted_end_translation: Vector,
}

impl DragEnd {
    pub fn new(translation: Vector, predicted_end_translation: Vector) -> Self {
        Self {
            translation,
            predicted_end_translation,
        }
    }
}

/// A settle animation the host's animation runner should play.
///
/// The runner animates the settled offset from `from` to `to`, feeding every frame back through
/// [`crate::Pager::set_settle_offset`], and calls [`crate::Pager::finish_settle`] once done.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settle {
    pub from: f32,
    pub to: f32,
    pub duration_ms: u64,
    /// The slot that was centred before the drag (unclamped).
    pub old_index: i32,
    pub new_index: PageSlot,
}

impl Settle {
    pub fn crosses_page(&self) -> bool {
        self.new_index.index() != self.old_index
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragEndOutcome {
    Settle(Settle),
    Dismissed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettleCompletion {
    Paged(PageDirection),
    SnapBack,
}

impl SettleCompletion {
    pub fn direction(self) -> Option<PageDirection> {
        match self {
            Self::Paged(direction) => Some(direction),
            Self::SnapBack => None,
        }
    }
}
