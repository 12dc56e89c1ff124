use crate::PagerPhase;

/// A lightweight, serializable snapshot of the pager's offsets.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Useful for debug
/// overlays and for hosts that mirror pager state into their own stores.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerState {
    pub settled_offset: f32,
    pub drag_offset: f32,
    pub dismiss_offset: f32,
    pub page_extent: f32,
    pub phase: PagerPhase,
}

impl PagerState {
    /// The paging-axis offset presented to rendering.
    pub fn offset(&self) -> f32 {
        self.settled_offset + self.drag_offset
    }
}
