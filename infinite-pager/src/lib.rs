//! A headless paging gesture controller for infinite, carousel-style page views.
//!
//! The pager keeps a sliding window of three pages (`[previous, current, next]`) and turns a
//! continuous drag into a discrete paging decision: it tracks the drag offset, predicts the slot to
//! settle on from the gesture's predicted end translation, requests a short settle animation, and
//! fires a directional callback once the animation completes. An optional cross-axis dismiss
//! gesture is disambiguated from paging at drag end.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - drag translations (and a predicted end translation on release)
//! - the page extent along the paging axis and the three-page window
//! - an animation runner that plays [`Settle`] requests and reports completion
//!
//! For a frame-driven animation runner and drag recognition, see the `infinite-pager-adapter`
//! crate.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod alignment;
mod options;
mod pager;
mod state;
mod types;
mod window;


pub use alignment::{Alignment, PageAlignment};
pub use options::{
    DismissCallback, DismissGesture, OnChangeCallback, PagerConfig, PagerOptions, PagingCallback,
    SharedAlignment,
};
pub use pager::{Pager, current_index, target_slot};
pub use state::PagerState;
pub use types::{
    DragEnd, DragEndOutcome, PageDirection, PageSlot, PagerPhase, Settle, SettleCompletion, Vector,
};
pub use window::PageWindow;
