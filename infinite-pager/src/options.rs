use std::sync::Arc;

use crate::pager::Pager;
use crate::{Alignment, PageAlignment, PageDirection, PageWindow, Vector};

/// Called once a settle animation that crossed a page boundary has completed.
pub type PagingCallback = Arc<dyn Fn(PageDirection) + Send + Sync>;

/// Called when a drag ends as a dismissal gesture.
pub type DismissCallback = Arc<dyn Fn() + Send + Sync>;

/// A callback fired whenever the pager's state changes.
///
/// The second argument is the current visual offset (see [`Pager::visual_offset`]).
pub type OnChangeCallback<T> = Arc<dyn Fn(&Pager<T>, Vector) + Send + Sync>;

/// A shared page geometry policy.
pub type SharedAlignment = Arc<dyn PageAlignment + Send + Sync>;

/// How a drag along the perpendicular axis may dismiss the pager.
///
/// This is a host capability: hosts whose own dismiss gesture is unreliable while a pager is on
/// screen opt into `CrossAxis`, and the pager disambiguates the two axes itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DismissGesture {
    /// The dismiss accumulator is inert; drags never dismiss.
    #[default]
    Unsupported,
    /// A predominantly perpendicular drag with positive accumulated displacement dismisses.
    CrossAxis,
}

/// The plain-data part of [`PagerOptions`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so hosts can keep it
/// in their own settings files.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagerConfig {
    pub minimum_distance: f32,
    pub alignment: Alignment,
    pub dismiss_gesture: DismissGesture,
    pub settle_duration_ms: u64,
}

impl PagerConfig {
    pub const DEFAULT_SETTLE_DURATION_MS: u64 = 100;
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            minimum_distance: 0.0,
            alignment: Alignment::Horizontal,
            dismiss_gesture: DismissGesture::Unsupported,
            settle_duration_ms: Self::DEFAULT_SETTLE_DURATION_MS,
        }
    }
}

/// Configuration for [`crate::Pager`].
///
/// Cheap to clone: callbacks and the alignment strategy live behind `Arc`s.
pub struct PagerOptions<T> {
    /// The initial `[previous, current, next]` window.
    pub window: PageWindow<T>,
    /// Length of one page along the paging axis.
    pub page_extent: f32,

    /// Minimum pointer travel before a drag is recognised.
    ///
    /// The pager itself does not filter drag events; this is read by the gesture source.
    pub minimum_distance: f32,

    /// Maps gesture translations onto the paging and dismiss axes and offsets back onto the
    /// screen.
    pub alignment: SharedAlignment,

    /// Called with the direction when a settle that crossed into the previous or next slot
    /// completes.
    pub on_page: PagingCallback,
    /// Optional dismiss handler. When `None` the dismissal path is disabled entirely, whatever
    /// `dismiss_gesture` says.
    pub on_dismiss: Option<DismissCallback>,
    /// Whether the host supports the cross-axis dismiss gesture.
    pub dismiss_gesture: DismissGesture,

    /// Duration of the settle animation requested on drag end.
    pub settle_duration_ms: u64,

    /// Optional observer fired after state mutations.
    pub on_change: Option<OnChangeCallback<T>>,
}

impl<T: Clone> Clone for PagerOptions<T> {
    fn clone(&self) -> Self {
        Self {
            window: self.window.clone(),
            page_extent: self.page_extent,
            minimum_distance: self.minimum_distance,
            alignment: Arc::clone(&self.alignment),
            on_page: Arc::clone(&self.on_page),
            on_dismiss: self.on_dismiss.clone(),
            dismiss_gesture: self.dismiss_gesture,
            settle_duration_ms: self.settle_duration_ms,
            on_change: self.on_change.clone(),
        }
    }
}

impl<T> PagerOptions<T> {
    pub fn new(
        window: PageWindow<T>,
        page_extent: f32,
        on_page: impl Fn(PageDirection) + Send + Sync + 'static,
    ) -> Self {
        let config = PagerConfig::default();
        Self {
            window,
            page_extent,
            minimum_distance: config.minimum_distance,
            alignment: Arc::new(config.alignment),
            on_page: Arc::new(on_page),
            on_dismiss: None,
            dismiss_gesture: config.dismiss_gesture,
            settle_duration_ms: config.settle_duration_ms,
            on_change: None,
        }
    }

    /// Applies every field of a plain-data config.
    pub fn with_config(mut self, config: PagerConfig) -> Self {
        self.minimum_distance = config.minimum_distance;
        self.alignment = Arc::new(config.alignment);
        self.dismiss_gesture = config.dismiss_gesture;
        self.settle_duration_ms = config.settle_duration_ms;
        self
    }

    pub fn with_minimum_distance(mut self, minimum_distance: f32) -> Self {
        self.minimum_distance = minimum_distance;
        self
    }

    pub fn with_alignment(
        mut self,
        alignment: impl PageAlignment + Send + Sync + 'static,
    ) -> Self {
        self.alignment = Arc::new(alignment);
        self
    }

    pub fn with_on_page(
        mut self,
        on_page: impl Fn(PageDirection) + Send + Sync + 'static,
    ) -> Self {
        self.on_page = Arc::new(on_page);
        self
    }

    pub fn with_on_dismiss(
        mut self,
        on_dismiss: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_dismiss = on_dismiss.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_dismiss_gesture(mut self, dismiss_gesture: DismissGesture) -> Self {
        self.dismiss_gesture = dismiss_gesture;
        self
    }

    pub fn with_settle_duration_ms(mut self, duration_ms: u64) -> Self {
        self.settle_duration_ms = duration_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Pager<T>, Vector) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Whether drag-end events may dismiss: the capability is present and a handler is set.
    pub fn dismissal_enabled(&self) -> bool {
        self.dismiss_gesture == DismissGesture::CrossAxis && self.on_dismiss.is_some()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for PagerOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagerOptions")
            .field("window", &self.window)
            .field("page_extent", &self.page_extent)
            .field("minimum_distance", &self.minimum_distance)
            .field("dismiss_gesture", &self.dismiss_gesture)
            .field("has_on_dismiss", &self.on_dismiss.is_some())
            .field("settle_duration_ms", &self.settle_duration_ms)
            .finish_non_exhaustive()
    }
}
