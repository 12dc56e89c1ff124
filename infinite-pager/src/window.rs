use core::fmt;

use crate::{PageDirection, PageSlot};

/// The three-slot sliding window of pages: `[previous, current, next]`.
///
/// The window is owned by the host. After a page advance the host supplies a new window in which
/// the newly current page sits in the middle slot again (see [`PageWindow::shifted`]).
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageWindow<T> {
    slots: [T; 3],
}

impl<T> PageWindow<T> {
    pub fn new(previous: T, current: T, next: T) -> Self {
        Self {
            slots: [previous, current, next],
        }
    }

    pub fn from_array(slots: [T; 3]) -> Self {
        Self { slots }
    }

    pub fn get(&self, slot: PageSlot) -> &T {
        &self.slots[slot as usize]
    }

    pub fn previous(&self) -> &T {
        self.get(PageSlot::Previous)
    }

    pub fn current(&self) -> &T {
        self.get(PageSlot::Current)
    }

    pub fn next(&self) -> &T {
        self.get(PageSlot::Next)
    }

    pub fn as_array(&self) -> &[T; 3] {
        &self.slots
    }

    pub fn into_array(self) -> [T; 3] {
        self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = (PageSlot, &T)> {
        PageSlot::ALL.into_iter().zip(self.slots.iter())
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageWindow<U> {
        PageWindow {
            slots: self.slots.map(f),
        }
    }

    /// Builds the window that follows a page advance in `direction`.
    ///
    /// `make(edge, direction)` produces the page beyond `edge`, the page that was at the far end of
    /// the window in the direction of travel.
    pub fn shifted(
        self,
        direction: PageDirection,
        mut make: impl FnMut(&T, PageDirection) -> T,
    ) -> Self {
        let [previous, current, next] = self.slots;
        match direction {
            PageDirection::Forward => {
                let beyond = make(&next, direction);
                Self::new(current, next, beyond)
            }
            PageDirection::Backward => {
                let beyond = make(&previous, direction);
                Self::new(beyond, previous, current)
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PageWindow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageWindow")
            .field("previous", self.previous())
            .field("current", self.current())
            .field("next", self.next())
            .finish()
    }
}
