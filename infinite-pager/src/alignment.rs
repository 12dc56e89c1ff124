use crate::Vector;

/// Page geometry policy: maps gesture vectors onto the paging and dismiss axes, and paging-axis
/// offsets back into 2D visual offsets.
///
/// All three functions must be pure.
pub trait PageAlignment {
    /// Projects a translation onto the paging axis.
    fn axis_projection(&self, translation: Vector) -> f32;

    /// Projects a translation onto the axis perpendicular to paging, where a positive value
    /// points in the "dismiss" direction.
    fn dismiss_axis_projection(&self, translation: Vector) -> f32;

    /// Converts a paging-axis offset into the visual offset applied to the page strip.
    fn to_visual_offset(&self, offset: f32) -> Vector;
}

/// The built-in alignments.
///
/// - `Horizontal`: pages slide along `x`; dragging down (`+y`) dismisses.
/// - `Vertical`: pages slide along `y`; dragging right (`+x`) dismisses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    #[default]
    Horizontal,
    Vertical,
}

impl PageAlignment for Alignment {
    fn axis_projection(&self, translation: Vector) -> f32 {
        match self {
            Self::Horizontal => translation.x,
            Self::Vertical => translation.y,
        }
    }

    fn dismiss_axis_projection(&self, translation: Vector) -> f32 {
        match self {
            Self::Horizontal => translation.y,
            Self::Vertical => translation.x,
        }
    }

    fn to_visual_offset(&self, offset: f32) -> Vector {
        match self {
            Self::Horizontal => Vector::new(offset, 0.0),
            Self::Vertical => Vector::new(0.0, offset),
        }
    }
}
