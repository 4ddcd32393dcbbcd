/// Where a target item should land in the viewport when scrolling to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Scroll only if the item is not fully visible, by the smallest amount.
    #[default]
    Auto,
    /// Like `Auto` when the item is reachable without leaving the current window, otherwise
    /// `Center`.
    Smart,
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// Text direction of the scroll container. Only meaningful for the horizontal axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Container dimensions as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
}

impl Dimensions {
    pub fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }

    /// The extent along `axis` (height for vertical lists, width for horizontal ones).
    pub fn main(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

/// An item's placement along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub offset: f64,
    pub size: f64,
}

impl Bounds {
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}

/// A contiguous run of item indexes.
///
/// `end_index` is exclusive; an empty collection yields `0..0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl ItemRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    /// Builds a range from inclusive `start..=stop` indexes.
    pub fn inclusive(start_index: usize, stop_index: usize) -> Self {
        Self {
            start_index,
            end_index: stop_index.saturating_add(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    /// The last index in the range, or `None` when it is empty.
    pub fn stop_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn iter(&self) -> core::ops::Range<usize> {
        self.start_index..self.end_index
    }
}

/// The two ranges a renderer needs: what is on screen, and what should be realized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRanges {
    /// Items with at least one pixel inside the viewport.
    pub visible: ItemRange,
    /// `visible` padded by the overscan count on both sides.
    pub overscan: ItemRange,
}

impl ItemRanges {
    pub const EMPTY: Self = Self {
        visible: ItemRange::EMPTY,
        overscan: ItemRange::EMPTY,
    };
}

/// An item to render, with its bounds in logical (left-to-right) scroll coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualItem {
    pub index: usize,
    pub bounds: Bounds,
}

/// Payload of the `on_scroll` callback.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub offset: f64,
    pub direction: ScrollDirection,
    /// `true` when the offset came from `scroll_to_*` rather than from the user.
    pub update_was_requested: bool,
}
