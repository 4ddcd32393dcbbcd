use alloc::sync::Arc;

use crate::virtualizer::Virtualizer;
use crate::{Axis, Dimensions, Direction, ItemRanges, ItemSize, ScrollEvent};

/// A callback fired after any state update (ranges, scroll offset or scrolling flag).
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback<P> = Arc<dyn Fn(&Virtualizer<P>, bool) + Send + Sync>;

/// A callback fired when the visible or overscan range changes.
///
/// Not fired while the collection is empty.
pub type OnItemsRendered = Arc<dyn Fn(ItemRanges) + Send + Sync>;

/// A callback fired when the scroll offset, direction or origin changes.
pub type OnScroll = Arc<dyn Fn(ScrollEvent) + Send + Sync>;

/// Configuration for [`crate::Virtualizer`].
///
/// Closures are stored in `Arc`s, so cloning options to tweak a field and handing them back via
/// `Virtualizer::set_options` does not reallocate them. Keeping the same `Arc` for a
/// [`ItemSize::Dynamic`] function also keeps the bounds cache alive.
pub struct VirtualizerOptions<P = ()> {
    pub item_count: usize,
    pub item_size: ItemSize<P>,
    /// Opaque value handed to [`ItemSize::Dynamic`] functions. Replacing it with a value that is
    /// not `==` to the current one discards all cached bounds.
    pub item_props: P,

    pub axis: Axis,
    pub direction: Direction,

    /// Items realized beyond each end of the visible range.
    pub overscan_count: usize,

    pub initial_scroll_offset: f64,

    /// Container dimensions to assume until the host reports real ones.
    ///
    /// Required up front when `item_size` is a percentage.
    pub initial_dimensions: Option<Dimensions>,

    /// Delay after the last scroll event before `is_scrolling` resets.
    pub is_scrolling_reset_delay_ms: u64,

    pub on_change: Option<OnChangeCallback<P>>,
    pub on_items_rendered: Option<OnItemsRendered>,
    pub on_scroll: Option<OnScroll>,
}

impl<P: Clone> Clone for VirtualizerOptions<P> {
    fn clone(&self) -> Self {
        Self {
            item_count: self.item_count,
            item_size: self.item_size.clone(),
            item_props: self.item_props.clone(),
            axis: self.axis,
            direction: self.direction,
            overscan_count: self.overscan_count,
            initial_scroll_offset: self.initial_scroll_offset,
            initial_dimensions: self.initial_dimensions,
            is_scrolling_reset_delay_ms: self.is_scrolling_reset_delay_ms,
            on_change: self.on_change.clone(),
            on_items_rendered: self.on_items_rendered.clone(),
            on_scroll: self.on_scroll.clone(),
        }
    }
}

impl VirtualizerOptions<()> {
    /// Creates options for a list without item props.
    pub fn new(item_count: usize, item_size: impl Into<ItemSize<()>>) -> Self {
        Self::new_with_props(item_count, item_size, ())
    }
}

impl<P> VirtualizerOptions<P> {
    /// Creates options whose size function receives `item_props`.
    pub fn new_with_props(
        item_count: usize,
        item_size: impl Into<ItemSize<P>>,
        item_props: P,
    ) -> Self {
        Self {
            item_count,
            item_size: item_size.into(),
            item_props,
            axis: Axis::Vertical,
            direction: Direction::Ltr,
            overscan_count: 2,
            initial_scroll_offset: 0.0,
            initial_dimensions: None,
            is_scrolling_reset_delay_ms: 150,
            on_change: None,
            on_items_rendered: None,
            on_scroll: None,
        }
    }

    pub fn with_item_props(mut self, item_props: P) -> Self {
        self.item_props = item_props;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_overscan_count(mut self, overscan_count: usize) -> Self {
        self.overscan_count = overscan_count;
        self
    }

    pub fn with_initial_scroll_offset(mut self, offset: f64) -> Self {
        self.initial_scroll_offset = offset;
        self
    }

    pub fn with_initial_dimensions(mut self, dimensions: Option<Dimensions>) -> Self {
        self.initial_dimensions = dimensions;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Virtualizer<P>, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_items_rendered(
        mut self,
        on_items_rendered: Option<impl Fn(ItemRanges) + Send + Sync + 'static>,
    ) -> Self {
        self.on_items_rendered = on_items_rendered.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(ScrollEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }
}

impl<P: core::fmt::Debug> core::fmt::Debug for VirtualizerOptions<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualizerOptions")
            .field("item_count", &self.item_count)
            .field("item_size", &self.item_size)
            .field("item_props", &self.item_props)
            .field("axis", &self.axis)
            .field("direction", &self.direction)
            .field("overscan_count", &self.overscan_count)
            .field("initial_scroll_offset", &self.initial_scroll_offset)
            .field("initial_dimensions", &self.initial_dimensions)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
