use alloc::vec::Vec;
use core::cell::RefCell;

use crate::estimate::{estimated_total_size, is_estimate_exact};
use crate::plan::plan_offset;
use crate::range::find_ranges;
use crate::size::{ResolvedSize, resolve_item_size};
use crate::{
    Align, Axis, Bounds, CachedBounds, Dimensions, Direction, IndexError, ItemRange, ItemRanges,
    ItemSize, Result, ScrollDirection, ScrollEvent, VirtualItem, VirtualizerOptions,
};

/// A headless list windowing engine.
///
/// The virtualizer owns the bounds cache and the current range state. Your adapter drives it by
/// reporting container dimensions and (logical, left-to-right) scroll offsets, and reads back
/// [`ItemRanges`], per-item [`Bounds`] and the estimated total size.
///
/// Structural inputs (item count, item size, item props, axis, direction) discard the bounds
/// cache wholesale; it is rebuilt lazily from index 0 on the next query.
///
/// For RTL scroll coordinates, resize handling and scroll-surface wiring, see the
/// `listwindow-adapter` crate.
#[derive(Clone, Debug)]
pub struct Virtualizer<P = ()> {
    options: VirtualizerOptions<P>,
    dimensions: Option<Dimensions>,
    scroll_offset: f64,
    scroll_direction: ScrollDirection,
    scroll_update_was_requested: bool,
    is_scrolling: bool,
    last_scroll_event_ms: Option<u64>,

    resolved_size: ResolvedSize<P>,
    cache: RefCell<CachedBounds<P>>,
    ranges: ItemRanges,

    published: Option<Published>,
    batch_depth: usize,
    publish_pending: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Published {
    ranges: ItemRanges,
    scroll: ScrollEvent,
    is_scrolling: bool,
}

impl<P: Clone + PartialEq> Virtualizer<P> {
    /// Creates a virtualizer and publishes its initial ranges.
    ///
    /// Fails when `options.item_size` is a malformed percentage, or a percentage without
    /// `options.initial_dimensions`.
    pub fn new(options: VirtualizerOptions<P>) -> Result<Self> {
        let dimensions = options.initial_dimensions;
        let container_size = dimensions.map(|d| d.main(options.axis));
        let resolved_size = resolve_item_size(container_size, &options.item_size)?;
        ldebug!(
            item_count = options.item_count,
            overscan_count = options.overscan_count,
            "Virtualizer::new"
        );
        let cache = CachedBounds::new(
            options.item_count,
            resolved_size.clone(),
            options.item_props.clone(),
        );
        let mut v = Self {
            dimensions,
            scroll_offset: options.initial_scroll_offset,
            scroll_direction: ScrollDirection::Forward,
            scroll_update_was_requested: false,
            is_scrolling: false,
            last_scroll_event_ms: None,
            resolved_size,
            cache: RefCell::new(cache),
            ranges: ItemRanges::EMPTY,
            options,
            published: None,
            batch_depth: 0,
            publish_pending: false,
        };
        v.refresh();
        Ok(v)
    }

    pub fn options(&self) -> &VirtualizerOptions<P> {
        &self.options
    }

    /// Replaces all options, rebuilding the bounds cache only if a structural input changed.
    ///
    /// The new item size is resolved before anything is applied, so on error the virtualizer
    /// is left untouched.
    pub fn set_options(&mut self, options: VirtualizerOptions<P>) -> Result<()> {
        let size_changed = options.item_size != self.options.item_size;
        let axis_changed = options.axis != self.options.axis;
        let structural = size_changed
            || axis_changed
            || options.item_count != self.options.item_count
            || options.item_props != self.options.item_props
            || options.direction != self.options.direction;

        let resolved = if size_changed || (axis_changed && options.item_size.depends_on_container())
        {
            let container_size = self.dimensions.map(|d| d.main(options.axis));
            Some(resolve_item_size(container_size, &options.item_size)?)
        } else {
            None
        };

        self.options = options;
        ltrace!(
            item_count = self.options.item_count,
            overscan_count = self.options.overscan_count,
            structural,
            "Virtualizer::set_options"
        );
        if let Some(resolved) = resolved {
            self.resolved_size = resolved;
        }
        if structural {
            self.rebuild();
        } else {
            self.refresh();
        }
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to [`Self::set_options`].
    pub fn update_options(&mut self, f: impl FnOnce(&mut VirtualizerOptions<P>)) -> Result<()> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn item_count(&self) -> usize {
        self.options.item_count
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        if self.options.item_count == item_count {
            return;
        }
        self.options.item_count = item_count;
        self.rebuild();
    }

    pub fn set_item_size(&mut self, item_size: ItemSize<P>) -> Result<()> {
        if self.options.item_size == item_size {
            return Ok(());
        }
        self.resolved_size = resolve_item_size(self.container_size_opt(), &item_size)?;
        self.options.item_size = item_size;
        self.rebuild();
        Ok(())
    }

    pub fn set_item_props(&mut self, item_props: P) {
        if self.options.item_props == item_props {
            return;
        }
        self.options.item_props = item_props;
        self.rebuild();
    }

    pub fn axis(&self) -> Axis {
        self.options.axis
    }

    pub fn direction(&self) -> Direction {
        self.options.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if self.options.direction == direction {
            return;
        }
        self.options.direction = direction;
        self.rebuild();
    }

    pub fn set_overscan_count(&mut self, overscan_count: usize) {
        if self.options.overscan_count == overscan_count {
            return;
        }
        self.options.overscan_count = overscan_count;
        self.refresh();
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    /// The container extent on the scroll axis (`0.0` until dimensions are known).
    pub fn container_size(&self) -> f64 {
        self.container_size_opt().unwrap_or(0.0)
    }

    fn container_size_opt(&self) -> Option<f64> {
        self.dimensions.map(|d| d.main(self.options.axis))
    }

    /// Applies new container dimensions.
    ///
    /// Percentage item sizes are re-resolved, which discards the bounds cache.
    pub fn set_dimensions(&mut self, dimensions: Dimensions) -> Result<()> {
        if self.dimensions == Some(dimensions) {
            return Ok(());
        }
        let prev_main = self.container_size_opt();
        let next_main = dimensions.main(self.options.axis);
        ltrace!(
            height = dimensions.height,
            width = dimensions.width,
            "Virtualizer::set_dimensions"
        );

        if self.options.item_size.depends_on_container() && prev_main != Some(next_main) {
            self.resolved_size = resolve_item_size(Some(next_main), &self.options.item_size)?;
            self.dimensions = Some(dimensions);
            self.rebuild();
        } else {
            self.dimensions = Some(dimensions);
            self.refresh();
        }
        Ok(())
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll_direction
    }

    /// Whether the current offset came from `scroll_to_*` rather than from the user.
    pub fn scroll_update_was_requested(&self) -> bool {
        self.scroll_update_was_requested
    }

    /// Applies a logical scroll offset reported by the host (user scrolling).
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.apply_offset(offset, false);
    }

    /// Applies a user scroll offset and marks the list as scrolling.
    pub fn apply_scroll_offset_event(&mut self, offset: f64, now_ms: u64) {
        ltrace!(offset, now_ms, "apply_scroll_offset_event");
        self.batch_update(|v| {
            v.set_scroll_offset(offset);
            v.notify_scroll_event(now_ms);
        });
    }

    /// Scrolls to an absolute logical offset (negative values scroll to `0`).
    ///
    /// Returns the applied offset.
    pub fn scroll_to_offset(&mut self, offset: f64) -> f64 {
        let offset = offset.max(0.0);
        self.apply_offset(offset, true);
        offset
    }

    /// Computes the offset that brings `index` into view under `align`, without applying it.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> Result<f64, IndexError> {
        let container_size = self.container_size();
        let mut cache = self.cache.borrow_mut();
        plan_offset(&mut cache, index, align, self.scroll_offset, container_size)
    }

    /// Scrolls to `index` under `align` and recomputes ranges immediately.
    ///
    /// Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> Result<f64, IndexError> {
        let offset = self.scroll_to_index_offset(index, align)?;
        self.apply_offset(offset, true);
        Ok(offset)
    }

    fn apply_offset(&mut self, offset: f64, requested: bool) {
        if offset == self.scroll_offset {
            return;
        }
        self.scroll_direction = if offset > self.scroll_offset {
            ScrollDirection::Forward
        } else {
            ScrollDirection::Backward
        };
        self.scroll_offset = offset;
        self.scroll_update_was_requested = requested;
        self.refresh();
    }

    /// The largest offset that still fills the viewport, based on the current estimate.
    pub fn max_scroll_offset(&self) -> f64 {
        (self.estimated_total_size() - self.container_size()).max(0.0)
    }

    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        offset.min(self.max_scroll_offset()).max(0.0)
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.last_scroll_event_ms = None;
        }
        self.publish();
    }

    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Resets `is_scrolling` once `is_scrolling_reset_delay_ms` passed since the last event.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    pub fn ranges(&self) -> ItemRanges {
        self.ranges
    }

    pub fn visible_range(&self) -> ItemRange {
        self.ranges.visible
    }

    pub fn overscan_range(&self) -> ItemRange {
        self.ranges.overscan
    }

    /// Computes ranges for an arbitrary offset/container size without changing any state
    /// (other than growing the bounds cache).
    pub fn ranges_for(&self, scroll_offset: f64, container_size: f64) -> ItemRanges {
        let mut cache = self.cache.borrow_mut();
        find_ranges(
            &mut cache,
            scroll_offset,
            container_size,
            self.options.overscan_count,
        )
    }

    pub fn bounds(&self, index: usize) -> Result<Bounds, IndexError> {
        self.cache.borrow_mut().get(index)
    }

    /// Seeds known bounds for `index`, dropping cached entries after it.
    pub fn seed_bounds(&mut self, index: usize, bounds: Bounds) -> Result<(), IndexError> {
        self.cache.get_mut().set(index, bounds)?;
        self.refresh();
        Ok(())
    }

    /// Size of the scrollable content. Approximate for per-item sizes, see
    /// [`Self::is_estimate_exact`].
    pub fn estimated_total_size(&self) -> f64 {
        estimated_total_size(&mut self.cache.borrow_mut())
    }

    pub fn is_estimate_exact(&self) -> bool {
        is_estimate_exact(&self.cache.borrow())
    }

    /// Number of items whose bounds are currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Calls `f` for every item in the overscan range, in index order.
    pub fn for_each_item(&self, mut f: impl FnMut(VirtualItem)) {
        for index in self.ranges.overscan.iter() {
            // The borrow is released before `f` runs, so `f` may query the virtualizer.
            let bounds = self.cache.borrow_mut().get(index);
            if let Ok(bounds) = bounds {
                f(VirtualItem { index, bounds });
            }
        }
    }

    /// Collects the overscan items into `out` (clears `out` first).
    pub fn collect_items(&self, out: &mut Vec<VirtualItem>) {
        out.clear();
        out.reserve(self.ranges.overscan.len());
        self.for_each_item(|item| out.push(item));
    }

    /// Batches multiple updates into a single round of notifications.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.batch_depth = self.batch_depth.saturating_add(1);

        f(self);

        debug_assert!(self.batch_depth > 0, "batch_depth underflow");
        self.batch_depth = self.batch_depth.saturating_sub(1);
        if self.batch_depth == 0 && core::mem::take(&mut self.publish_pending) {
            self.publish_now();
        }
    }

    fn rebuild(&mut self) {
        ldebug!(
            item_count = self.options.item_count,
            constant_size = ?self.resolved_size.constant(),
            "rebuild bounds cache"
        );
        *self.cache.get_mut() = CachedBounds::new(
            self.options.item_count,
            self.resolved_size.clone(),
            self.options.item_props.clone(),
        );
        // A shrunk collection must not keep an offset past its end.
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
        self.refresh();
    }

    fn refresh(&mut self) {
        let container_size = self.container_size();
        self.ranges = find_ranges(
            self.cache.get_mut(),
            self.scroll_offset,
            container_size,
            self.options.overscan_count,
        );
        self.publish();
    }

    fn publish(&mut self) {
        if self.batch_depth > 0 {
            self.publish_pending = true;
            return;
        }
        self.publish_now();
    }

    fn publish_now(&mut self) {
        let next = Published {
            ranges: self.ranges,
            scroll: ScrollEvent {
                offset: self.scroll_offset,
                direction: self.scroll_direction,
                update_was_requested: self.scroll_update_was_requested,
            },
            is_scrolling: self.is_scrolling,
        };
        let Some(prev) = self.published.replace(next) else {
            self.emit(next, true, true);
            return;
        };
        if prev == next {
            return;
        }
        self.emit(next, prev.ranges != next.ranges, prev.scroll != next.scroll);
    }

    fn emit(&self, next: Published, ranges_changed: bool, scroll_changed: bool) {
        if ranges_changed && self.options.item_count > 0 {
            ltrace!(ranges = ?next.ranges, "items rendered");
            if let Some(cb) = &self.options.on_items_rendered {
                cb(next.ranges);
            }
        }
        if scroll_changed {
            if let Some(cb) = &self.options.on_scroll {
                cb(next.scroll);
            }
        }
        if let Some(cb) = &self.options.on_change {
            cb(self, next.is_scrolling);
        }
    }
}
