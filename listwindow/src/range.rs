use crate::{CachedBounds, ItemRange, ItemRanges};

/// Computes the visible and overscanned item ranges for a viewport.
///
/// The visible range holds every item with at least one pixel inside
/// `scroll_offset..scroll_offset + container_size`; for a non-empty collection it always holds
/// at least one item. The overscan range pads it by `overscan_count` items on both sides.
///
/// The cache is grown only as far as the viewport's end; memoized entries are binary searched.
pub fn find_ranges<P>(
    cache: &mut CachedBounds<P>,
    scroll_offset: f64,
    container_size: f64,
    overscan_count: usize,
) -> ItemRanges {
    let count = cache.item_count();
    if count == 0 {
        return ItemRanges::EMPTY;
    }

    let start = cache.index_at_offset(scroll_offset);
    let stop = cache.last_index_before(start, scroll_offset.max(0.0) + container_size.max(0.0));

    let visible = ItemRange::inclusive(start, stop);
    let overscan = ItemRange::inclusive(
        start.saturating_sub(overscan_count),
        stop.saturating_add(overscan_count).min(count - 1),
    );
    ItemRanges { visible, overscan }
}
