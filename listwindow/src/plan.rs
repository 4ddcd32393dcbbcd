use crate::estimate::estimated_total_size;
use crate::{Align, CachedBounds, IndexError};

/// Computes the scroll offset that brings `index` into view under `align`.
///
/// `current_scroll_offset` is only consulted by [`Align::Auto`] and [`Align::Smart`]. The result
/// is clamped to `0..=estimated_total_size - container_size`.
pub fn plan_offset<P>(
    cache: &mut CachedBounds<P>,
    index: usize,
    align: Align,
    current_scroll_offset: f64,
    container_size: f64,
) -> Result<f64, IndexError> {
    // Measure the target first so the estimate covers it.
    let bounds = cache.get(index)?;
    let total = estimated_total_size(cache);
    let last_offset = (total - container_size).max(0.0);

    // Item flush with the start / end of the viewport.
    let max_offset = bounds.offset.min(last_offset).max(0.0);
    let min_offset = (bounds.offset - container_size + bounds.size).max(0.0);
    let in_view = current_scroll_offset >= min_offset && current_scroll_offset <= max_offset;

    let align = match align {
        Align::Smart if in_view => Align::Auto,
        Align::Smart => Align::Center,
        other => other,
    };

    let offset = match align {
        Align::Start => max_offset,
        Align::End => min_offset,
        Align::Center => {
            let middle = bounds.offset + bounds.size / 2.0 - container_size / 2.0;
            if middle <= 0.0 {
                0.0
            } else if middle >= last_offset {
                last_offset
            } else {
                middle
            }
        }
        Align::Auto | Align::Smart => {
            if in_view {
                current_scroll_offset
            } else if current_scroll_offset < min_offset {
                min_offset
            } else {
                max_offset
            }
        }
    };
    ltrace!(index, ?align, offset, "plan_offset");
    Ok(offset)
}
