use crate::CachedBounds;

/// Estimated scrollable extent of the whole collection.
///
/// Exact for constant sizes. For per-item sizes this extrapolates the average size of the
/// memoized prefix to the whole collection, so it converges as more of the list is visited.
/// The prefix is never sampled beyond what has been scrolled through; lists whose item sizes
/// drift towards the end are under- or over-estimated until they are reached.
pub fn estimated_total_size<P>(cache: &mut CachedBounds<P>) -> f64 {
    let count = cache.item_count();
    if count == 0 {
        return 0.0;
    }
    if let Some(size) = cache.constant_size() {
        return count as f64 * size;
    }

    cache.grow_to(0);
    let Some(last) = cache.last_memoized() else {
        return 0.0;
    };
    let average = last.end() / cache.len() as f64;
    count as f64 * average
}

/// Whether [`estimated_total_size`] is currently exact for `cache`.
pub fn is_estimate_exact<P>(cache: &CachedBounds<P>) -> bool {
    cache.item_count() == 0 || cache.constant_size().is_some() || cache.len() == cache.item_count()
}
