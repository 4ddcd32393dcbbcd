use listwindow::{Align, Axis, Dimensions, Direction, VirtualizerOptions};
use listwindow_adapter::{
    Controller, MemorySurface, RtlOffsetType, ScrollBehavior, ScrollMetrics, ScrollToIndex,
};

fn main() -> Result<(), listwindow::Error> {
    // Example: a horizontal right-to-left list on a surface that reports negative scroll offsets.
    //
    // An adapter would:
    // - forward the container's scroll events to on_scroll(now_ms)
    // - forward resize observer reports to on_resize(dimensions)
    // - call tick(now_ms) from a timer to reset is_scrolling
    // - render using the virtualizer's ranges and bounds
    let options = VirtualizerOptions::new(10_000, 80.0)
        .with_axis(Axis::Horizontal)
        .with_direction(Direction::Rtl)
        .with_initial_dimensions(Some(Dimensions::new(120.0, 640.0)))
        .with_on_items_rendered(Some(|ranges: listwindow::ItemRanges| {
            println!("rendered visible={:?}", ranges.visible);
        }));
    let surface = MemorySurface::new(ScrollMetrics::new(800_000.0, 640.0))
        .with_rtl(RtlOffsetType::Negative);
    let mut c = Controller::new(options, surface)?;
    println!("convention={:?}", c.direction_adapter().rtl_offset_type());

    let target = c.scroll_to_index(
        ScrollToIndex::new(2_000)
            .with_align(Align::Center)
            .with_behavior(ScrollBehavior::Smooth),
    )?;
    println!("target_offset={target} raw={}", c.surface().scroll_start);

    // The surface finished scrolling; report it back.
    let applied = c.on_scroll(16);
    println!("applied={applied} visible={:?}", c.virtualizer().visible_range());

    c.on_resize(Dimensions::new(120.0, 960.0))?;
    println!("after resize: visible={:?}", c.virtualizer().visible_range());

    c.tick(400);
    println!("is_scrolling={}", c.virtualizer().is_scrolling());
    Ok(())
}
