// Example: fixed-size list, visible ranges and scroll-to-index.
use listwindow::{Align, Dimensions, Virtualizer, VirtualizerOptions};

fn main() -> Result<(), listwindow::Error> {
    let mut v = Virtualizer::new(
        VirtualizerOptions::new(1_000_000, 20.0)
            .with_initial_dimensions(Some(Dimensions::new(400.0, 320.0))),
    )?;
    v.set_scroll_offset(123_456.0);

    let mut items = Vec::new();
    v.collect_items(&mut items);
    println!("estimated_total_size={}", v.estimated_total_size());
    println!("ranges={:?}", v.ranges());
    println!("first_item={:?}", items.first());

    let off = v.scroll_to_index(999_999, Align::End)?;
    println!("after scroll_to_index: offset={off} visible={:?}", v.visible_range());
    Ok(())
}
