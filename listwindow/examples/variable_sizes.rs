// Example: per-item sizes and how the total size estimate converges while scrolling.
use listwindow::{Align, Dimensions, ItemSize, Virtualizer, VirtualizerOptions};

#[derive(Clone, PartialEq)]
struct Rows {
    heights: Vec<f64>,
}

fn main() -> Result<(), listwindow::Error> {
    let rows = Rows {
        heights: (0..10_000).map(|i| 16.0 + (i % 7) as f64 * 4.0).collect(),
    };
    let mut v = Virtualizer::new(
        VirtualizerOptions::new_with_props(
            rows.heights.len(),
            ItemSize::dynamic(|i, rows: &Rows| rows.heights[i]),
            rows,
        )
        .with_initial_dimensions(Some(Dimensions::new(600.0, 800.0)))
        .with_on_items_rendered(Some(|r: listwindow::ItemRanges| {
            println!("rendered overscan={:?}", r.overscan)
        })),
    )?;

    for offset in [0.0, 5_000.0, 50_000.0] {
        v.set_scroll_offset(offset);
        println!(
            "offset={offset} estimate={:.1} exact={} cached={}",
            v.estimated_total_size(),
            v.is_estimate_exact(),
            v.cached_len()
        );
    }

    let off = v.scroll_to_index(9_999, Align::Smart)?;
    println!(
        "scroll_to_index(9_999, Smart) -> {off}, estimate={:.1} exact={}",
        v.estimated_total_size(),
        v.is_estimate_exact()
    );
    Ok(())
}
