// Example: percentage item sizes follow the container size.
use listwindow::{Dimensions, ItemSize, Virtualizer, VirtualizerOptions};

fn main() -> Result<(), listwindow::Error> {
    let mut v = Virtualizer::new(
        VirtualizerOptions::new(50, ItemSize::percent("25%"))
            .with_initial_dimensions(Some(Dimensions::new(400.0, 300.0))),
    )?;
    println!("item 3 at 400px: {:?}", v.bounds(3)?);

    v.set_dimensions(Dimensions::new(1_000.0, 300.0))?;
    println!("item 3 at 1000px: {:?}", v.bounds(3)?);
    println!("visible={:?}", v.visible_range());

    // Without a known container size a percentage cannot be resolved.
    let err = Virtualizer::new(VirtualizerOptions::new(50, ItemSize::percent("25%"))).unwrap_err();
    println!("error: {err}");
    Ok(())
}
