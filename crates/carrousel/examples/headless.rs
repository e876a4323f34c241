//! Headless carrousel demo.
//!
//! Builds the two carrousels of the reference page (a paged one and a looping
//! one) on an in-memory surface, clicks through them and prints the tree.
//!
//! Run with: `RUST_LOG=carrousel=trace cargo run -p carrousel --example headless`

use carrousel::{
    Carrousel, CarrouselOptions, MemorySurface, NavControl, NodeId, Result, SharedCarrousel,
    Surface, classes,
};
use tracing_subscriber::EnvFilter;

fn slides(surface: &MemorySurface) -> NodeId {
    surface.host_with_slides((1..=7).map(|n| format!("Slide {n}")))
}

fn describe(surface: &MemorySurface, carrousel: &SharedCarrousel<MemorySurface>) -> String {
    let carrousel = carrousel.borrow();
    let hidden = |control: NavControl, class: &str| {
        if surface.has_class(carrousel.control(control), class) {
            "hidden"
        } else {
            "shown"
        }
    };
    format!(
        "slide {} (prev {}, next {})",
        carrousel.current_slide(),
        hidden(NavControl::Prev, classes::PREV_HIDDEN),
        hidden(NavControl::Next, classes::NEXT_HIDDEN),
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let surface = MemorySurface::new();
    let paged = CarrouselOptions::new()
        .with_slides_visible(3)
        .with_slides_to_scroll(2);

    let carrousel1 = Carrousel::mount(surface.clone(), slides(&surface), paged)?;
    let carrousel2 = Carrousel::mount(surface.clone(), slides(&surface), paged.with_loop(true))?;

    carrousel1
        .borrow()
        .on_move(|index| println!("carrousel1 moved to {index}"));

    for (name, carrousel) in [("carrousel1", &carrousel1), ("carrousel2", &carrousel2)] {
        println!("{name}: {}", describe(&surface, carrousel));
        let next = *carrousel.borrow().control(NavControl::Next);
        for _ in 0..3 {
            surface.click(next);
            println!("{name}: {}", describe(&surface, carrousel));
        }
    }

    println!();
    print!("{}", surface.format_tree(*carrousel1.borrow().host()));
    Ok(())
}
