//! A paginated slideshow widget.
//!
//! Carrousel turns the children of a host element into a horizontally
//! scrolling, paginated view with next/previous controls:
//!
//! - **Layout**: a track sized to hold every slide, clipped to a page
//! - **Navigation**: `next`, `prev` and `goto_slide`, wrapping at both ends
//! - **Controls**: hidden modifiers on the controls at either end (unless looping)
//! - **Signals**: synchronous movement notification, in registration order
//!
//! All element work goes through a [`Surface`]. [`MemorySurface`] runs the
//! widget headlessly; the `web` feature adds `DomSurface` and page
//! bootstrapping over `web-sys`.
//!
//! # Example
//!
//! ```
//! use carrousel::{Carrousel, CarrouselOptions, MemorySurface, NavControl, Surface, classes};
//!
//! let surface = MemorySurface::new();
//! let host = surface.host_with_slides(["1", "2", "3", "4", "5", "6", "7"]);
//! let options = CarrouselOptions::new().with_slides_visible(3).with_slides_to_scroll(2);
//!
//! let carrousel = Carrousel::mount(surface.clone(), host, options)?;
//! let next = *carrousel.borrow().control(NavControl::Next);
//!
//! surface.click(next);
//! surface.click(next);
//! assert_eq!(carrousel.borrow().current_slide(), 4);
//! assert!(surface.has_class(&next, classes::NEXT_HIDDEN));
//! # Ok::<(), carrousel::CarrouselError>(())
//! ```

pub mod classes;
pub mod layout;
mod memory;
pub mod navigation;
mod surface;
mod widget;

#[cfg(feature = "web")]
pub mod web;

pub use carrousel_core::{CarrouselError, CarrouselOptions, Result, logging};
pub use memory::{MemorySurface, NodeId, TreeStyle};
pub use navigation::{NavControl, NavState};
pub use surface::Surface;
pub use widget::{Carrousel, CarrouselBuilder, SharedCarrousel};
