//! Core systems for Carrousel.
//!
//! This crate provides the pieces of the carrousel widget that do not touch a
//! rendering surface:
//!
//! - **Signals**: Ordered, synchronous movement notification
//! - **Options**: The configuration record and its JSON wire format
//! - **Errors**: The error type shared by every Carrousel crate
//! - **Logging**: `tracing` targets for filtering by subsystem
//!
//! # Signal Example
//!
//! ```
//! use carrousel_core::Signal;
//!
//! let moved = Signal::<usize>::new();
//!
//! let conn_id = moved.connect(|index| {
//!     println!("Moved to slide {}", index);
//! });
//!
//! moved.emit(2);
//! moved.disconnect(conn_id);
//! ```
//!
//! # Options Example
//!
//! ```
//! use carrousel_core::CarrouselOptions;
//!
//! let options = CarrouselOptions::from_json(r#"{"slidesVisible": 3, "slidesToScroll": 2}"#)?;
//! assert_eq!(options.slides_visible(), 3);
//! assert_eq!(options.slides_to_scroll(), 2);
//! assert!(!options.is_loop());
//! # Ok::<(), carrousel_core::CarrouselError>(())
//! ```

mod error;
pub mod logging;
pub mod options;
pub mod signal;

pub use error::{CarrouselError, Result};
pub use options::CarrouselOptions;
pub use signal::{ConnectionGuard, ConnectionId, LocalSignal, Signal};
