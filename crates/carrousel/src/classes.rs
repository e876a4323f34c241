//! Class names applied to the generated structure.
//!
//! These names are the contract with stylesheets: the widget only toggles
//! them and never styles anything beyond inline `width` and `transform`.

/// Root element wrapping the whole carrousel.
pub const ROOT: &str = "carrousel";
/// Track holding every slide wrapper side by side.
pub const TRACK: &str = "carrousel__container";
/// Wrapper around one original child.
pub const ITEM: &str = "carrousel__item";
/// Next control.
pub const NEXT: &str = "carrousel__next";
/// Previous control.
pub const PREV: &str = "carrousel__prev";
/// Modifier on the next control when no further page exists.
pub const NEXT_HIDDEN: &str = "carrousel__next--hidden";
/// Modifier on the previous control at the first slide.
pub const PREV_HIDDEN: &str = "carrousel__prev--hidden";
