//! Index resolution and control visibility.
//!
//! Every move funnels through [`resolve_target`]. Two independent rules wrap
//! out-of-range targets:
//!
//! 1. A negative target jumps to the last full page.
//! 2. A target past the end, or any forward move made while the last full
//!    page is already showing, wraps to the first slide.
//!
//! Rule 2 does not consult loop mode. Loop mode only decides whether the
//! controls are ever hidden (see [`NavState`]); a forward move from the last
//! page wraps even when the next control is hidden.

use carrousel_core::CarrouselOptions;

/// Whether a slide exists at `position`.
pub fn has_slide_at(position: usize, slide_count: usize) -> bool {
    position < slide_count
}

/// Resolve a requested slide index against the current position.
///
/// The result always satisfies `0 <= index < slide_count` when there is at
/// least one slide, and is 0 otherwise.
pub fn resolve_target(
    target: isize,
    current: usize,
    slide_count: usize,
    slides_visible: usize,
) -> usize {
    if target < 0 {
        // Fewer slides than a page: the last full page starts at 0.
        return slide_count.saturating_sub(slides_visible);
    }

    let target = target.unsigned_abs();
    let last_page_showing = !has_slide_at(current.saturating_add(slides_visible), slide_count);
    if target >= slide_count || (target > current && last_page_showing) {
        0
    } else {
        target
    }
}

/// Which navigation controls carry their hidden modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    /// Previous control is hidden.
    pub prev_hidden: bool,
    /// Next control is hidden.
    pub next_hidden: bool,
}

impl NavState {
    /// Derive control visibility for a carrousel showing `index` first.
    ///
    /// In loop mode neither control is ever hidden.
    pub fn derive(index: usize, slide_count: usize, options: &CarrouselOptions) -> Self {
        if options.is_loop() {
            return Self::default();
        }

        Self {
            prev_hidden: index == 0,
            next_hidden: !has_slide_at(
                index.saturating_add(options.slides_visible()),
                slide_count,
            ),
        }
    }
}

/// A navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavControl {
    /// Advance by `slides_to_scroll`.
    Next,
    /// Go back by `slides_to_scroll`.
    Prev,
}
