//! Slide layout arithmetic.
//!
//! The track is made wide enough to hold every slide side by side while the
//! root clips it to `slides_visible` slides. With
//! `ratio = slide_count / slides_visible`:
//!
//! - track width is `ratio * 100` percent of the root
//! - each wrapper is `100 / slides_visible / ratio` percent of the track,
//!   which is `100 / slide_count`
//!
//! Moving to slide `i` shifts the track left by `i * 100 / slide_count`
//! percent of its own width.

/// Percent widths for the track and each slide wrapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideLayout {
    /// Track width as a percentage of the root.
    pub track_width: f64,
    /// Wrapper width as a percentage of the track.
    pub item_width: f64,
}

impl SlideLayout {
    /// Compute the layout for `slide_count` slides showing `slides_visible`
    /// at a time.
    ///
    /// `slides_visible` must be at least 1. With no slides the track collapses
    /// to zero width and there is no wrapper width to apply.
    pub fn compute(slide_count: usize, slides_visible: usize) -> Self {
        let ratio = slide_count as f64 / slides_visible as f64;
        let item_width = if slide_count == 0 {
            0.0
        } else {
            100.0 / slides_visible as f64 / ratio
        };

        Self {
            track_width: ratio * 100.0,
            item_width,
        }
    }

    /// Inline `width` value for the track.
    pub fn track_width_css(&self) -> String {
        percent(self.track_width)
    }

    /// Inline `width` value for each slide wrapper.
    pub fn item_width_css(&self) -> String {
        percent(self.item_width)
    }
}

/// Leftward shift of the track, in percent of its width, showing `index` first.
pub fn translation(index: usize, slide_count: usize) -> f64 {
    if slide_count == 0 {
        return 0.0;
    }
    index as f64 * 100.0 / slide_count as f64
}

/// Inline `transform` value showing `index` first.
pub fn transform_css(index: usize, slide_count: usize) -> String {
    format!(
        "translate3d({}, 0, 0)",
        percent(-translation(index, slide_count))
    )
}

fn percent(value: f64) -> String {
    // `-0` would otherwise render as "-0%".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}%")
}
