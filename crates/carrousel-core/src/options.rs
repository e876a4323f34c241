//! Carrousel configuration record.
//!
//! [`CarrouselOptions`] is fixed once a carrousel is built. It can be created
//! with the builder-style setters or parsed from the JSON wire format used by
//! host pages:
//!
//! ```json
//! { "slidesToScroll": 2, "slidesVisible": 3, "loop": true }
//! ```
//!
//! Missing fields take their defaults and unknown fields are ignored. Counts
//! may be written as any JSON number; fractional counts are truncated toward
//! zero, and counts below one are clamped to one, since a zero-width page has
//! no meaningful layout.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logging::targets;

/// Configuration for a carrousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawOptions")]
pub struct CarrouselOptions {
    slides_to_scroll: usize,
    slides_visible: usize,
    #[serde(rename = "loop")]
    looping: bool,
}

impl Default for CarrouselOptions {
    fn default() -> Self {
        Self {
            slides_to_scroll: 1,
            slides_visible: 1,
            looping: false,
        }
    }
}

impl CarrouselOptions {
    /// Create options with all defaults (scroll 1, show 1, no loop).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set how many slides `next`/`prev` advance by. Clamped to at least 1.
    pub fn with_slides_to_scroll(mut self, count: usize) -> Self {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        self.slides_to_scroll = clamp_count("slidesToScroll", count);
        self
    }

    /// Set how many slides are visible at once. Clamped to at least 1.
    pub fn with_slides_visible(mut self, count: usize) -> Self {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        self.slides_visible = clamp_count("slidesVisible", count);
        self
    }

    /// Enable or disable loop mode.
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Number of slides moved per `next`/`prev` call.
    pub fn slides_to_scroll(&self) -> usize {
        self.slides_to_scroll
    }

    /// Number of slides shown per page.
    pub fn slides_visible(&self) -> usize {
        self.slides_visible
    }

    /// Whether loop mode is enabled.
    ///
    /// Loop mode only affects control visibility; navigation always wraps.
    pub fn is_loop(&self) -> bool {
        self.looping
    }
}

/// Wire representation, accepting any number so bad counts can be clamped
/// instead of rejected.
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawOptions {
    slides_to_scroll: f64,
    slides_visible: f64,
    #[serde(rename = "loop")]
    looping: bool,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self {
            slides_to_scroll: 1.0,
            slides_visible: 1.0,
            looping: false,
        }
    }
}

impl From<RawOptions> for CarrouselOptions {
    fn from(raw: RawOptions) -> Self {
        Self {
            slides_to_scroll: clamp_count("slidesToScroll", truncate(raw.slides_to_scroll)),
            slides_visible: clamp_count("slidesVisible", truncate(raw.slides_visible)),
            looping: raw.looping,
        }
    }
}

/// Truncate toward zero; out-of-range values saturate.
fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

fn clamp_count(field: &str, value: i64) -> usize {
    if value < 1 {
        tracing::warn!(
            target: targets::OPTIONS,
            option = field,
            value,
            "count below 1, clamping to 1"
        );
        1
    } else {
        usize::try_from(value).unwrap_or(usize::MAX)
    }
}

static_assertions::assert_impl_all!(CarrouselOptions: Send, Sync);
