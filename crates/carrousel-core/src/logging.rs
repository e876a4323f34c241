//! Logging facilities for Carrousel.
//!
//! Carrousel uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("carrousel=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "carrousel_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "carrousel_core::signal";
    /// Options parsing target.
    pub const OPTIONS: &str = "carrousel_core::options";
    /// Widget construction and navigation target.
    pub const WIDGET: &str = "carrousel::widget";
    /// Rendering surface target.
    pub const SURFACE: &str = "carrousel::surface";
    /// Browser bootstrapping target.
    pub const WEB: &str = "carrousel::web";
}
