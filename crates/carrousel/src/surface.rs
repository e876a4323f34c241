//! Rendering surface abstraction.
//!
//! The carrousel never touches a document tree directly. Every element it
//! creates and every attribute it changes goes through a [`Surface`], so the
//! layout and navigation logic runs unchanged against a browser DOM
//! (`DomSurface`, behind the `web` feature) or against the headless
//! [`MemorySurface`](crate::MemorySurface).
//!
//! Surfaces use interior mutability: all methods take `&self`, and elements
//! are cheap handles that can be cloned freely.

use carrousel_core::Result;

/// A capability for creating and mutating elements.
pub trait Surface {
    /// Handle to an element owned by this surface.
    type Element: Clone;

    /// Create a detached `div` carrying a single class.
    fn create_div(&self, class: &str) -> Result<Self::Element>;

    /// The current child elements of `parent`, in document order.
    fn children(&self, parent: &Self::Element) -> Vec<Self::Element>;

    /// Append `child` to `parent`, detaching it from its previous parent.
    ///
    /// The element is moved, never copied, so its content and any listeners
    /// attached to it survive.
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<()>;

    /// Set an inline style property.
    fn set_style(&self, element: &Self::Element, property: &str, value: &str) -> Result<()>;

    /// Add a class. Adding a class that is already present is a no-op.
    fn add_class(&self, element: &Self::Element, class: &str) -> Result<()>;

    /// Remove a class. Removing a missing class is a no-op.
    fn remove_class(&self, element: &Self::Element, class: &str) -> Result<()>;

    /// Check whether an element carries a class.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Invoke `handler` whenever `element` is clicked.
    fn on_click(&self, element: &Self::Element, handler: Box<dyn Fn()>) -> Result<()>;

    /// Add `class` when `enabled` is true, remove it otherwise.
    fn toggle_class(&self, element: &Self::Element, class: &str, enabled: bool) -> Result<()> {
        if enabled {
            self.add_class(element, class)
        } else {
            self.remove_class(element, class)
        }
    }
}
