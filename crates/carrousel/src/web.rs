//! Browser DOM surface and page bootstrapping.
//!
//! [`DomSurface`] implements [`Surface`] over `web-sys`. The bootstrapping
//! helpers locate host elements, read per-element options from a
//! `data-carrousel` JSON attribute and keep mounted carrousels alive for the
//! lifetime of the page.
//!
//! ```ignore
//! use carrousel::web;
//!
//! web::on_document_ready(|| {
//!     if let Err(err) = web::mount_all_and_keep(".js-carrousel", Default::default()) {
//!         tracing::error!(%err, "failed to mount carrousels");
//!     }
//! })?;
//! ```

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use carrousel_core::logging::targets;
use carrousel_core::{CarrouselError, CarrouselOptions, Result};

use crate::surface::Surface;
use crate::widget::{Carrousel, SharedCarrousel};

/// Attribute holding per-element JSON options.
pub const OPTIONS_ATTRIBUTE: &str = "data-carrousel";

thread_local! {
    /// Carrousels mounted for the lifetime of the page.
    static MOUNTED: RefCell<Vec<SharedCarrousel<DomSurface>>> = const { RefCell::new(Vec::new()) };
}

fn js_error(operation: &str, err: JsValue) -> CarrouselError {
    CarrouselError::surface(operation, format!("{err:?}"))
}

/// A [`Surface`] backed by a browser document.
#[derive(Debug, Clone)]
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    /// Create a surface over the global window's document.
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| CarrouselError::surface("document", "no global document"))?;
        Ok(Self { document })
    }

    /// Create a surface over a specific document.
    pub fn with_document(document: Document) -> Self {
        Self { document }
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Surface for DomSurface {
    type Element = Element;

    fn create_div(&self, class: &str) -> Result<Element> {
        let div = self
            .document
            .create_element("div")
            .map_err(|err| js_error("create_element", err))?;
        div.class_list()
            .add_1(class)
            .map_err(|err| js_error("add_class", err))?;
        Ok(div)
    }

    fn children(&self, parent: &Element) -> Vec<Element> {
        let collection = parent.children();
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<()> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|err| js_error("append_child", err))
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) -> Result<()> {
        let html = element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| CarrouselError::surface("set_style", "element is not an HTMLElement"))?;
        html.style()
            .set_property(property, value)
            .map_err(|err| js_error("set_style", err))
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<()> {
        element
            .class_list()
            .add_1(class)
            .map_err(|err| js_error("add_class", err))
    }

    fn remove_class(&self, element: &Element, class: &str) -> Result<()> {
        element
            .class_list()
            .remove_1(class)
            .map_err(|err| js_error("remove_class", err))
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn on_click(&self, element: &Element, handler: Box<dyn Fn()>) -> Result<()> {
        let listener =
            Closure::wrap(Box::new(move |_: web_sys::Event| handler()) as Box<dyn FnMut(_)>);
        element
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(|err| js_error("add_event_listener", err))?;
        // Controls live as long as the page.
        listener.forget();
        Ok(())
    }
}

/// Read options from an element's `data-carrousel` attribute.
///
/// Elements without the attribute use `fallback`.
pub fn options_from_element(
    element: &Element,
    fallback: CarrouselOptions,
) -> Result<CarrouselOptions> {
    match element.get_attribute(OPTIONS_ATTRIBUTE) {
        Some(json) => CarrouselOptions::from_json(&json),
        None => Ok(fallback),
    }
}

/// Mount a carrousel on the first element matching `selector`.
pub fn mount_selector(
    selector: &str,
    options: CarrouselOptions,
) -> Result<SharedCarrousel<DomSurface>> {
    let surface = DomSurface::new()?;
    let host = surface
        .document
        .query_selector(selector)
        .map_err(|err| CarrouselError::invalid_host(selector, format!("{err:?}")))?
        .ok_or_else(|| CarrouselError::invalid_host(selector, "no element matches"))?;

    tracing::debug!(target: targets::WEB, selector, "mounting carrousel");
    Carrousel::mount(surface, host, options)
}

/// Mount one carrousel per element matching `selector`.
///
/// Each element's `data-carrousel` attribute overrides `fallback`.
pub fn mount_all(
    selector: &str,
    fallback: CarrouselOptions,
) -> Result<Vec<SharedCarrousel<DomSurface>>> {
    let surface = DomSurface::new()?;
    let nodes = surface
        .document
        .query_selector_all(selector)
        .map_err(|err| CarrouselError::invalid_host(selector, format!("{err:?}")))?;

    let mut mounted = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(host) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let options = options_from_element(&host, fallback)?;
        mounted.push(Carrousel::mount(surface.clone(), host, options)?);
    }

    tracing::debug!(target: targets::WEB, selector, count = mounted.len(), "mounted carrousels");
    Ok(mounted)
}

/// Mount every match of `selector` and keep the carrousels alive for the
/// lifetime of the page. Returns how many were mounted.
pub fn mount_all_and_keep(selector: &str, fallback: CarrouselOptions) -> Result<usize> {
    let mounted = mount_all(selector, fallback)?;
    let count = mounted.len();
    MOUNTED.with(|keep| keep.borrow_mut().extend(mounted));
    Ok(count)
}

/// Run `f` once the document has been parsed.
///
/// Runs immediately if the document is already past the loading state.
pub fn on_document_ready<F>(f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let surface = DomSurface::new()?;
    if surface.document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let callback = Closure::once_into_js(f);
    surface
        .document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|err| js_error("add_event_listener", err))
}

/// JavaScript entry point: mount every match of `selector` once the document
/// is ready.
#[wasm_bindgen(js_name = mountCarrousels)]
pub fn mount_carrousels(selector: String) -> std::result::Result<(), JsValue> {
    on_document_ready(move || {
        if let Err(err) = mount_all_and_keep(&selector, CarrouselOptions::default()) {
            tracing::error!(target: targets::WEB, %err, "failed to mount carrousels");
        }
    })
    .map_err(|err| JsValue::from_str(&err.to_string()))
}
