//! The carrousel widget controller.
//!
//! [`Carrousel`] restructures a host element into a paginated slideshow:
//!
//! ```text
//! host
//! └── .carrousel
//!     ├── .carrousel__container      (track, translated on each move)
//!     │   ├── .carrousel__item       (one wrapper per original child)
//!     │   └── ...
//!     ├── .carrousel__next
//!     └── .carrousel__prev
//! ```
//!
//! The original children are moved into the wrappers, never recreated.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use carrousel::{Carrousel, CarrouselOptions, MemorySurface};
//!
//! let surface = MemorySurface::new();
//! let host = surface.host_with_slides(["1", "2", "3", "4", "5", "6", "7"]);
//!
//! let last = Arc::new(AtomicUsize::new(usize::MAX));
//! let last_clone = last.clone();
//!
//! let mut carrousel = Carrousel::builder(surface, host)
//!     .options(CarrouselOptions::new().with_slides_visible(3).with_slides_to_scroll(2))
//!     .on_move(move |&index| last_clone.store(index, Ordering::SeqCst))
//!     .build()?;
//! assert_eq!(last.load(Ordering::SeqCst), 0);
//!
//! carrousel.next();
//! assert_eq!(carrousel.current_slide(), 2);
//! assert_eq!(last.load(Ordering::SeqCst), 2);
//! # Ok::<(), carrousel::CarrouselError>(())
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use carrousel_core::logging::targets;
use carrousel_core::{CarrouselOptions, LocalSignal, Result};

use crate::classes;
use crate::layout::{self, SlideLayout};
use crate::navigation::{self, NavControl, NavState};
use crate::surface::Surface;

/// Shared handle to a carrousel whose controls are wired to click handlers.
pub type SharedCarrousel<S> = Rc<RefCell<Carrousel<S>>>;

/// A paginated slideshow over a rendering surface.
///
/// # Signals
///
/// Movement observers registered with [`on_move`](Self::on_move) receive the
/// new leftmost slide index after every move, in registration order.
pub struct Carrousel<S: Surface> {
    surface: S,
    host: S::Element,
    options: CarrouselOptions,

    root: S::Element,
    track: S::Element,
    items: Vec<S::Element>,
    next_button: S::Element,
    prev_button: S::Element,

    current_slide: usize,

    /// Emitted with the new index after each move.
    moved: LocalSignal<usize>,
}

impl<S: Surface> Carrousel<S> {
    /// Build a carrousel inside `host` with the given options.
    ///
    /// Observers registered afterwards see moves but not the initial
    /// notification for slide 0; use [`builder`](Self::builder) to register
    /// them up front.
    pub fn new(surface: S, host: S::Element, options: CarrouselOptions) -> Result<Self> {
        Self::builder(surface, host).options(options).build()
    }

    /// Start configuring a carrousel inside `host`.
    pub fn builder(surface: S, host: S::Element) -> CarrouselBuilder<S> {
        CarrouselBuilder {
            surface,
            host,
            options: CarrouselOptions::default(),
            moved: LocalSignal::new(),
        }
    }

    fn construct(
        surface: S,
        host: S::Element,
        options: CarrouselOptions,
        moved: LocalSignal<usize>,
    ) -> Result<Self> {
        // Snapshot before the root is appended to the host.
        let children = surface.children(&host);
        let slide_layout = SlideLayout::compute(children.len(), options.slides_visible());

        let root = surface.create_div(classes::ROOT)?;
        let track = surface.create_div(classes::TRACK)?;
        surface.set_style(&track, "width", &slide_layout.track_width_css())?;
        surface.append_child(&root, &track)?;
        surface.append_child(&host, &root)?;

        let item_width = slide_layout.item_width_css();
        let mut items = Vec::with_capacity(children.len());
        for child in &children {
            let item = surface.create_div(classes::ITEM)?;
            surface.set_style(&item, "width", &item_width)?;
            surface.append_child(&item, child)?;
            surface.append_child(&track, &item)?;
            items.push(item);
        }

        let next_button = surface.create_div(classes::NEXT)?;
        let prev_button = surface.create_div(classes::PREV)?;
        surface.append_child(&root, &next_button)?;
        surface.append_child(&root, &prev_button)?;

        tracing::debug!(
            target: targets::WIDGET,
            slide_count = items.len(),
            slides_visible = options.slides_visible(),
            slides_to_scroll = options.slides_to_scroll(),
            looping = options.is_loop(),
            track_width = slide_layout.track_width,
            "carrousel constructed"
        );

        let carrousel = Self {
            surface,
            host,
            options,
            root,
            track,
            items,
            next_button,
            prev_button,
            current_slide: 0,
            moved,
        };
        carrousel.sync_controls()?;
        carrousel.moved.emit(0);
        Ok(carrousel)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Advance by `slides_to_scroll`, wrapping to the start past the last page.
    pub fn next(&mut self) {
        let target = to_isize(self.current_slide).saturating_add(self.scroll_step());
        self.goto_slide(target);
    }

    /// Go back by `slides_to_scroll`, wrapping to the last page before the start.
    pub fn prev(&mut self) {
        let target = to_isize(self.current_slide).saturating_sub(self.scroll_step());
        self.goto_slide(target);
    }

    /// Dispatch a navigation control as if it had been clicked.
    pub fn activate(&mut self, control: NavControl) {
        match control {
            NavControl::Next => self.next(),
            NavControl::Prev => self.prev(),
        }
    }

    /// Move so that `target` is the leftmost visible slide.
    ///
    /// Out-of-range targets are normalized, never rejected: negative targets
    /// jump to the last full page, and targets past the end (or any forward
    /// move from the last full page) wrap to the first slide. Observers are
    /// notified on every call, even if the index did not change.
    pub fn goto_slide(&mut self, target: isize) {
        let slide_count = self.items.len();
        let index = navigation::resolve_target(
            target,
            self.current_slide,
            slide_count,
            self.options.slides_visible(),
        );
        tracing::trace!(target: targets::WIDGET, requested = target, index, "moving to slide");

        let transform = layout::transform_css(index, slide_count);
        if let Err(err) = self.surface.set_style(&self.track, "transform", &transform) {
            tracing::warn!(target: targets::WIDGET, %err, "failed to translate track");
        }
        self.current_slide = index;

        if let Err(err) = self.sync_controls() {
            tracing::warn!(target: targets::WIDGET, %err, "failed to update controls");
        }
        self.moved.emit(index);
    }

    /// Register a movement observer.
    ///
    /// The observer lives as long as the carrousel and is called with the new
    /// index after every move. Observers run on the carrousel's thread, so they
    /// may capture `Rc`, `Cell` or surface elements.
    pub fn on_move<F>(&self, observer: F)
    where
        F: Fn(&usize) + 'static,
    {
        self.moved.connect(observer);
    }

    /// Apply hidden modifiers to the controls for the current index.
    fn sync_controls(&self) -> Result<()> {
        if self.options.is_loop() {
            return Ok(());
        }

        let state = self.nav_state();
        self.surface
            .toggle_class(&self.prev_button, classes::PREV_HIDDEN, state.prev_hidden)?;
        self.surface
            .toggle_class(&self.next_button, classes::NEXT_HIDDEN, state.next_hidden)?;
        Ok(())
    }

    fn scroll_step(&self) -> isize {
        to_isize(self.options.slides_to_scroll())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Index of the leftmost visible slide.
    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.items.len()
    }

    /// The options this carrousel was built with.
    pub fn options(&self) -> &CarrouselOptions {
        &self.options
    }

    /// Control visibility for the current index.
    pub fn nav_state(&self) -> NavState {
        NavState::derive(self.current_slide, self.items.len(), &self.options)
    }

    /// The rendering surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The host element the carrousel was built in.
    pub fn host(&self) -> &S::Element {
        &self.host
    }

    /// The root `.carrousel` element.
    pub fn root(&self) -> &S::Element {
        &self.root
    }

    /// The `.carrousel__container` track.
    pub fn track(&self) -> &S::Element {
        &self.track
    }

    /// The slide wrappers, in slide order.
    pub fn items(&self) -> &[S::Element] {
        &self.items
    }

    /// The element for a navigation control.
    pub fn control(&self, control: NavControl) -> &S::Element {
        match control {
            NavControl::Next => &self.next_button,
            NavControl::Prev => &self.prev_button,
        }
    }
}

impl<S: Surface + 'static> Carrousel<S> {
    /// Build a carrousel and wire its controls to click handlers.
    ///
    /// The handlers hold weak references, so dropping the returned handle
    /// leaves the controls inert.
    pub fn mount(
        surface: S,
        host: S::Element,
        options: CarrouselOptions,
    ) -> Result<SharedCarrousel<S>> {
        Self::builder(surface, host).options(options).mount()
    }

    fn wire_controls(shared: &SharedCarrousel<S>) -> Result<()> {
        let carrousel = shared.borrow();
        for control in [NavControl::Next, NavControl::Prev] {
            let weak = Rc::downgrade(shared);
            carrousel.surface.on_click(
                carrousel.control(control),
                Box::new(move || {
                    if let Some(carrousel) = weak.upgrade() {
                        carrousel.borrow_mut().activate(control);
                    }
                }),
            )?;
        }
        Ok(())
    }
}

impl<S: Surface> std::fmt::Debug for Carrousel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carrousel")
            .field("options", &self.options)
            .field("slide_count", &self.items.len())
            .field("current_slide", &self.current_slide)
            .field("moved", &self.moved)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Carrousel`].
///
/// Observers registered here are connected before construction finishes and
/// therefore receive the initial notification for slide 0.
pub struct CarrouselBuilder<S: Surface> {
    surface: S,
    host: S::Element,
    options: CarrouselOptions,
    moved: LocalSignal<usize>,
}

impl<S: Surface> CarrouselBuilder<S> {
    /// Set the options.
    pub fn options(mut self, options: CarrouselOptions) -> Self {
        self.options = options;
        self
    }

    /// Register a movement observer.
    pub fn on_move<F>(self, observer: F) -> Self
    where
        F: Fn(&usize) + 'static,
    {
        self.moved.connect(observer);
        self
    }

    /// Build the carrousel without wiring click handlers.
    pub fn build(self) -> Result<Carrousel<S>> {
        Carrousel::construct(self.surface, self.host, self.options, self.moved)
    }
}

impl<S: Surface + 'static> CarrouselBuilder<S> {
    /// Build the carrousel and wire its controls to click handlers.
    pub fn mount(self) -> Result<SharedCarrousel<S>> {
        let shared = Rc::new(RefCell::new(self.build()?));
        Carrousel::wire_controls(&shared)?;
        Ok(shared)
    }
}

fn to_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySurface;
    use std::cell::Cell;
    use std::sync::{Arc, Mutex};

    /// Collects `(observer, index)` pairs in call order.
    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<(&'static str, usize)>>>);

    impl Recorder {
        fn observer(&self, name: &'static str) -> impl Fn(&usize) + Send + Sync + 'static {
            let log = self.0.clone();
            move |&index| log.lock().unwrap().push((name, index))
        }

        fn calls(&self) -> Vec<(&'static str, usize)> {
            self.0.lock().unwrap().clone()
        }
    }

    fn seven_slides(options: CarrouselOptions) -> (MemorySurface, Carrousel<MemorySurface>) {
        let surface = MemorySurface::new();
        let host = surface.host_with_slides(["1", "2", "3", "4", "5", "6", "7"]);
        let carrousel = Carrousel::new(surface.clone(), host, options).unwrap();
        (surface, carrousel)
    }

    fn paged() -> CarrouselOptions {
        CarrouselOptions::new()
            .with_slides_visible(3)
            .with_slides_to_scroll(2)
    }

    #[test]
    fn test_wrap_forward() {
        let (_, mut carrousel) = seven_slides(paged());
        assert_eq!(carrousel.current_slide(), 0);

        carrousel.next();
        assert_eq!(carrousel.current_slide(), 2);
        carrousel.next();
        assert_eq!(carrousel.current_slide(), 4);
        carrousel.next();
        assert_eq!(carrousel.current_slide(), 0);
    }

    #[test]
    fn test_wrap_backward() {
        let (_, mut carrousel) = seven_slides(paged());
        carrousel.prev();
        assert_eq!(carrousel.current_slide(), 4);
        carrousel.prev();
        assert_eq!(carrousel.current_slide(), 2);
    }

    #[test]
    fn test_goto_slide_normalizes() {
        let (_, mut carrousel) = seven_slides(paged());
        carrousel.goto_slide(-10);
        assert_eq!(carrousel.current_slide(), 4);
        carrousel.goto_slide(3);
        assert_eq!(carrousel.current_slide(), 3);
        carrousel.goto_slide(7);
        assert_eq!(carrousel.current_slide(), 0);
        carrousel.goto_slide(isize::MAX);
        assert_eq!(carrousel.current_slide(), 0);
    }

    #[test]
    fn test_loop_mode_wraps_the_same_way() {
        let (_, mut carrousel) = seven_slides(paged().with_loop(true));
        carrousel.next();
        carrousel.next();
        carrousel.next();
        assert_eq!(carrousel.current_slide(), 0);
        carrousel.prev();
        assert_eq!(carrousel.current_slide(), 4);
    }

    #[test]
    fn test_track_transform() {
        let (surface, mut carrousel) = seven_slides(CarrouselOptions::new());
        assert_eq!(surface.style(*carrousel.track(), "transform"), None);

        carrousel.goto_slide(0);
        assert_eq!(
            surface.style(*carrousel.track(), "transform").as_deref(),
            Some("translate3d(0%, 0, 0)")
        );

        let surface = MemorySurface::new();
        let host = surface.host_with_slides(["a", "b", "c", "d"]);
        let mut carrousel = Carrousel::new(surface.clone(), host, CarrouselOptions::new()).unwrap();
        carrousel.goto_slide(2);
        assert_eq!(
            surface.style(*carrousel.track(), "transform").as_deref(),
            Some("translate3d(-50%, 0, 0)")
        );
    }

    #[test]
    fn test_observers_in_registration_order() {
        let recorder = Recorder::default();
        let surface = MemorySurface::new();
        let host = surface.host_with_slides(["1", "2", "3", "4", "5", "6", "7"]);

        let mut carrousel = Carrousel::builder(surface, host)
            .options(paged())
            .on_move(recorder.observer("first"))
            .on_move(recorder.observer("second"))
            .build()
            .unwrap();
        assert_eq!(recorder.calls(), vec![("first", 0), ("second", 0)]);

        carrousel.goto_slide(2);
        assert_eq!(
            recorder.calls(),
            vec![("first", 0), ("second", 0), ("first", 2), ("second", 2)]
        );
    }

    #[test]
    fn test_late_observer_misses_initial_notification() {
        let recorder = Recorder::default();
        let (_, mut carrousel) = seven_slides(paged());
        carrousel.on_move(recorder.observer("late"));
        assert!(recorder.calls().is_empty());

        carrousel.next();
        assert_eq!(recorder.calls(), vec![("late", 2)]);
    }

    #[test]
    fn test_observers_may_capture_rc_state() {
        let surface = MemorySurface::new();
        let host = surface.host_with_slides(["1", "2", "3", "4", "5", "6", "7"]);
        let from_builder = Rc::new(Cell::new(usize::MAX));
        let from_on_move = Rc::new(Cell::new(usize::MAX));

        let builder_clone = from_builder.clone();
        let mut carrousel = Carrousel::builder(surface, host)
            .options(paged())
            .on_move(move |&index| builder_clone.set(index))
            .build()
            .unwrap();
        assert_eq!(from_builder.get(), 0);

        let on_move_clone = from_on_move.clone();
        carrousel.on_move(move |&index| on_move_clone.set(index));
        assert_eq!(from_on_move.get(), usize::MAX);

        carrousel.next();
        carrousel.next();
        assert_eq!(from_builder.get(), 4);
        assert_eq!(from_on_move.get(), 4);
    }

    #[test]
    fn test_observer_sees_every_call() {
        let recorder = Recorder::default();
        let (_, mut carrousel) = seven_slides(paged());
        carrousel.on_move(recorder.observer("o"));

        carrousel.goto_slide(0);
        carrousel.goto_slide(0);
        assert_eq!(recorder.calls(), vec![("o", 0), ("o", 0)]);
    }

    #[test]
    fn test_activate_dispatches_controls() {
        let (_, mut carrousel) = seven_slides(paged());
        carrousel.activate(NavControl::Next);
        assert_eq!(carrousel.current_slide(), 2);
        carrousel.activate(NavControl::Prev);
        assert_eq!(carrousel.current_slide(), 0);
    }

    #[test]
    fn test_empty_host() {
        let surface = MemorySurface::new();
        let host = surface.host_with_slides(Vec::<String>::new());
        let mut carrousel = Carrousel::new(surface.clone(), host, paged()).unwrap();

        assert_eq!(carrousel.slide_count(), 0);
        assert_eq!(surface.style(*carrousel.track(), "width").as_deref(), Some("0%"));

        carrousel.next();
        assert_eq!(carrousel.current_slide(), 0);
        carrousel.prev();
        assert_eq!(carrousel.current_slide(), 0);
        assert_eq!(
            carrousel.nav_state(),
            NavState {
                prev_hidden: true,
                next_hidden: true
            }
        );
    }

    #[test]
    fn test_index_bounds_hold() {
        let (_, mut carrousel) = seven_slides(paged());
        let steps: [fn(&mut Carrousel<MemorySurface>); 4] = [
            |c| c.next(),
            |c| c.prev(),
            |c| c.goto_slide(6),
            |c| c.goto_slide(-3),
        ];

        for round in 0..64 {
            steps[round % steps.len()](&mut carrousel);
            if round % 3 == 0 {
                steps[(round / 3) % steps.len()](&mut carrousel);
            }
            assert!(carrousel.current_slide() < carrousel.slide_count());
        }
    }
}
