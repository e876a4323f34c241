//! Signal/slot system for Carrousel.
//!
//! A [`Signal`] holds an ordered list of slots (callbacks). Emitting the
//! signal invokes every connected slot synchronously, in the order the slots
//! were connected. The carrousel widget uses a `Signal<usize>` to announce
//! each move to a new slide index.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//! - [`ConnectionGuard`] - RAII guard that disconnects when dropped
//! - [`LocalSignal<Args>`] - Single-threaded variant for non-`Send` slots
//!
//! # Example
//!
//! ```
//! use carrousel_core::Signal;
//!
//! let moved = Signal::<usize>::new();
//!
//! let conn_id = moved.connect(|index| {
//!     println!("Moved to: {}", index);
//! });
//!
//! moved.emit(4);
//! moved.disconnect(conn_id);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke.
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
    /// Connection sequence number; emission order follows it.
    sequence: u64,
}

/// A type-safe signal that can have multiple connected slots.
///
/// Slots are invoked directly on the emitting thread, in connection order.
/// The slot list is snapshotted before invocation, so a slot may connect or
/// disconnect other slots without deadlocking; such changes take effect from
/// the next emission.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
    /// Next connection sequence number.
    next_sequence: AtomicU64,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
            next_sequence: AtomicU64::new(0),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use carrousel_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let connection = Connection {
            slot: Arc::new(slot),
            sequence: self.next_sequence.fetch_add(1, Ordering::SeqCst),
        };
        self.connections.lock().insert(connection)
    }

    /// Connect a slot that is disconnected when the returned guard is dropped.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard { signal: self, id }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// If the signal is blocked, this does nothing.
    #[tracing::instrument(skip_all, target = "carrousel_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots = self.snapshot();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }

    /// Collect the connected slots in connection order, releasing the lock.
    fn snapshot(&self) -> Vec<Arc<dyn Fn(&Args) + Send + Sync>> {
        let connections = self.connections.lock();
        let mut ordered: Vec<_> = connections.values().collect();
        // Slot-map iteration follows slot reuse, not insertion.
        ordered.sort_by_key(|conn| conn.sequence);
        ordered.into_iter().map(|conn| conn.slot.clone()).collect()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connection_count", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

/// A connection guard that automatically disconnects when dropped.
///
/// Created via [`Signal::connect_scoped`]. The guard borrows the signal, so
/// the signal always outlives it.
///
/// # Example
///
/// ```
/// use carrousel_core::Signal;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let signal = Signal::<usize>::new();
/// let counter = Arc::new(AtomicUsize::new(0));
/// {
///     let counter_clone = counter.clone();
///     let _guard = signal.connect_scoped(move |&n| {
///         counter_clone.fetch_add(n, Ordering::SeqCst);
///     });
///     signal.emit(42);
/// }
/// signal.emit(43);
/// assert_eq!(counter.load(Ordering::SeqCst), 42);
/// ```
pub struct ConnectionGuard<'a, Args> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<'_, Args> {
    /// The ID of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

static_assertions::assert_impl_all!(Signal<usize>: Send, Sync);

// ============================================================================
// LocalSignal
// ============================================================================

struct LocalConnection<Args> {
    slot: Rc<dyn Fn(&Args)>,
    sequence: u64,
}

/// A single-threaded signal whose slots need not be `Send` or `Sync`.
///
/// Behaves like [`Signal`] (connection-order emission, snapshot before
/// invocation, blocking) but lets slots capture `Rc`, `Cell` and
/// platform handles that cannot cross threads.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use carrousel_core::LocalSignal;
///
/// let moved = LocalSignal::<usize>::new();
/// let last = Rc::new(Cell::new(0));
///
/// let last_clone = last.clone();
/// moved.connect(move |&index| last_clone.set(index));
///
/// moved.emit(4);
/// assert_eq!(last.get(), 4);
/// ```
pub struct LocalSignal<Args> {
    connections: RefCell<SlotMap<ConnectionId, LocalConnection<Args>>>,
    blocked: Cell<bool>,
    next_sequence: Cell<u64>,
}

impl<Args> Default for LocalSignal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> LocalSignal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: RefCell::new(SlotMap::with_key()),
            blocked: Cell::new(false),
            next_sequence: Cell::new(0),
        }
    }

    /// Connect a slot (closure) to this signal.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + 'static,
    {
        let sequence = self.next_sequence.get();
        self.next_sequence.set(sequence + 1);
        self.connections.borrow_mut().insert(LocalConnection {
            slot: Rc::new(slot),
            sequence,
        })
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.borrow_mut().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.borrow_mut().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.borrow().len()
    }

    /// Block signal emission temporarily.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.set(blocked);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.get()
    }

    /// Emit the signal, invoking all connected slots in connection order.
    #[tracing::instrument(skip_all, target = "carrousel_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots = self.snapshot();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }

    fn snapshot(&self) -> Vec<Rc<dyn Fn(&Args)>> {
        let connections = self.connections.borrow();
        let mut ordered: Vec<_> = connections.values().collect();
        ordered.sort_by_key(|conn| conn.sequence);
        ordered.into_iter().map(|conn| conn.slot.clone()).collect()
    }
}

impl<Args> std::fmt::Debug for LocalSignal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSignal")
            .field("connection_count", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

static_assertions::assert_not_impl_any!(LocalSignal<usize>: Send, Sync);
