//! Mutex-guarded concurrent LIFO stack

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics for a concurrent stack
///
/// Counters are updated with relaxed atomics outside the locking protocol,
/// so they are observational only and may briefly trail the sequence itself.
#[derive(Debug, Default)]
pub struct StackStats {
    /// Total number of values pushed
    pub pushes: AtomicU64,
    /// Total number of values popped
    pub pops: AtomicU64,
    /// Total number of pop attempts that found the stack empty
    pub empty_pops: AtomicU64,
}

impl StackStats {
    /// Create new stack statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the push counter
    pub fn increment_pushes(&self) {
        self.pushes.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the pop counter
    pub fn increment_pops(&self) {
        self.pops.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the empty pop counter
    pub fn increment_empty_pops(&self) {
        self.empty_pops.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total values pushed
    pub fn get_pushes(&self) -> u64 {
        self.pushes.load(Ordering::Relaxed)
    }

    /// Get total values popped
    pub fn get_pops(&self) -> u64 {
        self.pops.load(Ordering::Relaxed)
    }

    /// Get total pop attempts on an empty stack
    pub fn get_empty_pops(&self) -> u64 {
        self.empty_pops.load(Ordering::Relaxed)
    }
}

/// A LIFO container safe for concurrent push/pop from multiple threads
///
/// Every read and mutation of the sequence happens under one coarse
/// `parking_lot::Mutex`, held only for the single structural operation.
/// `try_pop` on an empty stack returns `None`; the empty condition is
/// expected, not an error.
///
/// # Examples
///
/// ```rust
/// use threadstack::ConcurrentStack;
///
/// let stack = ConcurrentStack::new();
/// stack.push(7);
/// assert_eq!(stack.try_pop(), Some(7));
/// assert_eq!(stack.try_pop(), None);
/// ```
#[derive(Debug)]
pub struct ConcurrentStack<T> {
    items: Mutex<Vec<T>>,
    stats: StackStats,
}

impl<T> Default for ConcurrentStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConcurrentStack<T> {
    /// Create a new, empty stack
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            stats: StackStats::new(),
        }
    }

    /// Push a value onto the top of the stack
    ///
    /// Always succeeds; blocks only for the duration of the lock hold.
    pub fn push(&self, value: T) {
        self.items.lock().push(value);
        self.stats.increment_pushes();
    }

    /// Remove and return the top value, or `None` if the stack is empty
    ///
    /// Never blocks beyond the lock hold and never panics; ownership of
    /// the popped value transfers to the caller.
    pub fn try_pop(&self) -> Option<T> {
        let popped = self.items.lock().pop();
        match popped {
            Some(_) => self.stats.increment_pops(),
            None => self.stats.increment_empty_pops(),
        }
        popped
    }

    /// Report whether the stack currently has zero elements
    ///
    /// The result is a snapshot taken under the lock; concurrent mutators
    /// may make it stale immediately after return.
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Report the current number of elements
    ///
    /// Snapshot semantics, same as [`is_empty`](Self::is_empty).
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Get the stack's operation statistics
    pub fn stats(&self) -> &StackStats {
        &self.stats
    }
}
