//! RAII join guard for thread handles

use crate::core::{Result, ThreadError};
use std::any::Any;
use std::thread::{self, JoinHandle, Thread};

/// Extract a readable message from a join panic payload
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Exclusive owner of one thread handle, joined exactly once
///
/// The guard joins its thread when dropped, covering normal return, early
/// return, and panic-unwind exits of the owning scope. A worker panic
/// observed while joining in drop is logged and never propagated; the
/// guard's job is only to wait for completion.
///
/// Ownership is exclusive and non-copyable. [`release`](Self::release)
/// transfers the handle out exactly once, after which the guard no longer
/// joins.
///
/// # Examples
///
/// ```rust
/// use threadstack::JoinGuard;
///
/// # fn main() -> threadstack::Result<()> {
/// let mut guard = JoinGuard::spawn(|| 40 + 2)?;
/// assert_eq!(guard.join()?, 42);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct JoinGuard<T = ()> {
    handle: Option<JoinHandle<T>>,
}

impl<T> JoinGuard<T> {
    /// Take exclusive ownership of an already-started thread
    pub fn new(handle: JoinHandle<T>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Spawn a thread and wrap its handle in a guard
    ///
    /// # Errors
    ///
    /// Returns [`ThreadError::SpawnError`] if the OS cannot start the
    /// thread.
    pub fn spawn<F>(f: F) -> Result<Self>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        Self::from_builder(thread::Builder::new(), "unnamed", f)
    }

    /// Spawn a named thread and wrap its handle in a guard
    ///
    /// # Errors
    ///
    /// Returns [`ThreadError::SpawnError`] if the OS cannot start the
    /// thread.
    pub fn spawn_named<F>(name: &str, f: F) -> Result<Self>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        Self::from_builder(thread::Builder::new().name(name.to_string()), name, f)
    }

    fn from_builder<F>(builder: thread::Builder, name: &str, f: F) -> Result<Self>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let handle = builder
            .spawn(f)
            .map_err(|e| ThreadError::spawn_with_source(name, "Cannot create thread", e))?;
        Ok(Self::new(handle))
    }

    /// Report whether the guard still owns a joinable handle
    pub fn is_joinable(&self) -> bool {
        self.handle.is_some()
    }

    /// Get the owned thread, if the guard still owns one
    pub fn thread(&self) -> Option<&Thread> {
        self.handle.as_ref().map(JoinHandle::thread)
    }

    /// Report whether the owned thread has already run to completion
    ///
    /// Returns `false` if the handle was already joined or released. A
    /// `true` result means a subsequent join will not block.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_some_and(JoinHandle::is_finished)
    }

    /// Join the owned thread now and return its result
    ///
    /// After a successful or failed join the guard is spent; dropping it
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadError::InvalidThread`] if the thread was already
    /// joined or released, and [`ThreadError::JoinError`] if the thread
    /// terminated by panic.
    pub fn join(&mut self) -> Result<T> {
        let handle = self
            .handle
            .take()
            .ok_or_else(|| ThreadError::invalid_thread("join after join or release"))?;
        let name = thread_name(&handle);
        handle.join().map_err(|payload| {
            ThreadError::join(
                name,
                format!("thread panicked: {}", panic_message(payload.as_ref())),
            )
        })
    }

    /// Transfer ownership of the handle out of the guard
    ///
    /// The guard no longer joins the thread; the caller is responsible for
    /// joining or detaching it.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadError::InvalidThread`] if the thread was already
    /// joined or released.
    pub fn release(&mut self) -> Result<JoinHandle<T>> {
        self.handle
            .take()
            .ok_or_else(|| ThreadError::invalid_thread("release after join or release"))
    }
}

impl<T> From<JoinHandle<T>> for JoinGuard<T> {
    fn from(handle: JoinHandle<T>) -> Self {
        Self::new(handle)
    }
}

impl<T> Drop for JoinGuard<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let name = thread_name(&handle);
            if let Err(payload) = handle.join() {
                // The worker's failure is not the guard's to propagate
                log::warn!(
                    "thread '{}' panicked before join in guard drop: {}",
                    name,
                    panic_message(payload.as_ref())
                );
            }
        }
    }
}

fn thread_name<T>(handle: &JoinHandle<T>) -> String {
    handle.thread().name().unwrap_or("unnamed").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_guard_joins_on_drop() {
        let done = Arc::new(AtomicBool::new(false));
        {
            let done = Arc::clone(&done);
            let _guard = JoinGuard::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                done.store(true, Ordering::SeqCst);
            })
            .expect("Failed to spawn guarded thread");
        }
        // Guard dropped, so the worker must have completed
        assert!(done.load(Ordering::SeqCst));
    }

    #[test]
    fn test_explicit_join_returns_value() {
        let mut guard =
            JoinGuard::spawn_named("adder", || 2 + 3).expect("Failed to spawn guarded thread");
        assert!(guard.is_joinable());
        assert_eq!(guard.join().expect("join failed"), 5);
        assert!(!guard.is_joinable());
    }

    #[test]
    fn test_double_join_is_invalid() {
        let mut guard = JoinGuard::spawn(|| ()).expect("Failed to spawn guarded thread");
        guard.join().expect("first join failed");

        let err = guard.join().expect_err("second join must fail");
        assert!(matches!(err, ThreadError::InvalidThread { .. }));
    }

    #[test]
    fn test_release_transfers_ownership() {
        let mut guard = JoinGuard::spawn(|| 7).expect("Failed to spawn guarded thread");
        let handle = guard.release().expect("release failed");
        assert!(!guard.is_joinable());

        // A released guard must not join again
        assert!(matches!(
            guard.release(),
            Err(ThreadError::InvalidThread { .. })
        ));
        assert_eq!(handle.join().expect("manual join failed"), 7);
    }

    #[test]
    fn test_drop_over_finished_thread_does_not_block() {
        let guard = JoinGuard::spawn(|| ()).expect("Failed to spawn guarded thread");
        // Let the worker finish before the guard goes out of scope
        while !guard.is_finished() {
            thread::sleep(Duration::from_millis(1));
        }
        drop(guard);
    }

    #[test]
    fn test_join_reports_worker_panic() {
        let mut guard = JoinGuard::spawn_named("doomed", || {
            panic!("intentional panic for testing");
        })
        .expect("Failed to spawn guarded thread");

        let err = guard.join().expect_err("join of panicked thread must fail");
        match err {
            ThreadError::JoinError { name, message } => {
                assert_eq!(name, "doomed");
                assert!(message.contains("intentional panic"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_drop_swallows_worker_panic() {
        // Must not re-panic when the worker panicked
        let _guard = JoinGuard::spawn(|| {
            panic!("intentional panic for testing");
        })
        .expect("Failed to spawn guarded thread");
    }

    #[test]
    fn test_guard_from_handle() {
        let handle = thread::spawn(|| 11);
        let mut guard = JoinGuard::from(handle);
        assert_eq!(guard.join().expect("join failed"), 11);
    }

    #[test]
    fn test_join_before_unwind() {
        let done = Arc::new(AtomicBool::new(false));
        let done_outer = Arc::clone(&done);

        let result = std::panic::catch_unwind(move || {
            let done = Arc::clone(&done_outer);
            let _guard = JoinGuard::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                done.store(true, Ordering::SeqCst);
            })
            .expect("Failed to spawn guarded thread");
            panic!("scope exits by panic");
        });

        assert!(result.is_err());
        // The guard joined during unwind, before the panic escaped the scope
        assert!(done.load(Ordering::SeqCst));
    }
}
