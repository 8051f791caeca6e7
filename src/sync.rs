//! Minimal locks for guarding state shared with UI callbacks.
//!
//! Formatters are immutable and need no locking; these are for the caller's
//! own state (current text, selection) when edit notifications arrive from
//! more than one thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Something that can run a closure under mutual exclusion.
pub trait Lockable {
    /// Run `body` while holding the lock. The lock is released even if
    /// `body` panics.
    fn with_lock<T, F>(&self, body: F) -> T
    where
        F: FnOnce() -> T;

    /// [`with_lock`](Self::with_lock) for bodies without a result.
    fn with_lock_void<F>(&self, body: F)
    where
        F: FnOnce(),
    {
        self.with_lock(body);
    }
}

/// Busy-waiting lock for very short critical sections.
#[derive(Debug, Default)]
pub struct SpinLock {
    locked: AtomicBool,
}

struct SpinGuard<'a>(&'a AtomicBool);

impl Drop for SpinGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SpinLock {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
        }
    }

    /// Whether some thread currently holds the lock.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }

    fn acquire(&self) -> SpinGuard<'_> {
        loop {
            if self
                .locked
                .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
                .is_ok()
            {
                return SpinGuard(&self.locked);
            }
            // Spin on a plain load until the holder releases.
            while self.locked.load(Ordering::Relaxed) {
                std::hint::spin_loop();
            }
        }
    }
}

impl Lockable for SpinLock {
    fn with_lock<T, F>(&self, body: F) -> T
    where
        F: FnOnce() -> T,
    {
        let _guard = self.acquire();
        body()
    }
}

/// Blocking lock backed by [`std::sync::Mutex`].
///
/// Poisoning is ignored: a panic inside one critical section does not make
/// the lock unusable for later ones.
#[derive(Debug, Default)]
pub struct MutexLock {
    inner: Mutex<()>,
}

impl MutexLock {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(()),
        }
    }
}

impl Lockable for MutexLock {
    fn with_lock<T, F>(&self, body: F) -> T
    where
        F: FnOnce() -> T,
    {
        let _guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        body()
    }
}
