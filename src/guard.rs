//! Per-object locking around a sponge engine.
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::{HashError, Result};

/// Payload size below which single-owner updates are expected to skip the
/// lock. Reported through [`HashOptions`](crate::HashOptions); shared access
/// through `&self` always locks.
pub const LOCK_THRESHOLD: usize = 2048;

/// Owns an engine behind a mutex. `None` marks a released engine.
///
/// Shared access goes through the lock. A caller holding `&mut` reaches the
/// engine through [`Mutex::get_mut`] without locking.
pub(crate) struct ConcurrencyGuard<E> {
    slot: Mutex<Option<E>>,
}

impl<E> ConcurrencyGuard<E> {
    pub(crate) fn new(engine: E) -> Self {
        Self {
            slot: Mutex::new(Some(engine)),
        }
    }

    /// Run `f` on the engine under the lock.
    pub(crate) fn with_engine<R>(&self, f: impl FnOnce(&mut E) -> Result<R>) -> Result<R> {
        let mut slot = self.acquire()?;
        let engine = slot.as_mut().ok_or(HashError::Released)?;
        f(engine)
    }

    /// The engine, borrowed exclusively without taking the lock.
    pub(crate) fn engine_mut(&mut self) -> Result<&mut E> {
        self.slot
            .get_mut()
            .map_err(|_| poisoned())?
            .as_mut()
            .ok_or(HashError::Released)
    }

    /// Take the engine out, leaving the released sentinel behind.
    ///
    /// Returns `None` if the engine was already taken. Recovers from a
    /// poisoned lock so that release always happens.
    pub(crate) fn take(&self) -> Option<E> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    pub(crate) fn is_released(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    fn acquire(&self) -> Result<MutexGuard<'_, Option<E>>> {
        self.slot.lock().map_err(|_| poisoned())
    }
}

fn poisoned() -> HashError {
    debug!("engine lock poisoned by a panic inside a critical section");
    HashError::EngineFault("engine lock poisoned".into())
}
