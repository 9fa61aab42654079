//! The synchronization root handed out to callers that coordinate access to
//! a map themselves.

use std::fmt::{self, Debug};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A lock token associated with one map.
///
/// The map never acquires this lock. It exists so that several callers
/// sharing a map behind their own indirection can agree on one mutex to hold
/// around a sequence of operations. All handles obtained from the same map
/// refer to the same lock; a cloned map gets a lock of its own.
///
/// ```
/// use rpc_struct::Map;
///
/// let mut map: Map<i32> = Map::new();
/// let root = map.sync_root();
/// {
///     let _guard = root.lock();
///     map.insert("a".to_owned(), 1);
///     map.insert("b".to_owned(), 2);
/// }
/// assert!(root.same_as(&map.sync_root()));
/// ```
#[derive(Clone, Default)]
pub struct SyncRoot {
    lock: Arc<Mutex<()>>,
}

impl SyncRoot {
    pub(crate) fn new() -> Self {
        SyncRoot::default()
    }

    /// Blocks until the lock is held and returns the guard.
    ///
    /// A poisoned lock is recovered, since it protects no data of its own.
    pub fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Attempts to take the lock without blocking.
    pub fn try_lock(&self) -> Option<MutexGuard<'_, ()>> {
        match self.lock.try_lock() {
            Ok(guard) => Some(guard),
            Err(std::sync::TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
            Err(std::sync::TryLockError::WouldBlock) => None,
        }
    }

    /// Returns true if both handles refer to the same lock.
    pub fn same_as(&self, other: &SyncRoot) -> bool {
        Arc::ptr_eq(&self.lock, &other.lock)
    }
}

impl Debug for SyncRoot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("SyncRoot")
    }
}
