use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Busy,
}

/// Non-reentrant gate over the board. Callers that find it busy are turned
/// away rather than queued.
#[derive(Debug)]
pub struct BusyLock {
    phase: Cell<Phase>,
}

impl BusyLock {
    pub fn new() -> Self {
        BusyLock {
            phase: Cell::new(Phase::Idle),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn is_busy(&self) -> bool {
        self.phase() == Phase::Busy
    }

    pub fn try_acquire(&self) -> Option<BusyGuard<'_>> {
        if self.is_busy() {
            return None;
        }
        self.phase.set(Phase::Busy);
        Some(BusyGuard { lock: self })
    }
}

impl Default for BusyLock {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the lock until dropped, whichever way the holder exits.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    lock: &'a BusyLock,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.lock.phase.set(Phase::Idle);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_acquire_release() {
        let lock = BusyLock::new();
        assert_eq!(lock.phase(), Phase::Idle);

        let guard = lock.try_acquire();
        assert!(guard.is_some());
        assert!(lock.is_busy());
        assert!(lock.try_acquire().is_none());
        assert!(lock.is_busy());

        drop(guard);
        assert_eq!(lock.phase(), Phase::Idle);
        assert!(lock.try_acquire().is_some());
        assert_eq!(lock.phase(), Phase::Idle);
    }

    #[test]
    fn test_release_on_panic() {
        let lock = BusyLock::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = lock.try_acquire();
            panic!("request handler blew up");
        }));
        assert!(result.is_err());
        assert!(!lock.is_busy());
    }
}
