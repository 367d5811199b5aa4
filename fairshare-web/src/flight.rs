//! Single-flight guards for the one-shot async operations.
//!
//! File import and story generation each get one in-flight slot; a second
//! request while one is running is refused outright rather than queued.

use std::cell::Cell;
use std::rc::Rc;

/// Tracks whether a request of one operation kind is in flight. Clones
/// share the slot.
#[derive(Debug, Clone, Default)]
pub struct SingleFlight {
    busy: Rc<Cell<bool>>,
}

impl SingleFlight {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Claim the slot. Returns `None` while a prior request is still in
    /// flight; otherwise the returned guard holds the slot until dropped.
    #[must_use]
    pub fn begin(&self) -> Option<FlightGuard> {
        if self.busy.replace(true) {
            None
        } else {
            Some(FlightGuard {
                busy: Rc::clone(&self.busy),
            })
        }
    }
}

/// Releases the in-flight slot when dropped, including on panic or when a
/// future is cancelled.
#[derive(Debug)]
pub struct FlightGuard {
    busy: Rc<Cell<bool>>,
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}
