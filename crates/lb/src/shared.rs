use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{Dispatch, DispatchPolicy};

/// Serializes dispatches from several threads through one policy.
///
/// Each `dispatch` holds the lock for the whole pick/advance/record sequence,
/// so concurrent callers observe the same order a single caller would.
pub struct SharedDispatcher<P> {
    policy: Mutex<P>,
}

impl<P: DispatchPolicy> SharedDispatcher<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy: Mutex::new(policy),
        }
    }

    pub fn dispatch(&self) -> Dispatch {
        self.lock().dispatch()
    }

    pub fn loads(&self) -> Vec<u64> {
        self.lock().pool().loads()
    }

    pub fn into_inner(self) -> P {
        self.policy.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // dispatch never panics midway, so a poisoned policy is still consistent
    fn lock(&self) -> MutexGuard<'_, P> {
        self.policy.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
