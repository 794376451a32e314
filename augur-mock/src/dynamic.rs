use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use augur_core::{AugurError, Series, SeriesSource};

/// Instruction for how the next `series` calls should behave.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return the provided series.
    Return(Series),
    /// Fail with the provided error.
    Fail(AugurError),
}

struct InternalState {
    behavior: MockBehavior,
    calls: usize,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Replace the behavior for subsequent `series` calls.
    pub fn set_behavior(&self, behavior: MockBehavior) {
        lock(&self.state).behavior = behavior;
    }

    /// Number of `series` calls served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        lock(&self.state).calls
    }
}

/// Source whose output can be changed between calls through a controller.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a source (initially returning an empty series) and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Self, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState {
            behavior: MockBehavior::Return(Vec::new()),
            calls: 0,
        }));
        (
            Self {
                name,
                state: Arc::clone(&state),
            },
            DynamicMockController { state },
        )
    }
}

impl SeriesSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn series(&self) -> Result<Series, AugurError> {
        let mut guard = lock(&self.state);
        guard.calls += 1;
        match &guard.behavior {
            MockBehavior::Return(series) => Ok(series.clone()),
            MockBehavior::Fail(err) => Err(err.clone()),
        }
    }
}

// A panic while holding the lock leaves plain data behind; keep serving it.
fn lock(state: &Mutex<InternalState>) -> MutexGuard<'_, InternalState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
