//! Mock input backend for testing control surfaces.

use std::sync::{Arc, Mutex};

use crate::action::InputAction;
use crate::config::InputConfig;
use crate::DeviceInput;

/// Shared state observing what `MockInput` was asked to do.
#[derive(Debug, Default)]
struct MockInputState {
    actions: Vec<InputAction>,
}

/// Mock input backend that records actions instead of spawning adb.
///
/// Records the fully resolved action (after default substitution) so
/// tests can assert exactly what would have been invoked.
pub struct MockInput {
    config: InputConfig,
    result: bool,
    state: Arc<Mutex<MockInputState>>,
}

impl MockInput {
    /// Create a mock with default configuration reporting `result` for
    /// every operation.
    #[must_use]
    pub fn new(result: bool) -> Self {
        Self::with_config(InputConfig::default(), result)
    }

    /// Create a mock with an explicit configuration.
    #[must_use]
    pub fn with_config(config: InputConfig, result: bool) -> Self {
        Self {
            config,
            result,
            state: Arc::new(Mutex::new(MockInputState::default())),
        }
    }

    /// Get a clonable handle for observing recorded actions from tests.
    #[must_use]
    pub fn handle(&self) -> MockInputHandle {
        MockInputHandle {
            state: Arc::clone(&self.state),
        }
    }

    fn record(&self, action: InputAction) -> bool {
        self.state.lock().unwrap().actions.push(action);
        self.result
    }
}

/// Clonable observer handle for [`MockInput`].
#[derive(Clone)]
pub struct MockInputHandle {
    state: Arc<Mutex<MockInputState>>,
}

impl MockInputHandle {
    /// Snapshot of all recorded actions, oldest first.
    #[must_use]
    pub fn actions(&self) -> Vec<InputAction> {
        self.state.lock().unwrap().actions.clone()
    }
}

impl DeviceInput for MockInput {
    fn tap(&self, x: Option<i32>, y: Option<i32>) -> bool {
        self.record(self.config.tap_action(x, y))
    }

    fn swipe(
        &self,
        x1: Option<i32>,
        y1: Option<i32>,
        x2: Option<i32>,
        y2: Option<i32>,
        duration_ms: Option<u64>,
    ) -> bool {
        self.record(self.config.swipe_action(x1, y1, x2, y2, duration_ms))
    }

    fn back(&self) -> bool {
        self.record(InputAction::Back)
    }

    fn home(&self) -> bool {
        self.record(InputAction::Home)
    }
}
