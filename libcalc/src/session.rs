//! Caller-side holder for the current calculator state
//!
//! The engine keeps nothing between calls. `Session` is the state cell a
//! front end owns: it feeds each action through [`reduce`] and swaps in the
//! result. Dispatch takes `&mut self`, so one action is fully applied before
//! the next; share a session across threads behind a `Mutex`.

use tracing::{debug, warn};

use crate::engine::{reduce, Action, CalculatorState};

#[derive(Debug, Clone, Default)]
pub struct Session {
    state: CalculatorState,
    dispatched: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously captured state
    pub fn with_state(state: CalculatorState) -> Self {
        Self {
            state,
            dispatched: 0,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn readout(&self) -> &str {
        self.state.readout()
    }

    /// Number of actions dispatched so far
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Apply one action and return the new state
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let had_error = self.state.error.is_some();
        debug!(?action, display = %self.state.display, "dispatching action");

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        self.dispatched += 1;

        match &self.state.error {
            Some(error) if !had_error => warn!(%error, "calculation failed"),
            _ => debug!(
                display = %self.state.display,
                operation = ?self.state.operation,
                waiting_for_operand = self.state.waiting_for_operand,
                "state updated"
            ),
        }
        &self.state
    }

    /// Apply actions in order
    pub fn dispatch_all<I>(&mut self, actions: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    /// Back to the initial state, keeping the dispatch count
    pub fn reset(&mut self) {
        self.dispatch(Action::Clear);
    }
}
