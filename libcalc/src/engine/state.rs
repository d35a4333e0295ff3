//! Calculator state
//!
//! Immutable state structure; every transition goes through the reducer
//! (see `reducer.rs`), which returns a fresh value.

use serde::{Deserialize, Serialize};

use crate::types::Operation;

/// The whole calculator, as seen by a caller
///
/// `previous_value` and `operation` are set and cleared together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// Number being entered, or the last result. Never empty.
    pub display: String,

    /// Left operand captured when a binary operation was selected
    pub previous_value: Option<f64>,

    /// Pending binary operation
    pub operation: Option<Operation>,

    /// Next digit starts a new number instead of extending `display`
    pub waiting_for_operand: bool,

    /// Message from the last failed calculation
    pub error: Option<String>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
            error: None,
        }
    }
}

impl CalculatorState {
    /// The fixed initial state
    pub fn initial() -> Self {
        Self::default()
    }

    /// Text a presentation layer should show: the error if any, else the display
    pub fn readout(&self) -> &str {
        self.error.as_deref().unwrap_or(&self.display)
    }

    pub fn has_pending_operation(&self) -> bool {
        self.operation.is_some() && self.previous_value.is_some()
    }
}
