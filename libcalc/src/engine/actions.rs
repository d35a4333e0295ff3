//! Actions for the reducer pattern
//!
//! Every state transition is triggered by one of these. A presentation
//! layer maps each key press or button click to exactly one action.

use serde::{Deserialize, Serialize};

use crate::types::{Digit, Operation};

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    /// Type a digit
    InputDigit(Digit),

    /// Type the decimal point
    InputDecimal,

    /// Select an operation (binary ops become pending, unary ops apply now)
    SetOperation(Operation),

    /// Evaluate the pending operation (`=`)
    Calculate,

    /// Reset everything (`C`)
    Clear,

    /// Reset the display only (`CE`)
    ClearEntry,

    /// Remove the last typed character (backspace)
    Delete,

    SetError(String),

    ClearError,
}
