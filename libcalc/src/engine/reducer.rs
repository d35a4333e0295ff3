//! Pure reducer function for state transitions
//!
//! `(CalculatorState, Action) -> CalculatorState`
//!
//! The reducer has no side effects. Calculation failures never escape it:
//! they are caught where the operation is evaluated and stored in the
//! returned state's `error` field.

use super::actions::Action;
use super::format::{format_number, parse_display};
use super::state::CalculatorState;
use crate::arithmetic;
use crate::error::EvalError;
use crate::types::{Digit, Operation};

/// Pure reducer function
///
/// Takes current state and an action, returns the next state. Transitions
/// that change nothing hand back the input value untouched.
pub fn reduce(state: CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::InputDigit(digit) => input_digit(state, digit),
        Action::InputDecimal => input_decimal(state),
        Action::SetOperation(op) if op.is_unary() => apply_unary(state, op),
        Action::SetOperation(op) => set_operation(state, op),
        Action::Calculate => calculate(state),

        Action::Clear => CalculatorState::initial(),

        Action::ClearEntry => CalculatorState {
            display: "0".to_string(),
            waiting_for_operand: false,
            ..state
        },

        Action::Delete => delete(state),

        Action::SetError(message) => CalculatorState {
            error: Some(message),
            ..state
        },

        Action::ClearError => CalculatorState {
            error: None,
            ..state
        },
    }
}

/// Evaluate `op` on the operands
///
/// Results that cannot be shown on the display (NaN, infinity) count as a
/// failed calculation.
pub fn evaluate(op: Operation, x: f64, y: f64) -> Result<f64, EvalError> {
    let result = arithmetic::apply(op, x, y)?;
    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::Calculation)
    }
}

fn input_digit(state: CalculatorState, digit: Digit) -> CalculatorState {
    let digit = digit.as_char().to_string();

    if state.error.is_some() {
        return CalculatorState {
            display: digit,
            error: None,
            waiting_for_operand: false,
            ..state
        };
    }

    if state.waiting_for_operand {
        return CalculatorState {
            display: digit,
            waiting_for_operand: false,
            ..state
        };
    }

    if state.display == "0" {
        return CalculatorState {
            display: digit,
            ..state
        };
    }

    let mut display = state.display.clone();
    display.push_str(&digit);
    CalculatorState { display, ..state }
}

fn input_decimal(state: CalculatorState) -> CalculatorState {
    if state.error.is_some() {
        return CalculatorState {
            display: "0.".to_string(),
            error: None,
            waiting_for_operand: false,
            ..state
        };
    }

    if state.waiting_for_operand {
        return CalculatorState {
            display: "0.".to_string(),
            waiting_for_operand: false,
            ..state
        };
    }

    if state.display.contains('.') {
        return state;
    }

    let display = format!("{}.", state.display);
    CalculatorState { display, ..state }
}

/// Select a binary operation, first evaluating a completed pending one
fn set_operation(state: CalculatorState, op: Operation) -> CalculatorState {
    // The requested operation is dropped; the user re-enters a value first.
    if state.error.is_some() {
        return CalculatorState { error: None, ..state };
    }

    let Some(input_value) = parse_display(&state.display) else {
        return with_error(state, EvalError::Calculation);
    };

    match (state.previous_value, state.operation) {
        (None, _) => CalculatorState {
            previous_value: Some(input_value),
            operation: Some(op),
            waiting_for_operand: true,
            ..state
        },

        // A second operand was typed: `5 + 3 *` evaluates `5 + 3` first.
        (Some(previous), Some(pending)) if !state.waiting_for_operand => {
            match evaluate(pending, previous, input_value) {
                Ok(result) => CalculatorState {
                    display: format_number(result),
                    previous_value: Some(result),
                    operation: Some(op),
                    waiting_for_operand: true,
                    ..state
                },
                Err(err) => with_error(state, err),
            }
        }

        // Operator pressed twice in a row: the newer one wins.
        _ => CalculatorState {
            operation: Some(op),
            waiting_for_operand: true,
            ..state
        },
    }
}

/// Apply a unary operation to the displayed value right away
///
/// With a binary operation pending, the result is its right-hand operand and
/// the pending operation completes too, so `9 + 16 √` shows `13`.
fn apply_unary(state: CalculatorState, op: Operation) -> CalculatorState {
    if state.error.is_some() {
        return CalculatorState { error: None, ..state };
    }

    let Some(input_value) = parse_display(&state.display) else {
        return with_error(state, EvalError::Calculation);
    };

    let result = match evaluate(op, input_value, 0.0) {
        Ok(result) => result,
        Err(err) => return with_error(state, err),
    };

    if state.has_pending_operation() {
        return complete_pending(state, result);
    }
    CalculatorState {
        display: format_number(result),
        waiting_for_operand: true,
        ..state
    }
}

fn calculate(state: CalculatorState) -> CalculatorState {
    if state.error.is_some() || !state.has_pending_operation() {
        return state;
    }

    match parse_display(&state.display) {
        Some(input_value) => complete_pending(state, input_value),
        None => with_error(state, EvalError::Calculation),
    }
}

/// Evaluate the pending binary operation with `operand` on the right
fn complete_pending(state: CalculatorState, operand: f64) -> CalculatorState {
    let (Some(previous), Some(op)) = (state.previous_value, state.operation) else {
        return state;
    };

    match evaluate(op, previous, operand) {
        Ok(result) => CalculatorState {
            display: format_number(result),
            previous_value: None,
            operation: None,
            waiting_for_operand: true,
            ..state
        },
        Err(err) => with_error(state, err),
    }
}

fn delete(state: CalculatorState) -> CalculatorState {
    if state.error.is_some() {
        return CalculatorState {
            display: "0".to_string(),
            error: None,
            ..state
        };
    }

    let mut display = state.display.clone();
    display.pop();
    if display.is_empty() || display == "-" {
        display = "0".to_string();
    }
    CalculatorState { display, ..state }
}

fn with_error(state: CalculatorState, err: EvalError) -> CalculatorState {
    CalculatorState {
        error: Some(err.to_string()),
        ..state
    }
}
