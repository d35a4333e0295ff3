//! libcalc - calculator engine
//!
//! A numeric-entry display driven by a deterministic state machine. Callers
//! hold a [`CalculatorState`], dispatch an [`Action`] through [`reduce`],
//! and render the state they get back. The engine performs no I/O and
//! keeps nothing between calls.

pub mod arithmetic;
pub mod config;
pub mod engine;
pub mod error;
pub mod keymap;
pub mod logging;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use engine::{reduce, Action, CalculatorState};
pub use error::{ArithmeticError, CalcError, EvalError, Result};
pub use keymap::{action_for_key, parse_token, Button, Key};
pub use session::Session;
pub use types::{Digit, Operation};
