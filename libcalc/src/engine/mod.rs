//! Calculator engine
//!
//! - Actions: what the user did
//! - State: what the calculator shows and has pending
//! - Reducer: pure function (State, Action) -> State
//! - Format: display text conventions
//!
//! The engine owns nothing between calls; the caller keeps the current
//! state and feeds it back in with the next action.

pub mod actions;
pub mod format;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use format::{format_number, parse_display};
pub use reducer::{evaluate, reduce};
pub use state::CalculatorState;
