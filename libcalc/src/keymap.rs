//! Keybindings and keypad buttons
//!
//! One key press or button click maps to exactly one [`Action`]. This is
//! where a presentation layer gets its bindings; the engine itself never
//! sees keys.

use crate::engine::Action;
use crate::error::{CalcError, Result};
use crate::types::{Digit, Operation};

/// A keyboard key the calculator responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
}

impl Key {
    /// Parse a named key (`Enter`, `Escape`/`Esc`, `Backspace`)
    pub fn from_name(name: &str) -> Option<Key> {
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Some(Key::Enter),
            "escape" | "esc" => Some(Key::Escape),
            "backspace" => Some(Key::Backspace),
            _ => None,
        }
    }
}

/// Map a keyboard key to its action
pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Char(c) if c.is_ascii_digit() => Digit::try_from(c).ok().map(Action::InputDigit),
        Key::Char('.') => Some(Action::InputDecimal),
        Key::Char('+') => Some(Action::SetOperation(Operation::Add)),
        Key::Char('-') => Some(Action::SetOperation(Operation::Subtract)),
        Key::Char('*') => Some(Action::SetOperation(Operation::Multiply)),
        Key::Char('/') => Some(Action::SetOperation(Operation::Divide)),
        Key::Char('%') => Some(Action::SetOperation(Operation::Percentage)),
        Key::Char('=') | Key::Enter => Some(Action::Calculate),
        Key::Escape => Some(Action::Clear),
        Key::Backspace => Some(Action::Delete),
        Key::Char(_) => None,
    }
}

/// A control on the calculator keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Clear,
    ClearEntry,
    Delete,
    Digit(Digit),
    Decimal,
    Equals,
    Operation(Operation),
}

impl Button {
    /// Every button in keypad order, row by row
    pub fn keypad() -> Vec<Button> {
        let digit = |d: u8| Digit::new(d).map(Button::Digit);
        let op = |op: Operation| Some(Button::Operation(op));
        [
            Some(Button::Clear),
            Some(Button::ClearEntry),
            Some(Button::Delete),
            op(Operation::Divide),
            digit(7),
            digit(8),
            digit(9),
            op(Operation::Multiply),
            digit(4),
            digit(5),
            digit(6),
            op(Operation::Subtract),
            digit(1),
            digit(2),
            digit(3),
            op(Operation::Add),
            op(Operation::Percentage),
            digit(0),
            Some(Button::Decimal),
            Some(Button::Equals),
            op(Operation::Square),
            op(Operation::SquareRoot),
            op(Operation::Power),
            op(Operation::Factorial),
            op(Operation::Modulo),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn label(&self) -> String {
        match self {
            Button::Clear => "C".to_string(),
            Button::ClearEntry => "CE".to_string(),
            Button::Delete => "⌫".to_string(),
            Button::Digit(d) => d.to_string(),
            Button::Decimal => ".".to_string(),
            Button::Equals => "=".to_string(),
            Button::Operation(op) => op.symbol().to_string(),
        }
    }

    /// Find a button by its label, or by a plain-ASCII alias
    pub fn from_label(label: &str) -> Option<Button> {
        let button = match label.to_ascii_lowercase().as_str() {
            "c" | "ac" => Button::Clear,
            "ce" => Button::ClearEntry,
            "⌫" | "del" => Button::Delete,
            "." => Button::Decimal,
            "=" => Button::Equals,
            "sqrt" => Button::Operation(Operation::SquareRoot),
            "x^2" | "sq" => Button::Operation(Operation::Square),
            "^" | "pow" => Button::Operation(Operation::Power),
            "!" | "fact" => Button::Operation(Operation::Factorial),
            "-" => Button::Operation(Operation::Subtract),
            "*" => Button::Operation(Operation::Multiply),
            "/" => Button::Operation(Operation::Divide),
            other => {
                let mut chars = other.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    if let Ok(d) = Digit::try_from(c) {
                        return Some(Button::Digit(d));
                    }
                }
                return Operation::ALL
                    .into_iter()
                    .find(|op| op.symbol() == other)
                    .map(Button::Operation);
            }
        };
        Some(button)
    }

    pub fn action(&self) -> Action {
        match *self {
            Button::Clear => Action::Clear,
            Button::ClearEntry => Action::ClearEntry,
            Button::Delete => Action::Delete,
            Button::Digit(d) => Action::InputDigit(d),
            Button::Decimal => Action::InputDecimal,
            Button::Equals => Action::Calculate,
            Button::Operation(op) => Action::SetOperation(op),
        }
    }
}

/// Turn one input token into actions
///
/// A named key (`Enter`) or button label (`CE`, `sqrt`, `x^y`) is a single
/// press; anything else is read as a run of key presses, one per character
/// (`12.5*4=`).
pub fn parse_token(token: &str) -> Result<Vec<Action>> {
    if let Some(action) = Key::from_name(token).and_then(action_for_key) {
        return Ok(vec![action]);
    }
    if let Some(button) = Button::from_label(token) {
        return Ok(vec![button.action()]);
    }

    token
        .chars()
        .map(|c| {
            action_for_key(Key::Char(c))
                .or_else(|| Button::from_label(&c.to_string()).map(|b| b.action()))
                .ok_or_else(|| {
                    CalcError::InvalidInput(format!("unknown key '{}' in '{}'", c, token))
                })
        })
        .collect()
}
