//! Core value types shared by the engine, keymap and callers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operations the calculator can apply
///
/// Serialized names (and `FromStr`/`Display`) use the camelCase tags
/// callers already know: `add`, `squareRoot`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Percentage,
    Square,
    SquareRoot,
    Power,
    Factorial,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulo,
        Operation::Percentage,
        Operation::Square,
        Operation::SquareRoot,
        Operation::Power,
        Operation::Factorial,
    ];

    /// True for operations that take a single operand
    pub fn is_unary(self) -> bool {
        matches!(
            self,
            Operation::Percentage | Operation::Square | Operation::SquareRoot | Operation::Factorial
        )
    }

    pub fn is_binary(self) -> bool {
        !self.is_unary()
    }

    /// Keypad label
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Modulo => "mod",
            Operation::Percentage => "%",
            Operation::Square => "x²",
            Operation::SquareRoot => "√",
            Operation::Power => "x^y",
            Operation::Factorial => "x!",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Modulo => "modulo",
            Operation::Percentage => "percentage",
            Operation::Square => "square",
            Operation::SquareRoot => "squareRoot",
            Operation::Power => "power",
            Operation::Factorial => "factorial",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid operation: '{}'", s))
    }
}

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or_else(|| format!("Not a digit: '{}'", c))
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or_else(|| format!("Digit out of range: {}", value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unary_set() {
        let unary: Vec<_> = Operation::ALL.into_iter().filter(|op| op.is_unary()).collect();
        assert_eq!(
            unary,
            vec![
                Operation::Percentage,
                Operation::Square,
                Operation::SquareRoot,
                Operation::Factorial
            ]
        );
        assert!(Operation::Power.is_binary());
        assert!(Operation::Modulo.is_binary());
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("squareRoot".parse::<Operation>().unwrap(), Operation::SquareRoot);
        // Case insensitive
        assert_eq!("SQUAREROOT".parse::<Operation>().unwrap(), Operation::SquareRoot);
    }

    #[test]
    fn test_operation_from_str_invalid() {
        let result = "log".parse::<Operation>();
        assert!(result.unwrap_err().contains("Invalid operation: 'log'"));
    }

    #[test]
    fn test_operation_display_matches_serde() {
        for op in Operation::ALL {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{}\"", op));
        }
    }

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::try_from('7').unwrap().value(), 7);
        assert_eq!(Digit::try_from('0').unwrap().as_char(), '0');
        assert!(Digit::try_from('a').is_err());
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn test_digit_serde_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<Digit>("4").unwrap(), Digit::new(4).unwrap());
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }
}
