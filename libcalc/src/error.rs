//! Error types for the calculator
//!
//! Two tiers: arithmetic primitives fail with [`ArithmeticError`], and the
//! engine folds those (plus anything it cannot evaluate) into [`EvalError`],
//! whose message ends up in the state's `error` field. [`CalcError`] covers
//! everything around the engine: configuration and caller input.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CalcError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CalcError::InvalidInput(_) => 3,
            CalcError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failures raised by the arithmetic primitives.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Modulo by zero")]
    ModuloByZero,

    #[error("Square root of negative number")]
    NegativeSquareRoot,

    #[error("Factorial of negative number")]
    NegativeFactorial,
}

/// Failure while evaluating an operation inside the engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// Unparseable operand or a result that cannot be displayed (NaN, infinity)
    #[error("Calculation error")]
    Calculation,
}
