//! Arithmetic primitives
//!
//! Pure functions over `f64`. The fallible ones return
//! [`ArithmeticError`] instead of producing NaN or infinity for the
//! operand combinations a calculator should reject.

use crate::error::ArithmeticError;
use crate::types::Operation;

pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

pub fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

pub fn divide(x: f64, y: f64) -> Result<f64, ArithmeticError> {
    if y == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(x / y)
}

/// Remainder with the sign of the dividend
pub fn modulo(x: f64, y: f64) -> Result<f64, ArithmeticError> {
    if y == 0.0 {
        return Err(ArithmeticError::ModuloByZero);
    }
    Ok(x % y)
}

pub fn percentage(x: f64) -> f64 {
    x / 100.0
}

pub fn square(x: f64) -> f64 {
    x * x
}

pub fn square_root(x: f64) -> Result<f64, ArithmeticError> {
    if x < 0.0 {
        return Err(ArithmeticError::NegativeSquareRoot);
    }
    Ok(x.sqrt())
}

/// `x` raised to `y`, with `powf` semantics for edge cases (`0^0 == 1`)
pub fn power(x: f64, y: f64) -> f64 {
    x.powf(y)
}

/// Factorial of `floor(x)`
///
/// Returns infinity once the product overflows rather than iterating up to
/// an astronomically large bound.
pub fn factorial(x: f64) -> Result<f64, ArithmeticError> {
    if x < 0.0 {
        return Err(ArithmeticError::NegativeFactorial);
    }

    let n = x.floor();
    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        if result.is_infinite() {
            break;
        }
        i += 1.0;
    }
    Ok(result)
}

/// Apply `op` to the operands; unary operations ignore `y`
pub fn apply(op: Operation, x: f64, y: f64) -> Result<f64, ArithmeticError> {
    match op {
        Operation::Add => Ok(add(x, y)),
        Operation::Subtract => Ok(subtract(x, y)),
        Operation::Multiply => Ok(multiply(x, y)),
        Operation::Divide => divide(x, y),
        Operation::Modulo => modulo(x, y),
        Operation::Percentage => Ok(percentage(x)),
        Operation::Square => Ok(square(x)),
        Operation::SquareRoot => square_root(x),
        Operation::Power => Ok(power(x, y)),
        Operation::Factorial => factorial(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_add() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-2.0, -3.0), -5.0);
        assert_eq!(add(5.0, -3.0), 2.0);
        assert!(close(add(1.5, 2.3), 3.8));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(subtract(-2.0, -3.0), 1.0);
        assert!(close(subtract(3.8, 1.5), 2.3));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(3.0, 4.0), 12.0);
        assert_eq!(multiply(-3.0, -4.0), 12.0);
        assert_eq!(multiply(3.0, -4.0), -12.0);
        assert_eq!(multiply(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 2.0), Ok(5.0));
        assert_eq!(divide(-10.0, -2.0), Ok(5.0));
        assert_eq!(divide(10.0, -2.0), Ok(-5.0));
        assert_eq!(divide(10.0, 0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(0.0, -0.0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_modulo_sign_follows_dividend() {
        assert_eq!(modulo(10.0, 3.0), Ok(1.0));
        assert_eq!(modulo(-10.0, 3.0), Ok(-1.0));
        assert_eq!(modulo(10.0, -3.0), Ok(1.0));
        assert!(close(modulo(10.5, 3.0).unwrap(), 1.5));
        assert_eq!(modulo(10.0, 0.0), Err(ArithmeticError::ModuloByZero));
    }

    #[test]
    fn test_percentage_and_square() {
        assert_eq!(percentage(50.0), 0.5);
        assert!(close(percentage(25.5), 0.255));
        assert_eq!(square(-4.0), 16.0);
        assert!(close(square(2.5), 6.25));
    }

    #[test]
    fn test_square_root() {
        assert_eq!(square_root(16.0), Ok(4.0));
        assert_eq!(square_root(0.0), Ok(0.0));
        assert_eq!(square_root(-4.0), Err(ArithmeticError::NegativeSquareRoot));
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 3.0), 8.0);
        assert!(close(power(4.0, 0.5), 2.0));
        assert_eq!(power(5.0, 0.0), 1.0);
        assert_eq!(power(0.0, 5.0), 0.0);
        assert_eq!(power(0.0, 0.0), 1.0);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0.0), Ok(1.0));
        assert_eq!(factorial(1.0), Ok(1.0));
        assert_eq!(factorial(5.0), Ok(120.0));
        assert_eq!(factorial(-1.0), Err(ArithmeticError::NegativeFactorial));
    }

    #[test]
    fn test_factorial_floors_fractional_input() {
        assert_eq!(factorial(3.5), Ok(6.0));
        assert_eq!(factorial(0.9), Ok(1.0));
    }

    #[test]
    fn test_factorial_overflow_terminates() {
        assert_eq!(factorial(170.0).map(f64::is_finite), Ok(true));
        assert_eq!(factorial(171.0).map(f64::is_infinite), Ok(true));
        assert_eq!(factorial(1e300).map(f64::is_infinite), Ok(true));
    }

    #[test]
    fn test_apply_unary_ignores_second_operand() {
        assert_eq!(apply(Operation::SquareRoot, 16.0, -1.0), Ok(4.0));
        assert_eq!(apply(Operation::Percentage, 50.0, 0.0), Ok(0.5));
        assert_eq!(apply(Operation::Factorial, 4.0, 99.0), Ok(24.0));
        assert_eq!(apply(Operation::Square, 3.0, f64::NAN), Ok(9.0));
    }

    #[test]
    fn test_apply_binary() {
        assert_eq!(apply(Operation::Add, 5.0, 3.0), Ok(8.0));
        assert_eq!(apply(Operation::Power, 2.0, 10.0), Ok(1024.0));
        assert_eq!(
            apply(Operation::Divide, 1.0, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
    }
}
