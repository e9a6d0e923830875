//! Calculator
//!
//! Stateless binary arithmetic over two f64 operands, plus the parser for
//! calculator input lines of the form `<number><op><number>`.

use thiserror::Error;

/// Calculator errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid operator: '{0}'")]
    InvalidOperator(char),

    #[error("Invalid input format")]
    InvalidInputFormat,

    #[error("Not a number: '{0}'")]
    NumberParse(String),
}

/// Evaluate `a <op> b`. Pure function with native f64 semantics.
pub fn calculate(a: f64, b: f64, op: char) -> Result<f64, CalcError> {
    match op {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' => Ok(a * b),
        '/' => {
            if b == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
        other => Err(CalcError::InvalidOperator(other)),
    }
}

/// Split a calculator line at the first operator character and parse both
/// sides as numbers.
///
/// The split point is the *first* occurrence of any of `+-*/`, so a leading
/// sign is taken as the operator and `-3+4` fails with an empty left
/// operand. This quirk is inherited behavior, kept on purpose.
pub fn parse_expression(line: &str) -> Result<(f64, f64, char), CalcError> {
    let op_pos = line
        .find(['+', '-', '*', '/'])
        .ok_or(CalcError::InvalidInputFormat)?;
    // Operator characters are all single-byte, so byte slicing is safe here.
    let op = line.as_bytes()[op_pos] as char;
    let lhs = line[..op_pos].trim();
    let rhs = line[op_pos + 1..].trim();
    let a: f64 = lhs
        .parse()
        .map_err(|_| CalcError::NumberParse(lhs.to_string()))?;
    let b: f64 = rhs
        .parse()
        .map_err(|_| CalcError::NumberParse(rhs.to_string()))?;
    Ok((a, b, op))
}

/// Parse and evaluate a calculator line in one step.
pub fn evaluate_line(line: &str) -> Result<f64, CalcError> {
    let (a, b, op) = parse_expression(line)?;
    calculate(a, b, op)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(calculate(10.0, 5.0, '+'), Ok(15.0));
        assert_eq!(calculate(10.0, 5.0, '-'), Ok(5.0));
        assert_eq!(calculate(10.0, 5.0, '*'), Ok(50.0));
        assert_eq!(calculate(10.0, 4.0, '/'), Ok(2.5));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(calculate(10.0, 0.0, '/'), Err(CalcError::DivisionByZero));
        // Negative zero compares equal to zero
        assert_eq!(calculate(1.0, -0.0, '/'), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_invalid_operator() {
        assert_eq!(calculate(1.0, 2.0, '%'), Err(CalcError::InvalidOperator('%')));
        assert_eq!(calculate(1.0, 2.0, '^'), Err(CalcError::InvalidOperator('^')));
    }

    #[test]
    fn test_parse_simple_expression() {
        assert_eq!(parse_expression("10+5"), Ok((10.0, 5.0, '+')));
        assert_eq!(parse_expression("3.5*2"), Ok((3.5, 2.0, '*')));
    }

    #[test]
    fn test_parse_tolerates_spaces_around_operands() {
        assert_eq!(parse_expression("10 + 5"), Ok((10.0, 5.0, '+')));
    }

    #[test]
    fn test_parse_no_operator() {
        assert_eq!(parse_expression("12345"), Err(CalcError::InvalidInputFormat));
        assert_eq!(parse_expression(""), Err(CalcError::InvalidInputFormat));
    }

    #[test]
    fn test_parse_bad_operand() {
        assert_eq!(
            parse_expression("abc+5"),
            Err(CalcError::NumberParse("abc".to_string()))
        );
        assert_eq!(
            parse_expression("5+xyz"),
            Err(CalcError::NumberParse("xyz".to_string()))
        );
    }

    #[test]
    fn test_leading_sign_taken_as_operator() {
        // Inherited quirk: the first '-' is the split point, leaving an
        // empty left operand.
        assert_eq!(
            parse_expression("-3+4"),
            Err(CalcError::NumberParse(String::new()))
        );
    }

    #[test]
    fn test_evaluate_line() {
        assert_eq!(evaluate_line("10+5"), Ok(15.0));
        assert_eq!(evaluate_line("10/0"), Err(CalcError::DivisionByZero));
    }

    #[quickcheck]
    fn prop_division_fails_iff_zero_divisor(a: f64, b: f64) -> TestResult {
        if a.is_nan() || b.is_nan() {
            return TestResult::discard();
        }
        let result = calculate(a, b, '/');
        if b == 0.0 {
            TestResult::from_bool(result == Err(CalcError::DivisionByZero))
        } else {
            // Bitwise comparison so inf/inf (NaN result) still passes
            TestResult::from_bool(result.map(f64::to_bits) == Ok((a / b).to_bits()))
        }
    }

    #[quickcheck]
    fn prop_addition_is_commutative(a: f64, b: f64) -> TestResult {
        if a.is_nan() || b.is_nan() || (a.is_infinite() && b.is_infinite()) {
            return TestResult::discard();
        }
        TestResult::from_bool(calculate(a, b, '+') == calculate(b, a, '+'))
    }
}
