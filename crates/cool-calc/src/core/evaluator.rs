//! AST evaluation and result rendering
//!
//! `evaluate` is the single entry point the controller uses: text in,
//! rendered number or [`CalcError`] out.

use tracing::debug;

use crate::core::parser::{AstNode, Parser};
use crate::core::CalcResult;

/// Evaluates an expression and renders the result as re-parseable text
///
/// # Example
///
/// ```rust
/// use cool_calc::core::evaluate;
///
/// assert_eq!(evaluate("12+3").unwrap(), "15");
/// assert_eq!(evaluate("1/4").unwrap(), "0.25");
/// assert!(evaluate("9/0").is_err());
/// ```
pub fn evaluate(input: &str) -> CalcResult<String> {
    let outcome = evaluate_value(input).map(format_result);
    match &outcome {
        Ok(text) => debug!(input, result = %text, "evaluated expression"),
        Err(e) => debug!(input, error = %e, "expression rejected"),
    }
    outcome
}

/// Evaluates an expression to its numeric value
pub fn evaluate_value(input: &str) -> CalcResult<f64> {
    let ast = Parser::parse_str(input)?;
    evaluate_ast(&ast)
}

/// Evaluates a parsed AST node
pub fn evaluate_ast(node: &AstNode) -> CalcResult<f64> {
    match node {
        AstNode::Number(n) => Ok(*n),
        AstNode::Negate(inner) => {
            let value = evaluate_ast(inner)?;
            Ok(-value)
        }
        AstNode::BinaryOp { left, op, right } => {
            let left_val = evaluate_ast(left)?;
            let right_val = evaluate_ast(right)?;
            op.apply(left_val, right_val)
        }
    }
}

/// Renders a finite value in its shortest round-tripping decimal form
///
/// Integral values carry no fractional part and exponent notation is never
/// produced, so the output always tokenizes as a plain number with an
/// optional leading minus.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Operation};

    // ===== AST evaluation =====

    #[test]
    fn test_evaluate_ast_number() {
        assert_eq!(evaluate_ast(&AstNode::number(42.0)), Ok(42.0));
    }

    #[test]
    fn test_evaluate_ast_negate() {
        let ast = AstNode::negate(AstNode::number(5.0));
        assert_eq!(evaluate_ast(&ast), Ok(-5.0));
    }

    #[test]
    fn test_evaluate_ast_nested() {
        // (2 + 3) * 4
        let ast = AstNode::binary(
            AstNode::binary(AstNode::number(2.0), Operation::Add, AstNode::number(3.0)),
            Operation::Multiply,
            AstNode::number(4.0),
        );
        assert_eq!(evaluate_ast(&ast), Ok(20.0));
    }

    #[test]
    fn test_evaluate_ast_error_propagates_from_left() {
        let ast = AstNode::binary(
            AstNode::binary(AstNode::number(1.0), Operation::Divide, AstNode::number(0.0)),
            Operation::Add,
            AstNode::number(5.0),
        );
        assert_eq!(evaluate_ast(&ast), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_ast_error_propagates_from_right() {
        let ast = AstNode::binary(
            AstNode::number(5.0),
            Operation::Add,
            AstNode::binary(AstNode::number(1.0), Operation::Divide, AstNode::number(0.0)),
        );
        assert_eq!(evaluate_ast(&ast), Err(CalcError::DivisionByZero));
    }

    // ===== String evaluation =====

    #[test]
    fn test_evaluate_keypad_expressions() {
        assert_eq!(evaluate("12+3").unwrap(), "15");
        assert_eq!(evaluate("7*6").unwrap(), "42");
        assert_eq!(evaluate("4-1").unwrap(), "3");
        assert_eq!(evaluate("3*2").unwrap(), "6");
    }

    #[test]
    fn test_evaluate_precedence() {
        assert_eq!(evaluate("1+2*3").unwrap(), "7");
        assert_eq!(evaluate("1+(2*3)").unwrap(), "7");
        assert_eq!(evaluate("(1+2)*3").unwrap(), "9");
        assert_eq!(evaluate("10-4/2").unwrap(), "8");
    }

    #[test]
    fn test_evaluate_left_associativity() {
        assert_eq!(evaluate("8-4-2").unwrap(), "2");
        assert_eq!(evaluate("8/4/2").unwrap(), "1");
    }

    #[test]
    fn test_evaluate_unary_minus() {
        assert_eq!(evaluate("-5").unwrap(), "-5");
        assert_eq!(evaluate("-5+10").unwrap(), "5");
        assert_eq!(evaluate("3--2").unwrap(), "5");
        assert_eq!(evaluate("2*-3").unwrap(), "-6");
    }

    #[test]
    fn test_evaluate_decimal_results() {
        assert_eq!(evaluate("1/4").unwrap(), "0.25");
        assert_eq!(evaluate("7/2").unwrap(), "3.5");
        assert_eq!(evaluate("1/3").unwrap(), "0.3333333333333333");
    }

    #[test]
    fn test_evaluate_no_trailing_zeros() {
        assert_eq!(evaluate("6/2").unwrap(), "3");
        assert_eq!(evaluate("1.50").unwrap(), "1.5");
        assert_eq!(evaluate("2.0*2").unwrap(), "4");
    }

    #[test]
    fn test_evaluate_large_integers_without_exponent() {
        let result = evaluate("99999999999*99999999999").unwrap();
        assert!(!result.contains('e'));
        assert!(result.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(evaluate(&result).unwrap(), result);
    }

    #[test]
    fn test_evaluate_negative_zero_renders_as_zero() {
        assert_eq!(evaluate("-0").unwrap(), "0");
        assert_eq!(evaluate("0*-1").unwrap(), "0");
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        assert_eq!(evaluate("9/0"), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("0/0"), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("1/(2-2)"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_overflow() {
        let huge = format!("1{}", "0".repeat(300));
        let expr = format!("{huge}*{huge}");
        assert_eq!(evaluate(&expr), Err(CalcError::Overflow));
    }

    #[test]
    fn test_evaluate_malformed() {
        assert_eq!(evaluate(""), Err(CalcError::EmptyExpression));
        for input in ["5+", "5+*2", "C", "5=", "*"] {
            assert!(
                matches!(evaluate(input), Err(CalcError::ParseError(_))),
                "{input} should be a parse error"
            );
        }
    }

    #[test]
    fn test_evaluate_result_is_fixed_point() {
        for input in ["1/3", "-7/2", "12+3", "0.1+0.2", "2/3*-9"] {
            let first = evaluate(input).unwrap();
            assert_eq!(evaluate(&first).unwrap(), first, "{input}");
        }
    }

    #[test]
    fn test_evaluate_value() {
        assert_eq!(evaluate_value("7*6"), Ok(42.0));
        assert!(evaluate_value("").is_err());
    }

    // ===== Rendering =====

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(3.0), "3");
        assert_eq!(format_result(-3.0), "-3");
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(1e21), "1000000000000000000000");
        assert_eq!(format_result(1e-7), "0.0000001");
    }

    // ===== Limits =====

    #[test]
    fn test_evaluate_longest_chain() {
        let terms = crate::core::parser::MAX_TOKENS / 2;
        let chain = vec!["1"; terms].join("+");
        assert_eq!(evaluate(&chain).unwrap(), terms.to_string());
    }

    #[test]
    fn test_evaluate_oversized_input_is_error() {
        let deep = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert!(evaluate(&deep).unwrap_err().is_parse_error());

        let long = format!("{}1", "9*".repeat(200_000));
        assert!(evaluate(&long).unwrap_err().is_parse_error());
    }
}
