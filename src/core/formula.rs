//! Formula evaluation.
//!
//! A formula is a small arithmetic expression taken from the metrics registry,
//! for example `(#VALUE / #TOTAL_VALUE) * 100`. The two placeholders are
//! replaced textually by the operands (formatted with two decimals) and the
//! resulting expression is evaluated with `evalexpr`.

use crate::error::{ConvError, Result};
use evalexpr::Value;
use log::trace;

/// Placeholder replaced by the sample value
pub const VALUE_PLACEHOLDER: &str = "#VALUE";

/// Placeholder replaced by the reference total
pub const TOTAL_PLACEHOLDER: &str = "#TOTAL_VALUE";

/// Round to two decimal places, half away from zero
pub fn round_two(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Replace both placeholders in `formula` with the operands.
///
/// Substitution is unconditional; a formula without placeholders is returned
/// unchanged and simply ignores the operands.
pub fn substitute(formula: &str, value: f64, total: f64) -> String {
    formula
        .replace(VALUE_PLACEHOLDER, &format!("{:.2}", value))
        .replace(TOTAL_PLACEHOLDER, &format!("{:.2}", total))
}

/// Rewrite every integer literal in `expression` as a float literal.
///
/// `evalexpr` divides integers with integer semantics (`7 / 2` is `3`), so
/// `1024` becomes `1024.0` before evaluation. Literals that already carry a
/// fraction or exponent, digits inside identifiers and string literals are
/// left untouched.
pub(crate) fn float_literals(expression: &str) -> String {
    let chars: Vec<char> = expression.chars().collect();
    let mut out = String::with_capacity(expression.len() + 8);
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some(&escaped) = chars.get(i + 1) {
                    out.push(escaped);
                    i += 1;
                }
            } else if c == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            i += 1;
            continue;
        }

        let starts_literal = c.is_ascii_digit() && (i == 0 || !is_word_char(chars[i - 1]));
        if !starts_literal {
            out.push(c);
            i += 1;
            continue;
        }

        let start = i;
        let mut is_float = false;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if chars.get(i) == Some(&'.') {
            is_float = true;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }
        if matches!(chars.get(i), Some('e') | Some('E')) {
            is_float = true;
            i += 1;
            if matches!(chars.get(i), Some('+') | Some('-')) {
                i += 1;
            }
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }

        out.extend(&chars[start..i]);
        let glued = chars.get(i).is_some_and(|&n| is_word_char(n));
        if !is_float && !glued {
            out.push_str(".0");
        }
    }

    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// Evaluate `formula` with `value` and `total` substituted for the placeholders.
///
/// All numeric literals are evaluated as floats, so `7 / 2` is `3.5`. The
/// result is rounded to two decimals. Fails with [`ConvError::Formula`] when
/// the expression is malformed, references an unknown identifier, or does not
/// produce a finite number.
pub fn evaluate(formula: &str, value: f64, total: f64) -> Result<f64> {
    let expression = float_literals(&substitute(formula, value, total));
    trace!("Evaluating '{}' as '{}'", formula, expression);

    let result = evalexpr::eval(&expression)
        .map_err(|e| ConvError::formula(formula, e.to_string()))?;

    let number = match result {
        Value::Float(f) => f,
        Value::Int(i) => i as f64,
        other => {
            return Err(ConvError::formula(
                formula,
                format!("expression evaluated to non-numeric value '{}'", other),
            ))
        }
    };

    if !number.is_finite() {
        return Err(ConvError::formula(
            formula,
            format!("expression evaluated to non-finite value {}", number),
        ));
    }

    Ok(round_two(number))
}
