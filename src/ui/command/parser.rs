//! Number parser for values typed by a user or passed as arguments.
use chumsky::prelude::*;
use chumsky::Parser;
use log::debug;

type Err<'a> = extra::Err<Rich<'a, char>>;

/// Whitespace characters as C `isspace` understands them (note the vertical tab).
const C_WHITESPACE: &str = " \t\n\x0B\x0C\r";

fn is_c_whitespace(c: char) -> bool {
    C_WHITESPACE.contains(c)
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("`{0}` is not a number")]
    Malformed(String),
    #[error("`{0}` is out of range")]
    OutOfRange(String),
}

fn whitespace<'a>() -> impl Parser<'a, &'a str, (), Err<'a>> + Clone {
    one_of(C_WHITESPACE).repeated()
}

/// Decimal or scientific literal: `[+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)?`.
fn decimal<'a>() -> impl Parser<'a, &'a str, &'a str, Err<'a>> + Clone {
    let sign = one_of("+-").or_not();
    let digits = text::digits(10).at_least(1);

    let mantissa = digits
        .clone()
        .then(just('.').then(digits.clone().or_not()).or_not())
        .ignored()
        .or(just('.').then(digits.clone()).ignored());
    let exponent = one_of("eE").then(sign.clone()).then(digits);

    sign.then(mantissa)
        .then(exponent.or_not())
        .to_slice()
        .labelled("number")
}

fn number<'a>() -> impl Parser<'a, &'a str, &'a str, Err<'a>> {
    whitespace()
        .ignore_then(decimal())
        .then_ignore(whitespace())
        .then_ignore(end())
}

/// Parse a single number from `token`.
///
/// Leading and trailing whitespace (a line terminator included) is ignored, anything else
/// around the number makes the whole token invalid. Only finite values are returned.
pub fn parse_number(token: &str) -> Result<f64, ParseError> {
    let trimmed = token.trim_matches(is_c_whitespace);
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let lexeme = number().parse(token).into_result().map_err(|errors| {
        if let Some(e) = errors.first() {
            debug!(target: "parser", "reject {token:?}: {e}");
        }
        ParseError::Malformed(trimmed.to_string())
    })?;

    let value: f64 = lexeme
        .parse()
        .map_err(|_| ParseError::Malformed(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(ParseError::OutOfRange(trimmed.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_number() {
        struct TestCase {
            string: &'static str,
            result: Result<f64, ParseError>,
        }
        let cases = [
            TestCase {
                string: "3.58",
                result: Ok(3.58),
            },
            TestCase {
                string: "  3.58\n",
                result: Ok(3.58),
            },
            TestCase {
                string: "\t-4.23\r\n",
                result: Ok(-4.23),
            },
            TestCase {
                string: "+7",
                result: Ok(7.0),
            },
            TestCase {
                string: "5.",
                result: Ok(5.0),
            },
            TestCase {
                string: ".5",
                result: Ok(0.5),
            },
            TestCase {
                string: "-0",
                result: Ok(-0.0),
            },
            TestCase {
                string: "1.5e3",
                result: Ok(1500.0),
            },
            TestCase {
                string: "2E-2 ",
                result: Ok(0.02),
            },
            TestCase {
                string: "1.e2",
                result: Ok(100.0),
            },
            TestCase {
                string: "\x0B12\x0C",
                result: Ok(12.0),
            },
            TestCase {
                string: "",
                result: Err(ParseError::Empty),
            },
            TestCase {
                string: "  ",
                result: Err(ParseError::Empty),
            },
            TestCase {
                string: "\n",
                result: Err(ParseError::Empty),
            },
            TestCase {
                string: "abc",
                result: Err(ParseError::Malformed("abc".to_string())),
            },
            TestCase {
                string: "3.5x",
                result: Err(ParseError::Malformed("3.5x".to_string())),
            },
            TestCase {
                string: "-",
                result: Err(ParseError::Malformed("-".to_string())),
            },
            TestCase {
                string: "+",
                result: Err(ParseError::Malformed("+".to_string())),
            },
            TestCase {
                string: ".",
                result: Err(ParseError::Malformed(".".to_string())),
            },
            TestCase {
                string: "1e",
                result: Err(ParseError::Malformed("1e".to_string())),
            },
            TestCase {
                string: "3 4",
                result: Err(ParseError::Malformed("3 4".to_string())),
            },
            TestCase {
                string: "1,5",
                result: Err(ParseError::Malformed("1,5".to_string())),
            },
            TestCase {
                string: "inf",
                result: Err(ParseError::Malformed("inf".to_string())),
            },
            TestCase {
                string: "nan",
                result: Err(ParseError::Malformed("nan".to_string())),
            },
            TestCase {
                string: "0x10",
                result: Err(ParseError::Malformed("0x10".to_string())),
            },
            TestCase {
                string: "1e999",
                result: Err(ParseError::OutOfRange("1e999".to_string())),
            },
        ];

        for tc in cases {
            assert_eq!(parse_number(tc.string), tc.result, "input: {:?}", tc.string);
        }
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        let zero = parse_number("-0.0").unwrap();
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_negative());
    }
}
