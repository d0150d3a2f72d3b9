//! Path data tokenizer.
//!
//! Splits path data into command letters and numeric literals using the
//! grammar in `path.pest`. Separators and unrecognized characters produce no
//! token. The stream is lazy over the parsed pairs and cannot be restarted.

use crate::command::Command;
use crate::number::{parse_literal, parse_nonfinite};
use crate::{PathParser, Rule};
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use std::ops::Range;

/// A numeric literal as it appears in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number<'a> {
    pub text: &'a str,
    pub value: f64,
}

/// One token of path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Command { command: Command, start: usize },
    Number { number: Number<'a>, start: usize },
}

impl<'a> Token<'a> {
    /// Byte offset of the token in the source.
    pub fn start(&self) -> usize {
        match self {
            Token::Command { start, .. } | Token::Number { start, .. } => *start,
        }
    }

    /// Byte range of the token in the source.
    pub fn span(&self) -> Range<usize> {
        let len = match self {
            Token::Command { .. } => 1,
            Token::Number { number, .. } => number.text.len(),
        };
        self.start()..self.start() + len
    }

    /// Value when this token is read as an operand.
    ///
    /// A command letter in operand position has no value and reads as NaN.
    pub fn operand_value(&self) -> f64 {
        match self {
            Token::Number { number, .. } => number.value,
            Token::Command { .. } => f64::NAN,
        }
    }

    pub fn as_command(&self) -> Option<Command> {
        match self {
            Token::Command { command, .. } => Some(*command),
            Token::Number { .. } => None,
        }
    }
}

/// Lazy token stream over one path string.
#[derive(Debug)]
pub struct Tokens<'a> {
    pairs: Option<Pairs<'a, Rule>>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let pairs = self.pairs.as_mut()?;
        for pair in pairs.by_ref() {
            if let Some(token) = to_token(pair) {
                return Some(token);
            }
        }
        None
    }
}

/// Tokenize path data.
pub fn tokenize(source: &str) -> Tokens<'_> {
    let pairs = match PathParser::parse(Rule::path, source) {
        Ok(mut pairs) => pairs.next().map(Pair::into_inner),
        Err(_e) => {
            // `path` accepts any input
            crate::log::warn!("path data did not tokenize: {}", _e);
            None
        }
    };
    Tokens { pairs }
}

fn to_token(pair: Pair<'_, Rule>) -> Option<Token<'_>> {
    let start = pair.as_span().start();
    let text = pair.as_str();
    match pair.as_rule() {
        Rule::COMMAND => {
            let command = text.chars().next().and_then(Command::from_letter)?;
            Some(Token::Command { command, start })
        }
        Rule::NUMBER => Some(Token::Number {
            number: Number {
                text,
                value: parse_literal(text),
            },
            start,
        }),
        Rule::NONFINITE => Some(Token::Number {
            number: Number {
                text,
                value: parse_nonfinite(text),
            },
            start,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<String> {
        tokenize(source)
            .map(|t| match t {
                Token::Command { command, .. } => command.to_string(),
                Token::Number { number, .. } => number.text.to_string(),
            })
            .collect()
    }

    #[test]
    fn empty_input() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("  ,, ").count(), 0);
    }

    #[test]
    fn lone_close() {
        assert_eq!(texts("Z"), ["Z"]);
    }

    #[test]
    fn separators_are_skipped() {
        assert_eq!(texts("M10,20L 30 , 40z"), ["M", "10", "20", "L", "30", "40", "z"]);
    }

    #[test]
    fn signs_split_adjacent_numbers() {
        assert_eq!(texts("M10-20+5"), ["M", "10", "-20", "+5"]);
    }

    #[test]
    fn decimal_points_split_adjacent_numbers() {
        assert_eq!(texts("l.5.5"), ["l", ".5", ".5"]);
        assert_eq!(texts("L1.5.25"), ["L", "1.5", ".25"]);
    }

    #[test]
    fn exponents() {
        assert_eq!(texts("M1e3 2E-2"), ["M", "1e3", "2E-2"]);
        // a dangling exponent marker is not part of the number
        assert_eq!(texts("M1e 2"), ["M", "1", "2"]);
    }

    #[test]
    fn trailing_point_keeps_the_digits() {
        assert_eq!(texts("M 5. 3"), ["M", "5", "3"]);
        assert_eq!(texts("M 12.,7"), ["M", "12", "7"]);
        assert_eq!(texts("L-4.e2"), ["L", "-4", "2"]);
    }

    #[test]
    fn nonfinite_literals() {
        let tokens: Vec<_> = tokenize("M NaN -Infinity").collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].operand_value().is_nan());
        assert_eq!(tokens[2].operand_value(), f64::NEG_INFINITY);
    }

    #[test]
    fn unknown_letters_are_skipped() {
        assert_eq!(texts("M 1 2 X 3 B 4"), ["M", "1", "2", "3", "4"]);
    }

    #[test]
    fn spans_point_into_source() {
        let source = "M 10, -2.5";
        let tokens: Vec<_> = tokenize(source).collect();
        assert_eq!(&source[tokens[1].span()], "10");
        assert_eq!(&source[tokens[2].span()], "-2.5");
        assert_eq!(tokens[2].start(), 6);
    }

    #[test]
    fn command_in_operand_position_reads_as_nan() {
        let token = tokenize("L").next().unwrap();
        assert!(token.operand_value().is_nan());
        assert_eq!(token.as_command(), Command::from_letter('L'));
    }
}
