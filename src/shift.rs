//! Coordinate shifter.
//!
//! Walks the token stream one tuple at a time. The only state carried between
//! tokens is the active command, threaded through [`step`] as a value. Each
//! step either emits one piece of output text or halts the walk.
//!
//! Malformed trailing data halts the walk and the output ends at the last
//! complete tuple. [`shift_path`] drops that silently; [`shift_path_report`]
//! says what was dropped and [`shift_path_strict`] turns it into an error.

use crate::command::Command;
use crate::errors::{ShiftError, SourceContext};
use crate::number::{finite_or_zero, fmt_num};
use crate::token::{Token, Tokens, tokenize};
use glam::DVec2;

/// Largest operand tuple (`A`).
const MAX_ARITY: usize = 7;

/// Why the walk stopped before the end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationReason {
    /// A number came before any command letter.
    NoCommand,
    /// A number followed a command that takes no operands (`Z`/`z`).
    UnexpectedOperands(Command),
    /// Input ended inside a tuple.
    IncompleteTuple { command: Command, found: usize },
}

/// Trailing input dropped by the shifter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    pub reason: TruncationReason,
    /// Byte offset of the first dropped token.
    pub at: usize,
    /// Number of tokens dropped.
    pub discarded: usize,
}

/// Result of a shift together with what was dropped, if anything.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftReport {
    pub path: String,
    pub truncation: Option<Truncation>,
}

impl ShiftReport {
    pub fn discarded(&self) -> usize {
        self.truncation.map_or(0, |t| t.discarded)
    }

    /// The shifted path, or an error if anything was dropped.
    ///
    /// `name` and `source` are used for the diagnostic only.
    pub fn into_strict(self, name: &str, source: &str) -> Result<String, ShiftError> {
        let Some(truncation) = self.truncation else {
            return Ok(self.path);
        };
        let ctx = SourceContext::new(name, source);
        let src = ctx.named_source();
        let span = ctx.tail_span(truncation.at);
        let discarded = truncation.discarded;
        Err(match truncation.reason {
            TruncationReason::NoCommand => ShiftError::NoCommand {
                discarded,
                src,
                span,
            },
            TruncationReason::UnexpectedOperands(command) => ShiftError::UnexpectedOperands {
                command: command.letter(),
                discarded,
                src,
                span,
            },
            TruncationReason::IncompleteTuple { command, found } => {
                ShiftError::IncompleteTuple {
                    command: command.letter(),
                    expected: command.arity(),
                    found,
                    discarded,
                    src,
                    span,
                }
            }
        })
    }
}

/// Translate the absolute commands of `source` by `offset`.
///
/// Relative commands are copied unchanged. Every NaN or infinite value,
/// whether read from the input or produced by the translation, is written as
/// `0`. Trailing data that does not form a complete tuple is dropped.
pub fn shift_path(source: &str, offset: DVec2) -> String {
    shift_path_report(source, offset).path
}

/// Like [`shift_path`], also reporting dropped trailing data.
pub fn shift_path_report(source: &str, offset: DVec2) -> ShiftReport {
    let mut tokens = tokenize(source);
    let mut pieces: Vec<String> = Vec::new();
    let mut state = ShiftState::default();

    while let Some(token) = tokens.next() {
        match step(state, token, &mut tokens, offset) {
            Step::Emit { next, piece } => {
                pieces.push(piece);
                state = next;
            }
            Step::Halt(truncation) => {
                crate::log::debug!(
                    "shift_path: dropped {} token(s) at byte {}: {:?}",
                    truncation.discarded,
                    truncation.at,
                    truncation.reason
                );
                return ShiftReport {
                    path: normalize_whitespace(&pieces.join(" ")),
                    truncation: Some(truncation),
                };
            }
        }
    }

    ShiftReport {
        path: normalize_whitespace(&pieces.join(" ")),
        truncation: None,
    }
}

/// Like [`shift_path`], but dropped trailing data is an error.
pub fn shift_path_strict(source: &str, offset: DVec2) -> Result<String, ShiftError> {
    shift_path_report(source, offset).into_strict("<path>", source)
}

/// Collapse whitespace runs to one space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// State carried from one token to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ShiftState {
    /// Most recent command letter, case preserved.
    active: Option<Command>,
}

#[derive(Debug)]
enum Step {
    Emit { next: ShiftState, piece: String },
    Halt(Truncation),
}

/// Consume `token` (and, for operands, the rest of its tuple from `rest`).
fn step(state: ShiftState, token: Token<'_>, rest: &mut Tokens<'_>, offset: DVec2) -> Step {
    if let Token::Command { command, .. } = token {
        return Step::Emit {
            next: ShiftState {
                active: Some(command),
            },
            piece: command.to_string(),
        };
    }

    let at = token.start();
    let Some(command) = state.active else {
        return Step::Halt(Truncation {
            reason: TruncationReason::NoCommand,
            at,
            discarded: 1 + rest.count(),
        });
    };
    let arity = command.arity();
    if arity == 0 {
        return Step::Halt(Truncation {
            reason: TruncationReason::UnexpectedOperands(command),
            at,
            discarded: 1 + rest.count(),
        });
    }

    let mut operands = [0.0; MAX_ARITY];
    operands[0] = token.operand_value();
    let mut found = 1;
    for next in rest.by_ref().take(arity - 1) {
        if let Some(_swallowed) = next.as_command() {
            crate::log::trace!(
                "shift_path: `{}` at byte {} read as an operand of `{}`",
                _swallowed,
                next.start(),
                command
            );
        }
        operands[found] = next.operand_value();
        found += 1;
    }
    if found < arity {
        return Step::Halt(Truncation {
            reason: TruncationReason::IncompleteTuple { command, found },
            at,
            discarded: found,
        });
    }

    let operands = &mut operands[..arity];
    command.apply_offset(operands, offset);
    let piece = operands
        .iter()
        .map(|v| fmt_num(finite_or_zero(*v)))
        .collect::<Vec<_>>()
        .join(" ");

    Step::Emit { next: state, piece }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(source: &str, dx: f64, dy: f64) -> String {
        shift_path(source, DVec2::new(dx, dy))
    }

    #[test]
    fn move_and_line() {
        insta::assert_snapshot!(shift("M 10 20 L 30 40", 5.0, 5.0), @"M 15 25 L 35 45");
    }

    #[test]
    fn single_axis_commands() {
        insta::assert_snapshot!(shift("M 0 0 H 10 V 20", 5.0, 3.0), @"M 5 3 H 15 V 23");
    }

    #[test]
    fn arc_endpoint_only() {
        insta::assert_snapshot!(shift("A 5 5 0 0 1 10 10", 2.0, 2.0), @"A 5 5 0 0 1 12 12");
    }

    #[test]
    fn curves_shift_every_pair() {
        insta::assert_snapshot!(
            shift("M0,0 C1,2 3,4 5,6 S7,8 9,10 Q1,1 2,2 T3,3", 10.0, 100.0),
            @"M 10 100 C 11 102 13 104 15 106 S 17 108 19 110 Q 11 101 12 102 T 13 103"
        );
    }

    #[test]
    fn nan_operand_becomes_zero() {
        insta::assert_snapshot!(shift("M NaN 10", 1.0, 1.0), @"M 0 11");
    }

    #[test]
    fn infinity_becomes_zero_even_when_relative() {
        assert_eq!(shift("m Infinity -Infinity", 1.0, 1.0), "m 0 0");
        assert_eq!(shift("M 1e308 0", 1e308, 0.0), "M 0 0");
    }

    #[test]
    fn relative_commands_are_untouched() {
        let inputs = [
            "m 1 2 l 3 4 z",
            "m 0.5 -1.25 h 10 v -3 c 1 2 3 4 5 6 s 1 1 2 2",
            "m 10 10 q 1 2 3 4 t 5 6 a 5 5 30 1 0 20 20",
        ];
        for input in inputs {
            for (dx, dy) in [(0.0, 0.0), (5.0, -7.5), (-1e6, 3.0)] {
                assert_eq!(
                    shift(input, dx, dy),
                    normalize_whitespace(input),
                    "{input} by ({dx}, {dy})"
                );
            }
        }
    }

    #[test]
    fn mixed_case() {
        assert_eq!(shift("M 1 1 l 5 5 L 2 2 h 3 H 4 z", 1.0, 2.0), "M 2 3 l 5 5 L 3 4 h 3 H 5 z");
    }

    #[test]
    fn zero_offset_keeps_values() {
        assert_eq!(
            shift("M 1.5 -2 L 3e2 4 A 1 2 3 0 1 5 6 Z", 0.0, 0.0),
            "M 1.5 -2 L 300 4 A 1 2 3 0 1 5 6 Z"
        );
    }

    #[test]
    fn implicit_repeats_use_the_active_command() {
        assert_eq!(shift("M 0 0 10 10 20 20", 1.0, 1.0), "M 1 1 11 11 21 21");
        assert_eq!(shift("H 1 2 3", 10.0, 0.0), "H 11 12 13");
    }

    #[test]
    fn separators_and_whitespace_are_normalized() {
        assert_eq!(shift("  M10,20\n\tL30-40  ", 0.0, 0.0), "M 10 20 L 30 -40");
    }

    #[test]
    fn empty_input() {
        assert_eq!(shift("", 3.0, 4.0), "");
        assert_eq!(shift_path_report("", DVec2::ZERO).truncation, None);
    }

    #[test]
    fn lone_close() {
        assert_eq!(shift("Z", 3.0, 4.0), "Z");
    }

    #[test]
    fn missing_operand_truncates() {
        assert_eq!(shift("M 10", 1.0, 1.0), "M");
        assert_eq!(shift("M 1 2 L 3 4 L 5", 1.0, 1.0), "M 2 3 L 4 5 L");
    }

    #[test]
    fn operands_after_close_truncate() {
        assert_eq!(shift("M 1 2 Z 3 4 L 5 6", 1.0, 1.0), "M 2 3 Z");
    }

    #[test]
    fn leading_number_truncates_everything() {
        assert_eq!(shift("10 M 1 2", 1.0, 1.0), "");
    }

    #[test]
    fn command_swallowed_as_operand() {
        // `L` sits in the y slot of `M`; it reads as NaN and the walk goes on
        // with `M` still active
        assert_eq!(shift("M 10 L 20 30", 5.0, 5.0), "M 15 0 25 35");
    }

    #[test]
    fn trailing_point_does_not_lose_the_number() {
        assert_eq!(shift("M 5. 3 L 1 2", 1.0, 1.0), "M 6 4 L 2 3");
    }

    #[test]
    fn report_counts_discarded_tokens() {
        let report = shift_path_report("M 1 2 L 3", DVec2::ZERO);
        assert_eq!(report.path, "M 1 2 L");
        assert_eq!(report.discarded(), 1);
        let truncation = report.truncation.unwrap();
        assert_eq!(truncation.at, 8);
        assert_eq!(
            truncation.reason,
            TruncationReason::IncompleteTuple {
                command: Command::from_letter('L').unwrap(),
                found: 1,
            }
        );

        let report = shift_path_report("M 1 2 z 3 4 5", DVec2::ZERO);
        assert_eq!(report.path, "M 1 2 z");
        assert_eq!(report.discarded(), 3);
    }

    #[test]
    fn report_is_clean_for_well_formed_input() {
        let report = shift_path_report("M 1 2 L 3 4 Z", DVec2::new(1.0, 1.0));
        assert_eq!(report.truncation, None);
        assert_eq!(report.discarded(), 0);
    }

    #[test]
    fn strict_mode() {
        assert_eq!(
            shift_path_strict("M 1 2", DVec2::new(1.0, 1.0)).unwrap(),
            "M 2 3"
        );

        let err = shift_path_strict("M 1 2 C 1 2 3", DVec2::ZERO).unwrap_err();
        assert_eq!(err.to_string(), "`C` needs 6 operands, found 3");

        let err = shift_path_strict("z 1", DVec2::ZERO).unwrap_err();
        assert_eq!(err.to_string(), "`z` takes no operands");

        let err = shift_path_strict("1 2", DVec2::ZERO).unwrap_err();
        assert!(matches!(err, ShiftError::NoCommand { discarded: 2, .. }));
    }
}
