//! Path commands and their operand shapes.

use glam::DVec2;
use std::fmt;

/// The drawing operation named by a command letter, ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `M`
    MoveTo,
    /// `L`
    LineTo,
    /// `H`
    HorizontalTo,
    /// `V`
    VerticalTo,
    /// `C`
    CurveTo,
    /// `S`
    SmoothCurveTo,
    /// `Q`
    QuadTo,
    /// `T`
    SmoothQuadTo,
    /// `A`
    ArcTo,
    /// `Z`
    ClosePath,
}

impl CommandKind {
    pub fn from_letter(letter: char) -> Option<CommandKind> {
        match letter.to_ascii_uppercase() {
            'M' => Some(CommandKind::MoveTo),
            'L' => Some(CommandKind::LineTo),
            'H' => Some(CommandKind::HorizontalTo),
            'V' => Some(CommandKind::VerticalTo),
            'C' => Some(CommandKind::CurveTo),
            'S' => Some(CommandKind::SmoothCurveTo),
            'Q' => Some(CommandKind::QuadTo),
            'T' => Some(CommandKind::SmoothQuadTo),
            'A' => Some(CommandKind::ArcTo),
            'Z' => Some(CommandKind::ClosePath),
            _ => None,
        }
    }

    /// Uppercase letter of this command.
    pub fn letter(self) -> char {
        match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalTo => 'H',
            CommandKind::VerticalTo => 'V',
            CommandKind::CurveTo => 'C',
            CommandKind::SmoothCurveTo => 'S',
            CommandKind::QuadTo => 'Q',
            CommandKind::SmoothQuadTo => 'T',
            CommandKind::ArcTo => 'A',
            CommandKind::ClosePath => 'Z',
        }
    }

    /// Number of operands consumed per tuple.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::ClosePath => 0,
            CommandKind::HorizontalTo | CommandKind::VerticalTo => 1,
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadTo => 2,
            CommandKind::SmoothCurveTo | CommandKind::QuadTo => 4,
            CommandKind::CurveTo => 6,
            CommandKind::ArcTo => 7,
        }
    }

    /// Translate one operand tuple of an absolute command.
    ///
    /// `operands` holds exactly [`arity`](Self::arity) values. Arc radii,
    /// rotation and flags are left alone; only the arc endpoint moves.
    pub fn translate(self, operands: &mut [f64], offset: DVec2) {
        match self {
            CommandKind::ClosePath => {}
            CommandKind::HorizontalTo => operands[0] += offset.x,
            CommandKind::VerticalTo => operands[0] += offset.y,
            CommandKind::ArcTo => {
                operands[5] += offset.x;
                operands[6] += offset.y;
            }
            CommandKind::MoveTo
            | CommandKind::LineTo
            | CommandKind::CurveTo
            | CommandKind::SmoothCurveTo
            | CommandKind::QuadTo
            | CommandKind::SmoothQuadTo => {
                for pair in operands.chunks_mut(2) {
                    pair[0] += offset.x;
                    if let Some(y) = pair.get_mut(1) {
                        *y += offset.y;
                    }
                }
            }
        }
    }
}

/// A command letter as written: its kind plus absolute/relative case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command {
    pub kind: CommandKind,
    /// Uppercase letter. Relative (lowercase) operands are offset invariant.
    pub absolute: bool,
}

impl Command {
    pub fn from_letter(letter: char) -> Option<Command> {
        CommandKind::from_letter(letter).map(|kind| Command {
            kind,
            absolute: letter.is_ascii_uppercase(),
        })
    }

    pub fn letter(self) -> char {
        let letter = self.kind.letter();
        if self.absolute {
            letter
        } else {
            letter.to_ascii_lowercase()
        }
    }

    pub fn arity(self) -> usize {
        self.kind.arity()
    }

    /// Translate `operands` if this command is absolute.
    pub fn apply_offset(self, operands: &mut [f64], offset: DVec2) {
        if self.absolute {
            self.kind.translate(operands, offset);
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
