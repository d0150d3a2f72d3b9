//! Translate SVG path data by an offset.
//!
//! Shapes on the crag map are drawn in their own local frame and placed with an
//! `(x, y)` offset. [`shift_path`] bakes that offset into the path data: the
//! operands of absolute commands (`M`, `L`, `H`, `V`, `C`, `S`, `Q`, `T`, `A`)
//! are translated, relative commands are copied as they are, and any value
//! that ends up NaN or infinite is written as `0`.
//!
//! ```
//! use glam::DVec2;
//!
//! let d = routeshift::shift_path("M 10 20 L 30 40 l 5 5", DVec2::new(5.0, 5.0));
//! assert_eq!(d, "M 15 25 L 35 45 l 5 5");
//! ```
//!
//! Malformed input is never rejected by [`shift_path`]; trailing data that does
//! not form a complete operand tuple is dropped. Callers that want to know
//! about it use [`shift_path_report`] or [`shift_path_strict`].

use pest_derive::Parser;

pub mod batch;
pub mod center;
pub mod command;
pub mod errors;
pub mod log;
pub mod number;
pub mod shift;
pub mod token;

pub use batch::{CragShape, PathRecord, apply_shift};
pub use center::{path_center, path_center_checked};
pub use command::{Command, CommandKind};
pub use errors::{RecordError, ShiftError};
pub use shift::{ShiftReport, shift_path, shift_path_report, shift_path_strict};
pub use token::{Token, Tokens, tokenize};

#[cfg(feature = "parallel")]
pub use batch::apply_shift_par;

#[derive(Parser)]
#[grammar = "path.pest"]
pub struct PathParser;
