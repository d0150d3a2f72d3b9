//! Rough center of a path, for placing labels.
//!
//! This does not understand commands at all: every decimal literal in the
//! string is taken, alternately, as an x or a y coordinate. That is only right
//! for paths made of coordinate pairs (`M`/`L`/`T` and the like). Radii, flags
//! and rotation of `A`, and the single operands of `H`/`V`, throw it off.
//! Do not call it on such paths.

use crate::{PathParser, Rule};
use glam::DVec2;
use pest::Parser;

/// Mean of the alternating x/y values in `source`, plus `offset`.
///
/// With no numbers at all both components are NaN. With an odd count the
/// last x has no partner and the y component is NaN.
pub fn path_center(source: &str, offset: DVec2) -> DVec2 {
    let coords = decimals(source);

    let xs = coords.iter().step_by(2);
    let ys = coords.iter().skip(1).step_by(2);
    let x = mean(xs.copied(), coords.len().div_ceil(2));
    let y = if coords.len() % 2 == 0 {
        mean(ys.copied(), coords.len() / 2)
    } else {
        f64::NAN
    };

    DVec2::new(x, y) + offset
}

/// [`path_center`], or `None` when either component is undefined.
pub fn path_center_checked(source: &str, offset: DVec2) -> Option<DVec2> {
    let center = path_center(source, offset);
    if center.is_nan() { None } else { Some(center) }
}

/// Every `-?\d+(\.\d+)?` in `source`, in order.
fn decimals(source: &str) -> Vec<f64> {
    let Ok(mut pairs) = PathParser::parse(Rule::decimals, source) else {
        return Vec::new();
    };
    let Some(root) = pairs.next() else {
        return Vec::new();
    };
    root.into_inner()
        .filter(|p| p.as_rule() == Rule::DECIMAL)
        .filter_map(|p| p.as_str().parse::<f64>().ok())
        .collect()
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    values.sum::<f64>() / count as f64
}
