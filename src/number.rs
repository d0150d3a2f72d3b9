//! Numeric literals: reading path operands and writing them back.

/// Value of a `NUMBER` literal.
///
/// The grammar only admits decimal and exponent forms, all of which `f64`
/// parsing accepts. Anything else becomes NaN and is later written as `0`.
pub fn parse_literal(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Value of a `NONFINITE` literal (`Infinity`/`NaN`, optionally signed).
pub fn parse_nonfinite(text: &str) -> f64 {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    match body {
        "Infinity" if negative => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => f64::NAN,
    }
}

/// Replace NaN and infinities by zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Format a number the way the map data has always been written.
///
/// Shortest round-trip digits, no fraction for integers, `-0` as `0`, and
/// exponent notation (`1e+21`, `1e-7`) once the decimal exponent leaves
/// `[-6, 21)`. Non-finite values are written as `0`.
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.2345e3"
    let sci = format!("{:e}", value.abs());
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // value = 0.digits * 10^n
    let n = exp + 1;

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }

    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat_n('0', (n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-n) as usize));
        out.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if n - 1 >= 0 { '+' } else { '-' });
        out.push_str(&(n - 1).abs().to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        assert_eq!(parse_literal("10"), 10.0);
        assert_eq!(parse_literal("+2.5"), 2.5);
        assert_eq!(parse_literal("-.5"), -0.5);
        assert_eq!(parse_literal("1e3"), 1000.0);
        assert_eq!(parse_literal("1E-2"), 0.01);
        assert!(parse_literal("").is_nan());
    }

    #[test]
    fn nonfinite_literals() {
        assert_eq!(parse_nonfinite("Infinity"), f64::INFINITY);
        assert_eq!(parse_nonfinite("+Infinity"), f64::INFINITY);
        assert_eq!(parse_nonfinite("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_nonfinite("NaN").is_nan());
        assert!(parse_nonfinite("-NaN").is_nan());
    }

    #[test]
    fn finite_or_zero_coerces() {
        assert_eq!(finite_or_zero(1.5), 1.5);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn integers_and_fractions() {
        assert_eq!(fmt_num(15.0), "15");
        assert_eq!(fmt_num(-3.0), "-3");
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(-0.25), "-0.25");
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(123.456), "123.456");
    }

    #[test]
    fn zero_has_no_sign() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0), "0");
    }

    #[test]
    fn shortest_round_trip() {
        assert_eq!(fmt_num(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(fmt_num(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn small_and_large_magnitudes() {
        assert_eq!(fmt_num(0.000001), "0.000001");
        assert_eq!(fmt_num(0.0000001), "1e-7");
        assert_eq!(fmt_num(1.5e-7), "1.5e-7");
        assert_eq!(fmt_num(1e20), "100000000000000000000");
        assert_eq!(fmt_num(1e21), "1e+21");
        assert_eq!(fmt_num(-2.5e22), "-2.5e+22");
    }

    #[test]
    fn nonfinite_prints_zero() {
        assert_eq!(fmt_num(f64::NAN), "0");
        assert_eq!(fmt_num(f64::INFINITY), "0");
    }
}
