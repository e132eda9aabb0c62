//! Number formatting for output files.
//!
//! Mirrors C's `%.Ng`: `N` significant digits, fixed notation when the
//! decimal exponent lies in `[-4, N)`, scientific otherwise, trailing zeros
//! removed. NaN is written as `NaN`.

/// Format `value` with at most `digits` significant digits, `%g` style.
pub fn format_general(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    let precision = digits.max(1);

    // Exponent after rounding to `precision` digits, so 9.9999999999 rolls over.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..precision as i32).contains(&exponent) {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    }
}

/// Drop trailing zeros after a decimal point, and the point itself.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
