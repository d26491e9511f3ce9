//! Console presentation of a session [`Summary`].

use crate::statistics::Summary;

/// Formats `value` with exactly `precision` digits after the decimal point.
pub fn format_value(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Formats `value` with six significant digits, following the `%g`
/// convention.
///
/// Exponents from -4 up to 5 print in fixed notation, anything else in
/// scientific notation with a signed two-digit exponent. Trailing zeros are
/// dropped in both cases.
///
/// ```text
/// 1.5     -> 1.5
/// 2.0     -> 2
/// 1e10    -> 1e+10
/// 1.234e-5 -> 1.234e-05
/// ```
pub fn format_general(value: f64) -> String {
    const SIGNIFICANT: i32 = 6;

    // Round to six significant digits first; rounding can bump the exponent
    let scientific = format!("{:.*e}", (SIGNIFICANT - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..SIGNIFICANT).contains(&exponent) {
        // Fixed notation keeps six significant digits in total
        let decimals = (SIGNIFICANT - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Joins values as `v1, v2, ...` with fixed precision.
pub fn format_values(values: &[f64], precision: usize) -> String {
    values
        .iter()
        .map(|&value| format_value(value, precision))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the summarized statistics block printed at the end of a session.
///
/// # Example
///
/// ```text
///
/// ***** Summarized Statistics *****
/// Sorted values (3): 1.0000, 2.0000, 2.0000
/// Mean: 1.6667
/// Median: 2.0000
/// Mode: 2.0000
/// ```
pub fn render_report(summary: &Summary, precision: usize) -> String {
    let mut out = String::from("\n***** Summarized Statistics *****\n");

    // Sorted listing with its count
    out.push_str(&format!(
        "Sorted values ({}): {}\n",
        summary.count(),
        format_values(&summary.sorted_values, precision)
    ));

    // One line per statistic
    out.push_str(&format!("Mean: {}\n", format_value(summary.mean, precision)));
    out.push_str(&format!("Median: {}\n", format_value(summary.median, precision)));
    out.push_str(&format!("Mode: {}\n", format_value(summary.mode, precision)));
    out
}

/// Lists the values read from one accepted source, six significant digits each.
pub fn render_source_listing(source: &str, values: &[f64]) -> String {
    let mut out = format!("List of {} values in {}:\n", values.len(), source);
    for &value in values {
        out.push_str(&format_general(value));
        out.push('\n');
    }
    out
}
