//! Number rendering shared by descriptions and displays.

/// Render a number the way the calculator shows it.
///
/// Integral values drop the fractional part, everything else uses the
/// shortest representation that round-trips.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if n == n.trunc() && n.abs() < 1e15 {
        // -0.0 prints as "0"
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
