/// Returns the length in bytes of `value` encoded as UTF-8.
///
/// Strings crossing in from the host are already converted to UTF-8 (lone
/// surrogates become U+FFFD, as the host's own encoder does), so this is
/// simply the encoded length and cannot fail.
pub fn bytes_for_string(value: &str) -> usize {
    value.len()
}

/// Formats a byte count as kilobytes with two decimal places.
pub fn format_kilobytes(bytes: usize) -> String {
    format!("{:.2}", bytes as f64 / 1024.0)
}

/// Formats a duration as whole milliseconds, e.g. `"123 ms"`.
pub fn format_millis(value_ms: f64) -> String {
    format!("{} ms", value_ms.round() as i64)
}
