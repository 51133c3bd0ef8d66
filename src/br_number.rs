// 🔢 BR Number Convention - parse and render no padrão brasileiro
// Period groups thousands, comma marks the decimal: 1234567.89 -> "1.234.567,89"

// ============================================================================
// PARSING
// ============================================================================

/// Parse a string typed in the BR convention into a number.
///
/// Empty or whitespace-only input parses to `Some(0.0)`. Otherwise every
/// period is dropped (grouping separators) and every comma becomes a period
/// (decimal separator) before reading the number.
///
/// Ex: "20.000.000" -> Some(20000000.0), "1.234,56" -> Some(1234.56)
pub fn parse_br_number(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return Some(0.0);
    }

    let cleaned: String = text
        .chars()
        .filter(|&c| c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    parse_float_prefix(&cleaned)
}

/// Read the longest leading float out of `s`: optional sign, digits, at most
/// one decimal point. No exponent forms. Trailing garbage is ignored; input
/// with no digits at all yields None.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }

    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }

    if digits == 0 {
        return None;
    }

    s[..end].parse().ok()
}

// ============================================================================
// RENDERING
// ============================================================================

/// Group the integer digits of `n` in threes with '.' separators.
///
/// Ex: 1234567 -> "1.234.567"
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::new();

    for (count, ch) in digits.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            grouped.insert(0, '.');
        }
        grouped.insert(0, ch);
    }

    if n < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// Render a number as a BR integer (truncated toward zero, grouped).
///
/// Ex: 20000000.0 -> "20.000.000"
pub fn format_br_int(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    format_thousands(value.trunc() as i64)
}

/// Render a number with a fixed count of decimal places.
///
/// Ex: 12345.67 -> "12.345,67"
pub fn format_br_float(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scale = 10f64.powi(decimals as i32);
    // Round in scaled integer space so carries propagate (9.999 -> "10,00")
    let scaled = (value.abs() * scale).round() as i64;
    let integer = scaled / scale as i64;
    let frac = scaled % scale as i64;

    if decimals > 0 {
        format!(
            "{}{},{:0width$}",
            sign,
            format_thousands(integer),
            frac,
            width = decimals
        )
    } else {
        format!("{}{}", sign, format_thousands(integer))
    }
}

/// Render with minimum 0 and maximum `max_decimals` fraction digits: the
/// value is rounded half away from zero and trailing fraction zeros are
/// dropped.
///
/// Ex: 1000.5 -> "1.000,5", 1000.0 -> "1.000", 1000.567 -> "1.000,57"
pub fn format_br_auto(value: f64, max_decimals: u32) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let mut decimals = max_decimals;
    let mut scaled = (value.abs() * 10f64.powi(max_decimals as i32)).round() as u64;

    while decimals > 0 && scaled % 10 == 0 {
        scaled /= 10;
        decimals -= 1;
    }

    let divisor = 10u64.pow(decimals);
    let integer = (scaled / divisor) as i64;
    let frac = scaled % divisor;

    if decimals > 0 {
        format!(
            "{}{},{:0width$}",
            sign,
            format_thousands(integer),
            frac,
            width = decimals as usize
        )
    } else {
        format!("{}{}", sign, format_thousands(integer))
    }
}

// ============================================================================
// TESTS
// ============================================================================
