/// Round `value` to `decimal_places` decimal places.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::round_to;
///
/// assert_eq!(round_to(33.33333, 2), 33.33);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// ```
pub fn round_to(value: f64, decimal_places: u32) -> f64 {
    let factor = 10_f64.powi(decimal_places as i32);
    (value * factor).round() / factor
}

/// Calculate `(part / whole) * 100`, rounded to `decimal_places`.
///
/// Returns `None` when `whole` is zero; callers turn that into a
/// no-data result.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::percentage;
///
/// assert_eq!(percentage(1.0, 4.0, 2), Some(25.0));
/// assert_eq!(percentage(0.0, 0.0, 2), None);
/// ```
pub fn percentage(part: f64, whole: f64, decimal_places: u32) -> Option<f64> {
    if whole == 0.0 {
        return None;
    }
    Some(round_to((part / whole) * 100.0, decimal_places))
}

/// Render `value` with its shortest round-tripping digits, keeping at least
/// one fractional digit so whole numbers read `100.0` rather than `100`.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_decimal;
///
/// assert_eq!(format_decimal(100.0), "100.0");
/// assert_eq!(format_decimal(66.67), "66.67");
/// assert_eq!(format_decimal(280871.79), "280871.79");
/// ```
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
