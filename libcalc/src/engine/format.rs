//! Display text <-> number conversions

/// Decimal places kept when rendering a fractional result
pub const DISPLAY_PRECISION: i32 = 8;

/// Render a result for the display
///
/// Integral values print without a fractional part. Fractional values are
/// rounded half-up to [`DISPLAY_PRECISION`] places to hide binary floating
/// point noise (`0.1 + 0.2` shows as `0.3`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // also covers -0.0
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{}", value);
    }

    let scale = 10f64.powi(DISPLAY_PRECISION);
    let rounded = (value * scale + 0.5).floor() / scale;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Parse display text into a number
///
/// Accepts the partial numerals produced while typing (`"12."`) and rejects
/// anything that is not a finite number.
pub fn parse_display(display: &str) -> Option<f64> {
    display
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
