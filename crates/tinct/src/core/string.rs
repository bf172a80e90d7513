use std::fmt::Write;

use super::equal;

/// Format the opacity with as few digits as possible.
///
/// An opacity with at most two decimals, give or take rounding noise, is
/// printed without trailing zeros. Any other opacity is rounded to two
/// decimals for display.
fn format_opacity(opacity: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let scaled = opacity * 100.0;
    let rounded = scaled.round();
    if equal(scaled, rounded) {
        f.write_fmt(format_args!("{}", rounded / 100.0))
    } else {
        f.write_fmt(format_args!("{:.2}", opacity))
    }
}

/// Format the RGB coordinates and opacity in CSS functional notation.
///
/// Fully opaque colors use `rgb()`, all others `rgba()`. The opacity must have
/// been sanitized already.
pub(crate) fn format_css(
    rgb: &[u8; 3],
    opacity: f64,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [r, g, b] = *rgb;
    if opacity < 1.0 {
        f.write_fmt(format_args!("rgba({},{},{},", r, g, b))?;
        format_opacity(opacity, f)?;
        f.write_str(")")
    } else {
        f.write_fmt(format_args!("rgb({},{},{})", r, g, b))
    }
}

/// Format the bytes in hashed hexadecimal notation with uppercase digits.
pub(crate) fn format_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(1 + 2 * bytes.len());
    s.push('#');
    for byte in bytes {
        // Writing to a string cannot fail.
        let _ = write!(s, "{:02X}", byte);
    }
    s
}

// ====================================================================================================================
