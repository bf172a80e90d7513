use super::{equal, DEFAULT_PRECISION};

/// Convert the given 8-bit channel to a unit-range float.
#[inline]
pub(crate) fn from_8bit(value: u8) -> f64 {
    value as f64 / 255.0
}

/// Convert the given 24-bit RGB coordinates to unit-range floating point
/// coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [f64; 3] {
    [from_8bit(r), from_8bit(g), from_8bit(b)]
}

/// Expand the 8-bit channel to 16 bits by replicating its bits, i.e.,
/// multiplying it by 257.
#[inline]
pub(crate) const fn to_16bit(value: u8) -> u16 {
    ((value as u16) << 8) | value as u16
}

/// Reduce the 16-bit channel to its most significant 8 bits.
#[inline]
pub(crate) const fn to_8bit(value: u16) -> u8 {
    (value >> 8) as u8
}

/// Expand all four 8-bit channels to 16 bits.
#[inline]
pub(crate) const fn expand(value: [u8; 4]) -> [u16; 4] {
    let [r, g, b, a] = value;
    [to_16bit(r), to_16bit(g), to_16bit(b), to_16bit(a)]
}

/// Reduce all four 16-bit channels to 8 bits.
#[inline]
pub(crate) const fn reduce(value: [u16; 4]) -> [u8; 4] {
    let [r, g, b, a] = value;
    [to_8bit(r), to_8bit(g), to_8bit(b), to_8bit(a)]
}

/// Convert the unit-range alpha to an 8-bit channel by rounding.
///
/// The cast saturates, so that out-of-range values clamp to `0x00..=0xff` and
/// not-a-number becomes zero.
#[inline]
pub(crate) fn alpha_to_8bit(alpha: f64) -> u8 {
    (alpha * 255.0).round() as u8
}

/// Convert the 8-bit alpha to an opacity truncated to two decimals.
///
/// Truncation is intentional: `0x80` is 0.50196... and becomes 0.5, never 0.51.
#[inline]
pub(crate) fn alpha_to_opacity(alpha: u8) -> f64 {
    (from_8bit(alpha) * 100.0).floor() / 100.0
}

/// Convert the unit-range RGB coordinates to 24-bit representation by
/// flooring.
///
/// Each coordinate is nudged up by [`DEFAULT_PRECISION`] first, so that a value
/// such as 127.99999999999997, i.e., 128 with rounding noise, floors to 128.
/// Out-of-range coordinates clamp to `0x00..=0xff`.
pub(crate) fn to_24bit(value: &[f64; 3]) -> [u8; 3] {
    #[inline]
    fn convert(value: f64) -> u8 {
        value.mul_add(255.0, DEFAULT_PRECISION).floor() as u8
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the hue to `0.0..360.0`.
///
/// Unlike `(h + 360) % 360`, this also wraps hues below -360 forward. A tiny
/// negative hue may round up to exactly 360, which is mapped back to 0.
#[inline]
pub(crate) fn normalize_hue(hue: f64) -> f64 {
    let hue = hue.rem_euclid(360.0);
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Determine the hue of the RGB coordinates.
///
/// The dominant channel is found by exact comparison in the order red, green,
/// blue. Hence red wins ties with green, and green wins ties with blue. The
/// result is in `0.0..360.0`.
#[inline]
fn rgb_to_hue(value: &[f64; 3], max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }

    let [r, g, b] = *value;
    let hue = if max == r {
        60.0_f64.mul_add(((g - b) / delta) % 6.0, 360.0)
    } else if max == g {
        60.0_f64.mul_add((b - r) / delta + 2.0, 360.0)
    } else {
        60.0_f64.mul_add((r - g) / delta + 4.0, 360.0)
    };

    hue % 360.0
}

/// Determine the largest and smallest coordinate.
#[inline]
fn max_min(value: &[f64; 3]) -> (f64, f64) {
    let [r, g, b] = *value;
    (r.max(g.max(b)), r.min(g.min(b)))
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert unit-range RGB coordinates to HSL coordinates.
pub(crate) fn rgb_to_hsl(value: &[f64; 3]) -> [f64; 3] {
    let (max, min) = max_min(value);
    let delta = max - min;

    let lightness = (max + min) / 2.0;
    let saturation = if delta == 0.0 {
        0.0
    } else {
        // Rounding noise may push the quotient past 1.
        (delta / (1.0 - 2.0_f64.mul_add(lightness, -1.0).abs())).min(1.0)
    };

    [rgb_to_hue(value, max, delta), saturation, lightness]
}

/// Convert HSL coordinates to unit-range RGB coordinates.
///
/// The hue is normalized first and may have any magnitude.
pub(crate) fn hsl_to_rgb(value: &[f64; 3]) -> [f64; 3] {
    let [h, s, l] = *value;
    let h = normalize_hue(h);

    let c = (1.0 - 2.0_f64.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = c.mul_add(-0.5, l);

    match (h / 60.0).floor() as u8 {
        0 => [c + m, x + m, m],
        1 => [x + m, c + m, m],
        2 => [m, c + m, x + m],
        3 => [m, x + m, c + m],
        4 => [x + m, m, c + m],
        _ => [c + m, m, x + m],
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert unit-range RGB coordinates to HSV coordinates.
pub(crate) fn rgb_to_hsv(value: &[f64; 3]) -> [f64; 3] {
    let (max, min) = max_min(value);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    [rgb_to_hue(value, max, delta), saturation, max]
}

/// Convert HSV coordinates to unit-range RGB coordinates.
///
/// If the saturation is zero within the default precision, the result is gray
/// independent of hue.
pub(crate) fn hsv_to_rgb(value: &[f64; 3]) -> [f64; 3] {
    let [h, s, v] = *value;
    if equal(s, 0.0) {
        return [v, v, v];
    }

    let sextant = normalize_hue(h) / 60.0;
    let i = sextant.floor();
    let f = sextant - i;

    let p = v * (1.0 - s);
    let q = v * s.mul_add(-f, 1.0);
    let t = v * s.mul_add(f - 1.0, 1.0);

    match i as u8 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
