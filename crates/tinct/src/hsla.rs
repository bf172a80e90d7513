use std::any::Any;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    alpha_to_8bit, expand, from_24bit, from_8bit, hsl_to_rgb, rgb_to_hsl, to_24bit,
};
use crate::Color;

/// Convert 8-bit red, green, blue, and alpha to hue, saturation, lightness, and
/// alpha.
///
/// Hue is in degrees `0.0..360.0` and zero for grays. Saturation, lightness,
/// and alpha are `0.0..=1.0`.
///
/// ```
/// # use tinct::{assert_close_enough, rgba_to_hsla};
/// let (h, s, l, a) = rgba_to_hsla(0, 0, 0x80, 0xff);
/// assert_close_enough!(h, 240.0);
/// assert_close_enough!(s, 1.0);
/// assert_close_enough!(l, 128.0 / 510.0);
/// assert_close_enough!(a, 1.0);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgba_to_hsla(r: u8, g: u8, b: u8, a: u8) -> (f64, f64, f64, f64) {
    let [h, s, l] = rgb_to_hsl(&from_24bit(r, g, b));
    (h, s, l, from_8bit(a))
}

/// A color in the HSL model with alpha.
///
/// Hue `h` is in degrees. Though conversions from RGB always produce hues
/// `0.0..360.0`, a hue of any magnitude is acceptable and normalized modulo 360
/// before use, with negative hues wrapping forward. Saturation `s`, lightness
/// `l`, and alpha `a` are `0.0..=1.0`.
///
/// Conversion to RGB floors every channel after scaling it by 255, whereas it
/// rounds alpha.
///
/// ```
/// # use tinct::{Color, Hsla};
/// let cyan = Hsla::new(180.0, 1.0, 0.5, 1.0);
/// let also_cyan = Hsla::new(-180.0, 1.0, 0.5, 1.0);
/// assert_eq!(cyan.to_rgba8(), [0x00, 0xff, 0xff, 0xff]);
/// assert_eq!(also_cyan.to_rgba8(), cyan.to_rgba8());
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "tinct"))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Hsla {
    /// Create a new HSLA color.
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Create a new HSLA color.
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Create a new HSLA color from 8-bit red, green, blue, and alpha.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let (h, s, l, a) = rgba_to_hsla(r, g, b, a);
        Self::new(h, s, l, a)
    }

    /// Create a new HSLA color from 8-bit red, green, blue, and alpha.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let (h, s, l, a) = rgba_to_hsla(r, g, b, a);
        Self::new(h, s, l, a)
    }

    /// Access this HSLA color's hue, saturation, lightness, and alpha. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn coordinates(&self) -> [f64; 4] {
        [self.h, self.s, self.l, self.a]
    }

    /// Get this HSLA color's 16-bit channels. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "to_rgba16")]
    pub fn py_to_rgba16(&self) -> [u16; 4] {
        Color::to_rgba16(self)
    }

    /// Convert this HSLA color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Hsla({:?}, {:?}, {:?}, {:?})", self.h, self.s, self.l, self.a)
    }
}

impl Hsla {
    /// Convert any color to an HSLA color.
    ///
    /// If the color already is an HSLA color, this function returns it
    /// unchanged, without losing any precision. Otherwise, it reduces the
    /// color's 16-bit channels to 8 bits and converts them with
    /// [`rgba_to_hsla`].
    pub fn from_color(color: &dyn Color) -> Self {
        if let Some(hsla) = color.as_any().downcast_ref::<Self>() {
            return *hsla;
        }

        let [r, g, b, a] = color.to_rgba8();
        Self::from_rgba8(r, g, b, a)
    }
}

impl Color for Hsla {
    fn to_rgba16(&self) -> [u16; 4] {
        let [r, g, b] = to_24bit(&hsl_to_rgb(&[self.h, self.s, self.l]));
        expand([r, g, b, alpha_to_8bit(self.a)])
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod test {
    use super::{rgba_to_hsla, Hsla};
    use crate::{assert_close_enough, equal_within, Color, Rgba};

    #[test]
    fn test_rgba_to_hsla() {
        // name, rgba, hsla
        let cases: [(&str, [u8; 4], [f64; 4]); 17] = [
            ("black", [0, 0, 0, 255], [0.0, 0.0, 0.0, 1.0]),
            ("white", [255, 255, 255, 255], [0.0, 0.0, 1.0, 1.0]),
            ("red", [255, 0, 0, 255], [0.0, 1.0, 0.5, 1.0]),
            ("lime", [0, 255, 0, 255], [120.0, 1.0, 0.5, 1.0]),
            ("blue", [0, 0, 255, 255], [240.0, 1.0, 0.5, 1.0]),
            ("yellow", [255, 255, 0, 255], [60.0, 1.0, 0.5, 1.0]),
            ("cyan", [0, 255, 255, 255], [180.0, 1.0, 0.5, 1.0]),
            ("magenta", [255, 0, 255, 255], [300.0, 1.0, 0.5, 1.0]),
            ("silver", [191, 191, 191, 255], [0.0, 0.0, 0.75, 1.0]),
            ("gray", [128, 128, 128, 255], [0.0, 0.0, 0.5, 1.0]),
            ("maroon", [128, 0, 0, 255], [0.0, 1.0, 0.25, 1.0]),
            ("olive", [128, 128, 0, 255], [60.0, 1.0, 0.25, 1.0]),
            ("green", [0, 128, 0, 255], [120.0, 1.0, 0.25, 1.0]),
            ("purple", [128, 0, 128, 255], [300.0, 1.0, 0.25, 1.0]),
            ("teal", [0, 128, 128, 255], [180.0, 1.0, 0.25, 1.0]),
            ("navy", [0, 0, 128, 255], [240.0, 1.0, 0.25, 1.0]),
            ("navy_alpha", [0, 0, 128, 128], [240.0, 1.0, 0.25, 0.5]),
        ];

        for (name, [r, g, b, a], expected) in cases {
            let (h, s, l, a) = rgba_to_hsla(r, g, b, a);
            for (actual, expected) in [h, s, l, a].into_iter().zip(expected) {
                assert!(
                    equal_within(actual, expected, 1e-2),
                    "{}: {:?} should be close to {:?}",
                    name,
                    [h, s, l, a],
                    expected
                );
            }
        }
    }

    #[test]
    fn test_to_rgba16() {
        // name, hsl, rgb
        let cases: [(&str, [f64; 3], [u16; 3]); 20] = [
            ("black", [0.0, 0.0, 0.0], [0, 0, 0]),
            ("white", [0.0, 0.0, 1.0], [0xffff, 0xffff, 0xffff]),
            ("red", [0.0, 1.0, 0.5], [0xffff, 0, 0]),
            ("lime", [120.0, 1.0, 0.5], [0, 0xffff, 0]),
            ("blue", [240.0, 1.0, 0.5], [0, 0, 0xffff]),
            ("yellow", [60.0, 1.0, 0.5], [0xffff, 0xffff, 0]),
            ("cyan", [180.0, 1.0, 0.5], [0, 0xffff, 0xffff]),
            ("cyan_negative", [-180.0, 1.0, 0.5], [0, 0xffff, 0xffff]),
            ("magenta", [300.0, 1.0, 0.5], [0xffff, 0, 0xffff]),
            ("magenta_negative", [-60.0, 1.0, 0.5], [0xffff, 0, 0xffff]),
            ("magenta_wrapped", [660.0, 1.0, 0.5], [0xffff, 0, 0xffff]),
            ("silver", [0.0, 0.0, 0.75], [0xbfbf, 0xbfbf, 0xbfbf]),
            ("gray", [0.0, 0.0, 0.5], [0x7f7f, 0x7f7f, 0x7f7f]),
            ("maroon", [0.0, 1.0, 0.25], [0x7f7f, 0, 0]),
            ("olive", [60.0, 1.0, 0.25], [0x7f7f, 0x7f7f, 0]),
            ("green", [120.0, 1.0, 0.25], [0, 0x7f7f, 0]),
            ("purple", [300.0, 1.0, 0.25], [0x7f7f, 0, 0x7f7f]),
            ("teal", [180.0, 1.0, 0.25], [0, 0x7f7f, 0x7f7f]),
            ("navy", [240.0, 1.0, 0.25], [0, 0, 0x7f7f]),
            ("navy_wrapped", [-480.0, 1.0, 0.25], [0, 0, 0x7f7f]),
        ];

        for (name, [h, s, l], [r, g, b]) in cases {
            let hsla = Hsla::new(h, s, l, 0.0);
            assert_eq!(hsla.to_rgba16(), [r, g, b, 0], "{}", name);
        }

        assert_eq!(Hsla::new(0.0, 0.0, 0.0, 1.0).to_rgba16()[3], 0xffff);
        assert_eq!(Hsla::new(0.0, 0.0, 0.0, 0.5).to_rgba16()[3], 0x8080);
    }

    #[test]
    fn test_opposite_hues() {
        for (hue1, hue2) in [(-180.0, 180.0), (-60.0, 300.0), (0.0, 360.0), (-300.0, 60.0)] {
            for (s, l) in [(1.0, 0.5), (0.5, 0.5), (0.3, 0.8)] {
                let c1 = Hsla::new(hue1, s, l, 1.0);
                let c2 = Hsla::new(hue2, s, l, 1.0);
                assert_eq!(c1.to_rgba16(), c2.to_rgba16(), "{} vs {}", hue1, hue2);
            }
        }
    }

    #[test]
    fn test_from_color() {
        let gray = Rgba::new(128, 128, 128, 128);
        let hsla = Hsla::from_color(&gray);
        assert_eq!(hsla.h, 0.0);
        assert_eq!(hsla.s, 0.0);
        assert_close_enough!(hsla.l, 128.0 / 255.0);
        assert_close_enough!(hsla.a, 128.0 / 255.0);

        let hsla = Hsla::new(0.0, 0.0, 0.5, 0.5);
        assert_eq!(Hsla::from_color(&hsla), hsla);
    }

    #[test]
    fn test_round_trip() {
        for r in (0..=255_u8).step_by(3) {
            for g in (0..=255_u8).step_by(3) {
                for b in (0..=255_u8).step_by(3) {
                    let a = r ^ g ^ b;
                    let hsla = Hsla::from_rgba8(r, g, b, a);

                    assert!((0.0..360.0).contains(&hsla.h), "{:?}", hsla);
                    assert!((0.0..=1.0).contains(&hsla.s), "{:?}", hsla);
                    assert!((0.0..=1.0).contains(&hsla.l), "{:?}", hsla);
                    if r == g && g == b {
                        assert_eq!(hsla.h, 0.0);
                        assert_eq!(hsla.s, 0.0);
                    }

                    assert_eq!(hsla.to_rgba8(), [r, g, b, a], "{:?}", hsla);
                }
            }
        }
    }
}
