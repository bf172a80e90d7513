use std::any::Any;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    alpha_to_8bit, expand, from_24bit, from_8bit, hsv_to_rgb, rgb_to_hsv, to_24bit,
};
use crate::Color;

/// Convert 8-bit red, green, blue, and alpha to hue, saturation, value, and
/// alpha.
///
/// Hue is in degrees `0.0..360.0` and zero for grays. Saturation, value, and
/// alpha are `0.0..=1.0`.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgba_to_hsva(r: u8, g: u8, b: u8, a: u8) -> (f64, f64, f64, f64) {
    let [h, s, v] = rgb_to_hsv(&from_24bit(r, g, b));
    (h, s, v, from_8bit(a))
}

/// A color in the HSV model with alpha.
///
/// The HSV model is also known as HSB, for hue, saturation, and brightness.
/// Hue `h` is in degrees and normalized modulo 360 before use, just as for
/// [`Hsla`](crate::Hsla). Saturation `s`, value `v`, and alpha `a` are
/// `0.0..=1.0`. If the saturation is zero within the [default
/// precision](crate::DEFAULT_PRECISION), the color is gray regardless of hue.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "tinct"))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Hsva {
    /// Create a new HSVA color.
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self { h, s, v, a }
    }

    /// Create a new HSVA color.
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self { h, s, v, a }
    }

    /// Create a new HSVA color from 8-bit red, green, blue, and alpha.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let (h, s, v, a) = rgba_to_hsva(r, g, b, a);
        Self::new(h, s, v, a)
    }

    /// Create a new HSVA color from 8-bit red, green, blue, and alpha.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let (h, s, v, a) = rgba_to_hsva(r, g, b, a);
        Self::new(h, s, v, a)
    }

    /// Access this HSVA color's hue, saturation, value, and alpha. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn coordinates(&self) -> [f64; 4] {
        [self.h, self.s, self.v, self.a]
    }

    /// Get this HSVA color's 16-bit channels. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "to_rgba16")]
    pub fn py_to_rgba16(&self) -> [u16; 4] {
        Color::to_rgba16(self)
    }

    /// Convert this HSVA color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Hsva({:?}, {:?}, {:?}, {:?})", self.h, self.s, self.v, self.a)
    }
}

impl Hsva {
    /// Convert any color to an HSVA color.
    ///
    /// An HSVA color is returned as is. Any other color is reduced to 8-bit
    /// channels first.
    pub fn from_color(color: &dyn Color) -> Self {
        if let Some(hsva) = color.as_any().downcast_ref::<Self>() {
            return *hsva;
        }

        let [r, g, b, a] = color.to_rgba8();
        Self::from_rgba8(r, g, b, a)
    }
}

impl Color for Hsva {
    fn to_rgba16(&self) -> [u16; 4] {
        let [r, g, b] = to_24bit(&hsv_to_rgb(&[self.h, self.s, self.v]));
        expand([r, g, b, alpha_to_8bit(self.a)])
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
