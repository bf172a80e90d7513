use std::any::Any;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{alpha_to_8bit, alpha_to_opacity, expand, format_css, format_hex};
use crate::Color;

/// Convert 8-bit red, green, blue, and alpha to red, green, blue, and opacity.
///
/// The opacity is truncated, not rounded, to two decimals. Hence an alpha of
/// `0x80`, i.e., 0.50196..., results in an opacity of exactly 0.5.
///
/// ```
/// # use tinct::rgba_to_css;
/// assert_eq!(rgba_to_css(0xff, 0xbf, 0x80, 0x80), (0xff, 0xbf, 0x80, 0.5));
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgba_to_css(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, f64) {
    (r, g, b, alpha_to_opacity(a))
}

/// A color as used by Cascading Style Sheets.
///
/// A CSS color combines 8-bit red, green, and blue with a floating point
/// opacity. The opacity nominally is `0.0..=1.0`, but it may be set to any
/// value. All methods use the [sanitized opacity](Css::sanitized_opacity)
/// instead.
///
/// # Formatting
///
/// The display format is `rgb()` for fully opaque colors and `rgba()`
/// otherwise, with the opacity printed without trailing zeros. The [hexadecimal
/// format](Css::hex_string) is `#RRGGBB` or `#RRGGBBAA`.
///
/// ```
/// # use tinct::Css;
/// let navy = Css::new(0, 0, 128, 1.0);
/// assert_eq!(format!("{}", navy), "rgb(0,0,128)");
/// assert_eq!(navy.hex_string(), "#000080");
///
/// let translucent_navy = Css::new(0, 0, 128, 0.5);
/// assert_eq!(format!("{}", translucent_navy), "rgba(0,0,128,0.5)");
/// assert_eq!(translucent_navy.hex_string(), "#00008080");
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "tinct"))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Css {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub opacity: f64,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Css {
    /// Create a new CSS color.
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, opacity: f64) -> Self {
        Self { r, g, b, opacity }
    }

    /// Create a new CSS color.
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, opacity: f64) -> Self {
        Self { r, g, b, opacity }
    }

    /// Create a new CSS color from 8-bit red, green, blue, and alpha.
    ///
    /// The opacity is truncated to two decimals, just as for [`rgba_to_css`].
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let (r, g, b, opacity) = rgba_to_css(r, g, b, a);
        Self::new(r, g, b, opacity)
    }

    /// Create a new CSS color from 8-bit red, green, blue, and alpha.
    ///
    /// The opacity is truncated to two decimals, just as for [`rgba_to_css`].
    #[cfg(not(feature = "pyffi"))]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let (r, g, b, opacity) = rgba_to_css(r, g, b, a);
        Self::new(r, g, b, opacity)
    }

    /// Get the sanitized opacity.
    ///
    /// This method returns the absolute value of the opacity, capped at 1.0.
    ///
    /// ```
    /// # use tinct::Css;
    /// assert_eq!(Css::new(0, 0, 0, -0.25).sanitized_opacity(), 0.25);
    /// assert_eq!(Css::new(0, 0, 0, 665.0).sanitized_opacity(), 1.0);
    /// ```
    #[inline]
    pub fn sanitized_opacity(&self) -> f64 {
        self.opacity.abs().min(1.0)
    }

    /// Format this color in CSS's hexadecimal notation.
    ///
    /// If the sanitized opacity is less than one, this method appends it as a
    /// fourth byte, rounded to the nearest integer.
    pub fn hex_string(&self) -> String {
        let opacity = self.sanitized_opacity();
        if opacity < 1.0 {
            format_hex(&[self.r, self.g, self.b, alpha_to_8bit(opacity)])
        } else {
            format_hex(&[self.r, self.g, self.b])
        }
    }

    /// Access this CSS color's red, green, blue, and opacity. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn coordinates(&self) -> (u8, u8, u8, f64) {
        (self.r, self.g, self.b, self.opacity)
    }

    /// Get this CSS color's 16-bit channels. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "to_rgba16")]
    pub fn py_to_rgba16(&self) -> [u16; 4] {
        Color::to_rgba16(self)
    }

    /// Convert this CSS color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!(
            "Css({}, {}, {}, {:?})",
            self.r, self.g, self.b, self.opacity
        )
    }

    /// Convert this CSS color to its `rgb()` or `rgba()` notation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Css {
    /// Create a new, fully opaque CSS color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Convert any color to a CSS color.
    ///
    /// If the color already is a CSS color, this function returns it.
    /// Otherwise, it reduces the color's 16-bit channels to 8 bits and then
    /// converts them just like [`Css::from_rgba8`].
    pub fn from_color(color: &dyn Color) -> Self {
        if let Some(css) = color.as_any().downcast_ref::<Self>() {
            return *css;
        }

        let [r, g, b, a] = color.to_rgba8();
        Self::from_rgba8(r, g, b, a)
    }
}

impl Color for Css {
    /// Get the 16-bit channels.
    ///
    /// The alpha channel is the sanitized opacity, rounded to the nearest 8-bit
    /// integer before expansion.
    fn to_rgba16(&self) -> [u16; 4] {
        expand([
            self.r,
            self.g,
            self.b,
            alpha_to_8bit(self.sanitized_opacity()),
        ])
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl std::fmt::Display for Css {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_css(&[self.r, self.g, self.b], self.sanitized_opacity(), f)
    }
}

#[cfg(test)]
mod test {
    use super::{rgba_to_css, Css};
    use crate::{Color, Hsla, Rgba};

    const NAMED: [(&str, [u8; 3]); 16] = [
        ("black", [0x00, 0x00, 0x00]),
        ("white", [0xff, 0xff, 0xff]),
        ("red", [0xff, 0x00, 0x00]),
        ("lime", [0x00, 0xff, 0x00]),
        ("blue", [0x00, 0x00, 0xff]),
        ("yellow", [0xff, 0xff, 0x00]),
        ("cyan", [0x00, 0xff, 0xff]),
        ("magenta", [0xff, 0x00, 0xff]),
        ("silver", [0xbf, 0xbf, 0xbf]),
        ("gray", [0x80, 0x80, 0x80]),
        ("maroon", [0x80, 0x00, 0x00]),
        ("olive", [0x80, 0x80, 0x00]),
        ("green", [0x00, 0x80, 0x00]),
        ("purple", [0x80, 0x00, 0x80]),
        ("teal", [0x00, 0x80, 0x80]),
        ("navy", [0x00, 0x00, 0x80]),
    ];

    #[test]
    fn test_hex_string() {
        for (name, [r, g, b]) in NAMED {
            let expected = format!("#{:02x}{:02x}{:02x}", r, g, b);
            let actual = Css::opaque(r, g, b).hex_string();
            assert!(
                actual.eq_ignore_ascii_case(&expected),
                "{} should be {} but is {}",
                name,
                expected,
                actual
            );
        }

        assert_eq!(Css::new(0, 0, 128, 0.5).hex_string(), "#00008080");
        assert_eq!(Css::new(0, 0, 128, 1.0).hex_string(), "#000080");
        assert_eq!(Css::new(0, 0, 128, -0.5).hex_string(), "#00008080");
        assert_eq!(Css::new(0, 0, 128, 2.0).hex_string(), "#000080");
        assert_eq!(Css::new(0xab, 0xcd, 0xef, 0.0).hex_string(), "#ABCDEF00");
    }

    #[test]
    fn test_string() {
        for (name, [r, g, b]) in NAMED {
            let expected = format!("rgb({},{},{})", r, g, b);
            assert_eq!(Css::opaque(r, g, b).to_string(), expected, "{}", name);
        }

        assert_eq!(Css::new(0, 0, 128, 0.5).to_string(), "rgba(0,0,128,0.5)");
        assert_eq!(Css::new(0, 0, 128, 0.543).to_string(), "rgba(0,0,128,0.54)");
        assert_eq!(Css::new(0, 0, 128, -0.25).to_string(), "rgba(0,0,128,0.25)");
        assert_eq!(Css::new(0, 0, 128, 1.5).to_string(), "rgb(0,0,128)");
        assert_eq!(Css::default().to_string(), "rgba(0,0,0,0)");
    }

    #[test]
    fn test_rgba16() {
        for (name, [r, g, b]) in NAMED {
            let expected = [r as u16 * 257, g as u16 * 257, b as u16 * 257, 0xffff];
            assert_eq!(Css::opaque(r, g, b).to_rgba16(), expected, "{}", name);
        }

        // Zero opacity, as for Css::default(), is fully transparent.
        assert_eq!(Css::new(0xbf, 0x7f, 0, 0.0).to_rgba16(), [0xbfbf, 0x7f7f, 0, 0]);
        assert_eq!(Css::new(0, 0, 0, 0.5).to_rgba16(), [0, 0, 0, 0x8080]);
        assert_eq!(Css::new(0, 0, 0, -1.0).to_rgba16(), [0, 0, 0, 0xffff]);
    }

    #[test]
    fn test_rgba_to_css() {
        assert_eq!(rgba_to_css(0xff, 0xbf, 0x80, 0x80), (0xff, 0xbf, 0x80, 0.5));
        assert_eq!(rgba_to_css(1, 2, 3, 0xff), (1, 2, 3, 1.0));
        assert_eq!(rgba_to_css(1, 2, 3, 0x00), (1, 2, 3, 0.0));

        // Truncated, not rounded: 0xfe is 0.99607...
        assert_eq!(rgba_to_css(1, 2, 3, 0xfe), (1, 2, 3, 0.99));

        let css = Css::from_rgba8(0xff, 0xbf, 0x80, 0x80);
        assert_eq!(css, Css::new(0xff, 0xbf, 0x80, 0.5));
    }

    #[test]
    fn test_from_color() {
        let rgba = Rgba::new(0x80, 0x80, 0x00, 0x00);
        assert_eq!(Css::from_color(&rgba), Css::new(0x80, 0x80, 0x00, 0.0));

        // The identity conversion preserves opacity beyond two decimals.
        let css = Css::new(0x80, 0x80, 0x80, 0.123456);
        assert_eq!(Css::from_color(&css), css);

        let hsla = Hsla::new(240.0, 1.0, 0.25, 0.5);
        assert_eq!(Css::from_color(&hsla), Css::new(0x00, 0x00, 0x7f, 0.5));
    }
}
