use std::any::Any;

use crate::core::reduce;
use crate::{Css, Hsla, Hsva, Rgba};

/// The canonical color capability.
///
/// Every color representation in this crate implements this trait, and so may
/// any color type outside it. The trait's only real obligation is
/// [`Color::to_rgba16`], which reports red, green, blue, and alpha as 16-bit
/// channels. Since any color can do that, any color can be converted to any
/// other through these four channels.
///
/// Channels are stored unpremultiplied. An 8-bit channel `v` expands to the
/// 16-bit channel `v << 8 | v`, i.e., `v * 257`. Conversely, a 16-bit channel
/// reduces to 8 bits by dropping the least significant byte.
///
/// # Identity
///
/// [`Color::as_any`] exposes the concrete type, so that conversions can skip
/// the lossy round trip through 8-bit channels when the source already has the
/// target representation:
///
/// ```
/// # use tinct::Hsla;
/// let orange = Hsla::new(30.000_000_1, 1.0, 0.5, 1.0);
/// assert_eq!(Hsla::from_color(&orange), orange);
/// ```
pub trait Color: Any {
    /// Get the 16-bit red, green, blue, and alpha channels.
    fn to_rgba16(&self) -> [u16; 4];

    /// Access this color as a dynamically typed value.
    fn as_any(&self) -> &dyn Any;

    /// Get the 8-bit red, green, blue, and alpha channels.
    fn to_rgba8(&self) -> [u8; 4] {
        reduce(self.to_rgba16())
    }
}

// ====================================================================================================================
// Model
// ====================================================================================================================

/// The color models.
///
/// Each variant is a stateless converter that turns any color into the
/// corresponding representation, wrapped as a [`Colorant`]. If the color
/// already has that representation, it is returned unchanged.
///
/// ```
/// # use tinct::{Colorant, Css, Model, Rgba};
/// let navy = Rgba::new(0, 0, 0x80, 0xff);
/// let css = Model::Css.convert(&navy);
/// assert_eq!(css, Colorant::Css(Css::new(0, 0, 0x80, 1.0)));
/// assert_eq!(css.model(), Model::Css);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Model {
    Rgba,
    Css,
    Hsla,
    Hsva,
}

impl Model {
    /// Convert the color to this model.
    pub fn convert(&self, color: &dyn Color) -> Colorant {
        match *self {
            Self::Rgba => Colorant::Rgba(Rgba::from_color(color)),
            Self::Css => Colorant::Css(Css::from_color(color)),
            Self::Hsla => Colorant::Hsla(Hsla::from_color(color)),
            Self::Hsva => Colorant::Hsva(Hsva::from_color(color)),
        }
    }

    /// Get this model's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Rgba => "RGBA",
            Self::Css => "CSS",
            Self::Hsla => "HSLA",
            Self::Hsva => "HSVA",
        }
    }
}

// ====================================================================================================================
// Colorant
// ====================================================================================================================

/// A colorant combines all of this crate's color representations.
///
/// A colorant is a color, too. It forwards [`Color::as_any`] to the wrapped
/// representation, so that converting a colorant to the representation it
/// already holds is lossless.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Colorant {
    Rgba(Rgba),
    Css(Css),
    Hsla(Hsla),
    Hsva(Hsva),
}

impl Colorant {
    /// Determine the model of the wrapped color.
    pub const fn model(&self) -> Model {
        match *self {
            Self::Rgba(_) => Model::Rgba,
            Self::Css(_) => Model::Css,
            Self::Hsla(_) => Model::Hsla,
            Self::Hsva(_) => Model::Hsva,
        }
    }

    /// Access the wrapped color.
    pub fn as_color(&self) -> &dyn Color {
        match *self {
            Self::Rgba(ref c) => c,
            Self::Css(ref c) => c,
            Self::Hsla(ref c) => c,
            Self::Hsva(ref c) => c,
        }
    }
}

impl Color for Colorant {
    fn to_rgba16(&self) -> [u16; 4] {
        self.as_color().to_rgba16()
    }

    fn as_any(&self) -> &dyn Any {
        self.as_color().as_any()
    }
}

impl From<Rgba> for Colorant {
    fn from(value: Rgba) -> Self {
        Self::Rgba(value)
    }
}

impl From<Css> for Colorant {
    fn from(value: Css) -> Self {
        Self::Css(value)
    }
}

impl From<Hsla> for Colorant {
    fn from(value: Hsla) -> Self {
        Self::Hsla(value)
    }
}

impl From<Hsva> for Colorant {
    fn from(value: Hsva) -> Self {
        Self::Hsva(value)
    }
}
