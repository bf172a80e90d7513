//! # Tinct
//!
//! Tinct converts colors between a handful of everyday color models: plain
//! 8-bit RGBA, CSS's `rgb()`/`rgba()` colors with floating point opacity, and
//! the cylindrical HSL and HSV models.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature to also document the Python integration. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. Methods marked as Python only are not available from Rust. "
)]
//!
//!
//! ## 1. Overview
//!
//! Tinct's main abstractions are:
//!
//!   * The [`Color`] trait is the **canonical color capability**. Any type
//!     that reports 16-bit red, green, blue, and alpha channels is a color and
//!     hence can be converted to any other color.
//!   * [`Rgba`], [`Css`], [`Hsla`], and [`Hsva`] are the **color
//!     representations**. Each of them implements [`Color`] and has a
//!     `from_color` constructor that accepts any color.
//!   * [`Model`] names the representations and **converts any color** to one
//!     of them, returning the result as a [`Colorant`].
//!
//! Converting a color to the representation it already has returns the color
//! unchanged. Everything else goes through 8-bit channels:
//!
//! ```
//! # use tinct::{Color, Css, Hsla, Hsva};
//! let purple = Hsla::new(300.0, 1.0, 0.25, 1.0);
//! let css = Css::from_color(&purple);
//! assert_eq!(css.to_string(), "rgb(127,0,127)");
//! assert_eq!(css.hex_string(), "#7F007F");
//!
//! let hsva = Hsva::from_color(&css);
//! assert_eq!(hsva.to_rgba8(), [0x7f, 0x00, 0x7f, 0xff]);
//! ```
//!
//!
//! ## 2. Precision
//!
//! Hue, saturation, lightness, value, and alpha are `f64`. Floating point
//! quantities are compared with [`equal`], which tolerates differences up to
//! [`DEFAULT_PRECISION`]. Conversions from floating point to 8-bit channels
//! floor, with that same tolerance, so that every 8-bit color survives the
//! round trip through HSL or HSV unchanged. Alpha, in contrast, is rounded to
//! the nearest 8-bit value and CSS opacity is truncated to two decimals.

mod core;
mod css;
mod hsla;
mod hsva;
mod model;
mod rgba;

pub use core::{equal, equal_within, DEFAULT_PRECISION};

#[doc(hidden)]
pub use core::to_eq_bits;

pub use css::{rgba_to_css, Css};
pub use hsla::{rgba_to_hsla, Hsla};
pub use hsva::{rgba_to_hsva, Hsva};
pub use model::{Color, Colorant, Model};
pub use rgba::Rgba;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn tinct(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(equal, m)?)?;
    m.add_function(wrap_pyfunction!(equal_within, m)?)?;
    m.add_function(wrap_pyfunction!(rgba_to_css, m)?)?;
    m.add_function(wrap_pyfunction!(rgba_to_hsla, m)?)?;
    m.add_function(wrap_pyfunction!(rgba_to_hsva, m)?)?;

    m.add_class::<Css>()?;
    m.add_class::<Hsla>()?;
    m.add_class::<Hsva>()?;
    m.add_class::<Rgba>()?;

    m.add("DEFAULT_PRECISION", DEFAULT_PRECISION)?;

    Ok(())
}
