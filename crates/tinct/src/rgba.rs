use std::any::Any;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::expand;
use crate::Color;

/// A plain 8-bit RGBA color.
///
/// The four channels are red, green, blue, and alpha, in that order, and they
/// are not premultiplied. This is the simplest possible implementation of
/// [`Color`] and a good stand-in for colors from elsewhere.
///
/// Both Rust and Python code can access individual channels by indexing an
/// RGBA color with integers `0..=3`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "tinct")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba([u8; 4]);

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgba {
    /// Create a new RGBA color from its channels. <i class=python-only>Python
    /// only!</i>
    #[new]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Access this RGBA color's channels. <i class=python-only>Python
    /// only!</i>
    pub fn channels(&self) -> [u8; 4] {
        self.0
    }

    /// Get this RGBA color's 16-bit channels. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "to_rgba16")]
    pub fn py_to_rgba16(&self) -> [u16; 4] {
        Color::to_rgba16(self)
    }

    /// Get this RGBA color's length, which is 4. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        4
    }

    /// Get the channel at the given index. <i class=python-only>Python
    /// only!</i>
    pub fn __getitem__(&self, index: isize) -> PyResult<u8> {
        match index {
            -4..=-1 => Ok(self.0[(4 + index) as usize]),
            0..=3 => Ok(self.0[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid channel index",
            )),
        }
    }

    /// Convert this RGBA color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        let [r, g, b, a] = self.0;
        format!("Rgba({}, {}, {}, {})", r, g, b, a)
    }

    /// Convert this RGBA color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

#[cfg(not(feature = "pyffi"))]
impl Rgba {
    /// Create a new RGBA color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }
}

impl Rgba {
    /// Convert any color to an RGBA color.
    ///
    /// If the color already is an RGBA color, this function returns it.
    /// Otherwise, it reduces the color's 16-bit channels to 8 bits.
    pub fn from_color(color: &dyn Color) -> Self {
        if let Some(rgba) = color.as_any().downcast_ref::<Self>() {
            return *rgba;
        }

        Self(color.to_rgba8())
    }
}

impl Color for Rgba {
    fn to_rgba16(&self) -> [u16; 4] {
        expand(self.0)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl AsRef<[u8; 4]> for Rgba {
    fn as_ref(&self) -> &[u8; 4] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgba {
    type Output = u8;

    /// Access the channel with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `3 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(value: Rgba) -> Self {
        value.0
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = *self.as_ref();
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a))
    }
}
