mod conversion;
mod equality;
mod string;

// conversion
pub(crate) use conversion::{
    alpha_to_8bit, alpha_to_opacity, expand, from_24bit, from_8bit, hsl_to_rgb, hsv_to_rgb,
    reduce, rgb_to_hsl, rgb_to_hsv, to_24bit,
};

// equality
pub use equality::{equal, equal_within, to_eq_bits, DEFAULT_PRECISION};

// string
pub(crate) use string::{format_css, format_hex};
