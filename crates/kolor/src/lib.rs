#![deny(unsafe_code)]
//! Color value object with lazily synchronized RGB and HSV representations.
//!
//! Provides the [`Color`] type, the pure [`rgb_to_hsv`]/[`hsv_to_rgb`]
//! conversions, CSS rendering and parsing, record inputs (`Rgba`, `Hsva`,
//! `ColorInput`), the `Xorshift64` PRNG behind [`Color::random`], and the
//! named constants `WHITE`, `BLACK`, `RED`, `GREEN`, `BLUE`.

pub mod color;
pub mod css;
pub mod error;
pub mod input;
pub mod prng;
pub mod space;

pub use color::{Color, BLACK, BLUE, GREEN, RED, WHITE};
pub use css::DEFAULT_BYTE_WIDTH;
pub use error::ColorError;
pub use input::{ColorInput, Hsva, Rgba};
pub use prng::Xorshift64;
pub use space::{hsv_to_rgb, rgb_to_hsv, Hsv, Rgb};
