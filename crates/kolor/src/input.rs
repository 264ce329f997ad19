//! Record shapes a [`Color`](crate::Color) can be built from.
//!
//! `Rgba` and `Hsva` are the structured records; `ColorInput` is the tagged
//! union of every accepted shape. All three deserialize from JSON with a
//! missing `a` defaulting to fully opaque.

use crate::space::{Hsv, Rgb};
use serde::{Deserialize, Serialize};

fn opaque() -> f64 {
    1.0
}

/// RGBA record, `{r, g, b, a}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

/// HSVA record, `{h, s, v, a}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Rgba {
    /// Creates an RGBA record.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// The RGB part, without alpha.
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl Hsva {
    /// Creates an HSVA record.
    pub const fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self { h, s, v, a }
    }

    /// The HSV part, without alpha.
    pub const fn hsv(self) -> Hsv {
        Hsv::new(self.h, self.s, self.v)
    }
}

/// Every input shape a color can be constructed from.
///
/// Deserialization is untagged and tried in declaration order: four and
/// three element arrays first (derived records would also accept
/// sequences), then a record carrying `r` as RGBA, one carrying `h` as HSVA.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Channels([f64; 4]),
    Rgb([f64; 3]),
    Rgba(Rgba),
    Hsva(Hsva),
}

impl ColorInput {
    /// Alpha carried by the input, 1.0 when the shape has none.
    pub fn alpha(&self) -> f64 {
        match self {
            ColorInput::Rgba(c) => c.a,
            ColorInput::Hsva(c) => c.a,
            ColorInput::Channels(c) => c[3],
            ColorInput::Rgb(_) => opaque(),
        }
    }
}

impl From<Rgba> for ColorInput {
    fn from(c: Rgba) -> Self {
        ColorInput::Rgba(c)
    }
}

impl From<Hsva> for ColorInput {
    fn from(c: Hsva) -> Self {
        ColorInput::Hsva(c)
    }
}

impl From<[f64; 4]> for ColorInput {
    fn from(c: [f64; 4]) -> Self {
        ColorInput::Channels(c)
    }
}

impl From<[f64; 3]> for ColorInput {
    fn from(c: [f64; 3]) -> Self {
        ColorInput::Rgb(c)
    }
}
