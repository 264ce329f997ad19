//! RGB and HSV triples and the pure conversions between them.
//!
//! Both conversions operate on explicit values, never on `Color` state, and
//! are exact inverses on valid input up to floating-point rounding. Hue is in
//! degrees, every other component is nominally in [0, 1].

use serde::{Deserialize, Serialize};

/// Red, green, blue components, each nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Hue in degrees [0, 360), saturation and value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Rgb {
    /// Creates a triple; components are stored unclamped.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Returns `[r, g, b]`.
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl Hsv {
    /// Creates a triple; hue is not wrapped until conversion.
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Returns `[h, s, v]`.
    pub const fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<[f64; 3]> for Hsv {
    fn from([h, s, v]: [f64; 3]) -> Self {
        Self { h, s, v }
    }
}

/// Converts RGB to HSV.
///
/// Achromatic input (all channels equal) yields `h = 0, s = 0`. Otherwise
/// the hue ratio is picked by whichever channel is the maximum (red wins
/// ties, then green) and all three branches go through the same
/// `(ratio * 60 + 360) mod 360` normalization.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    let delta = max - min;

    if delta == 0.0 {
        return Hsv::new(0.0, 0.0, max);
    }

    let ratio = if c.r == max {
        (c.g - c.b) / delta
    } else if c.g == max {
        2.0 + (c.b - c.r) / delta
    } else {
        4.0 + (c.r - c.g) / delta
    };

    Hsv {
        h: normalize_hue(ratio * 60.0 + 360.0),
        s: delta / max,
        v: max,
    }
}

/// Converts HSV to RGB.
///
/// Hue wraps into [0, 360); saturation and value are clamped to [0, 1].
/// Zero saturation short-circuits to `(v, v, v)` without looking at hue.
pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    let h = normalize_hue(c.h);
    let s = c.s.clamp(0.0, 1.0);
    let v = c.v.clamp(0.0, 1.0);

    if s == 0.0 {
        return Rgb::new(v, v, v);
    }

    let scaled = h / 60.0;
    let sector = scaled.floor();
    let frac = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * frac);
    let t = v * (1.0 - s * (1.0 - frac));

    match sector as i64 {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}

/// Wraps a hue in degrees into [0, 360).
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}
