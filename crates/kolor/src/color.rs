//! The `Color` value object.
//!
//! A color holds an RGB triple, an HSV triple, or both, plus an independent
//! alpha. Whichever representation is missing is computed on first read and
//! cached. Writing a channel of one representation drops the other, so the
//! two can never disagree.

use crate::error::ColorError;
use crate::input::{ColorInput, Hsva, Rgba};
use crate::prng::{with_thread_rng, Xorshift64};
use crate::space::{hsv_to_rgb, rgb_to_hsv, Hsv, Rgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::cell::Cell;

/// Which representations are currently valid. At least one always is.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Channels {
    Rgb(Rgb),
    Hsv(Hsv),
    Both { rgb: Rgb, hsv: Hsv },
}

/// Color with lazily synchronized RGB and HSV channels and an alpha.
///
/// Read accessors take `&self` and may fill the cache through a `Cell`, so
/// a `Color` is `Send` but not `Sync`. Channel values are not validated;
/// out-of-range input is carried as-is until rendering clamps it.
#[derive(Debug)]
pub struct Color {
    channels: Cell<Channels>,
    alpha: f64,
}

// Constants are `const` items: every use is a fresh value, so mutating one
// never reaches another holder.
#[allow(clippy::declare_interior_mutable_const)]
mod named {
    use super::Color;

    pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::from_rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::from_rgb(0.0, 0.0, 1.0);
}

pub use named::{BLACK, BLUE, GREEN, RED, WHITE};

impl Color {
    /// Opaque black.
    pub const fn new() -> Self {
        Self::from_rgb(0.0, 0.0, 0.0)
    }

    const fn from_parts(channels: Channels, alpha: f64) -> Self {
        Self {
            channels: Cell::new(channels),
            alpha,
        }
    }

    /// RGB-backed color with an explicit alpha. Values are not clamped.
    pub const fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::from_parts(Channels::Rgb(Rgb::new(r, g, b)), a)
    }

    /// RGB color with alpha 1.0.
    pub const fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// HSV-backed color; RGB is computed on first demand.
    pub const fn from_hsva(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self::from_parts(Channels::Hsv(Hsv::new(h, s, v)), a)
    }

    /// HSV-backed color with alpha 1.0.
    pub const fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        Self::from_hsva(h, s, v, 1.0)
    }

    /// Revives a color from a `[r, g, b, a]` memento.
    pub const fn from_memento(m: [f64; 4]) -> Self {
        Self::from_rgba(m[0], m[1], m[2], m[3])
    }

    /// Returns `[r, g, b, a]`, materializing RGB if needed.
    pub fn to_memento(&self) -> [f64; 4] {
        self.rgba()
    }

    /// The memento as a JSON array.
    pub fn to_json(&self) -> Value {
        Value::from(self.to_memento().to_vec())
    }

    /// Builds a color from any JSON shape `ColorInput` accepts: a memento
    /// array, a three element array, or an `{r,g,b,a}` / `{h,s,v,a}` record.
    pub fn from_json(value: &Value) -> Result<Self, ColorError> {
        ColorInput::deserialize(value)
            .map(Color::from)
            .map_err(|e| {
                log::debug!("rejected color input {value}: {e}");
                ColorError::InvalidInput(e.to_string())
            })
    }

    /// Uniformly random opaque color from this thread's generator.
    pub fn random() -> Self {
        with_thread_rng(Self::random_with)
    }

    /// Uniformly random opaque color; each channel is in [0, 1).
    pub fn random_with(rng: &mut Xorshift64) -> Self {
        let r = rng.next_f64();
        let g = rng.next_f64();
        let b = rng.next_f64();
        Self::from_rgb(r, g, b)
    }

    fn materialized_rgb(&self) -> Rgb {
        match self.channels.get() {
            Channels::Rgb(rgb) | Channels::Both { rgb, .. } => rgb,
            Channels::Hsv(hsv) => {
                let rgb = hsv_to_rgb(hsv);
                log::trace!("materialized {rgb:?} from {hsv:?}");
                self.channels.set(Channels::Both { rgb, hsv });
                rgb
            }
        }
    }

    fn materialized_hsv(&self) -> Hsv {
        match self.channels.get() {
            Channels::Hsv(hsv) | Channels::Both { hsv, .. } => hsv,
            Channels::Rgb(rgb) => {
                let hsv = rgb_to_hsv(rgb);
                log::trace!("materialized {hsv:?} from {rgb:?}");
                self.channels.set(Channels::Both { rgb, hsv });
                hsv
            }
        }
    }

    fn update_rgb(&mut self, f: impl FnOnce(&mut Rgb)) {
        let mut rgb = self.materialized_rgb();
        f(&mut rgb);
        self.channels.set(Channels::Rgb(rgb));
    }

    fn update_hsv(&mut self, f: impl FnOnce(&mut Hsv)) {
        let mut hsv = self.materialized_hsv();
        f(&mut hsv);
        self.channels.set(Channels::Hsv(hsv));
    }

    /// `[r, g, b]`, each nominally in [0, 1].
    pub fn rgb(&self) -> [f64; 3] {
        self.materialized_rgb().to_array()
    }

    /// `[h, s, v]`, hue in degrees.
    pub fn hsv(&self) -> [f64; 3] {
        self.materialized_hsv().to_array()
    }

    /// `[r, g, b, a]`, materializing RGB if needed.
    pub fn rgba(&self) -> [f64; 4] {
        let Rgb { r, g, b } = self.materialized_rgb();
        [r, g, b, self.alpha]
    }

    /// Alpha as stored; never touches the color channels.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Sets alpha without invalidating either representation.
    pub fn set_alpha(&mut self, a: f64) {
        self.alpha = a;
    }

    /// Red channel, computed from HSV on first demand.
    pub fn red(&self) -> f64 {
        self.materialized_rgb().r
    }

    /// Green channel, computed from HSV on first demand.
    pub fn green(&self) -> f64 {
        self.materialized_rgb().g
    }

    /// Blue channel, computed from HSV on first demand.
    pub fn blue(&self) -> f64 {
        self.materialized_rgb().b
    }

    /// Sets red and drops the cached HSV.
    pub fn set_red(&mut self, r: f64) {
        self.update_rgb(|c| c.r = r);
    }

    /// Sets green and drops the cached HSV.
    pub fn set_green(&mut self, g: f64) {
        self.update_rgb(|c| c.g = g);
    }

    /// Sets blue and drops the cached HSV.
    pub fn set_blue(&mut self, b: f64) {
        self.update_rgb(|c| c.b = b);
    }

    /// Hue in degrees, computed from RGB on first demand.
    pub fn hue(&self) -> f64 {
        self.materialized_hsv().h
    }

    /// Saturation, computed from RGB on first demand.
    pub fn saturation(&self) -> f64 {
        self.materialized_hsv().s
    }

    /// Value (brightness), computed from RGB on first demand.
    pub fn value(&self) -> f64 {
        self.materialized_hsv().v
    }

    /// Sets hue and drops the cached RGB.
    pub fn set_hue(&mut self, h: f64) {
        self.update_hsv(|c| c.h = h);
    }

    /// Sets saturation and drops the cached RGB.
    pub fn set_saturation(&mut self, s: f64) {
        self.update_hsv(|c| c.s = s);
    }

    /// Sets value and drops the cached RGB.
    pub fn set_value(&mut self, v: f64) {
        self.update_hsv(|c| c.v = v);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new()
    }
}

/// Always yields an RGB-backed copy, whichever representation the source
/// held.
impl Clone for Color {
    fn clone(&self) -> Self {
        Self::from_memento(self.to_memento())
    }
}

/// Colors are equal when their materialized RGBA values are.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgba() == other.rgba()
    }
}

impl From<&Color> for Color {
    fn from(c: &Color) -> Self {
        c.clone()
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl From<[f64; 4]> for Color {
    fn from(m: [f64; 4]) -> Self {
        Self::from_memento(m)
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Self::from_parts(Channels::Rgb(c.rgb()), c.a)
    }
}

impl From<Hsva> for Color {
    fn from(c: Hsva) -> Self {
        Self::from_parts(Channels::Hsv(c.hsv()), c.a)
    }
}

impl From<ColorInput> for Color {
    fn from(input: ColorInput) -> Self {
        let channels = match input {
            ColorInput::Rgba(c) => Channels::Rgb(c.rgb()),
            ColorInput::Hsva(c) => Channels::Hsv(c.hsv()),
            ColorInput::Channels([r, g, b, _]) => Channels::Rgb(Rgb::new(r, g, b)),
            ColorInput::Rgb(c) => Channels::Rgb(Rgb::from(c)),
        };
        Self::from_parts(channels, input.alpha())
    }
}

/// Serializes as the `[r, g, b, a]` memento.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_memento().serialize(serializer)
    }
}

/// Deserializes from any `ColorInput` shape.
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ColorInput::deserialize(deserializer).map(Color::from)
    }
}
