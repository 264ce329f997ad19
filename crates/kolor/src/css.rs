//! CSS rendering and parsing for [`Color`].
//!
//! Rendering is the only place channel values are clamped. Hex output drops
//! alpha since the format has no slot for it.

use crate::color::Color;
use crate::error::ColorError;
use std::fmt;

/// Hex digits per channel when the caller passes no width (or zero).
pub const DEFAULT_BYTE_WIDTH: usize = 2;

/// Scales a unit channel to 0-255, rounds, and clamps.
fn to_byte(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Color {
    /// Hex form when fully opaque, `rgba(R,G,B,A)` otherwise.
    ///
    /// In the `rgba` form each channel is rounded and clamped to [0, 255]
    /// and alpha is clamped to [0, 1] with three decimals.
    pub fn to_css(&self, byte_width: usize) -> String {
        if self.alpha() >= 1.0 {
            return self.to_css_hex(byte_width);
        }
        let [r, g, b] = self.rgb().map(to_byte);
        format!(
            "rgba({r},{g},{b},{:.3})",
            self.alpha().clamp(0.0, 1.0)
        )
    }

    /// `#` followed by `byte_width` uppercase hex digits per channel.
    ///
    /// Each channel is `round(c * (16^width - 1))`, zero padded on the left.
    /// A width of 0 means [`DEFAULT_BYTE_WIDTH`].
    pub fn to_css_hex(&self, byte_width: usize) -> String {
        let width = if byte_width == 0 {
            DEFAULT_BYTE_WIDTH
        } else {
            byte_width
        };
        let max = 16f64.powi(i32::try_from(width).unwrap_or(i32::MAX)) - 1.0;
        let [r, g, b] = self
            .rgb()
            .map(|c| format!("{:0width$X}", (c * max).round() as u64));
        format!("#{r}{g}{b}")
    }

    /// `to_css` at the default width.
    pub fn css(&self) -> String {
        self.to_css(DEFAULT_BYTE_WIDTH)
    }

    /// `to_css_hex` at the default width.
    pub fn css_hex(&self) -> String {
        self.to_css_hex(DEFAULT_BYTE_WIDTH)
    }

    /// Packs 8-bit channels as `0xRRGGBB`. Channels are rounded, not clamped.
    pub fn to_number(&self) -> u32 {
        let [r, g, b] = self.rgb().map(|c| (c * 255.0).round() as u32);
        (r << 16) | (g << 8) | b
    }

    /// Parses `#rgb` or `#rrggbb` into an opaque color.
    ///
    /// Short-form digits are divided by 16, long-form pairs by 255.
    pub fn from_css_hex(s: &str) -> Result<Self, ColorError> {
        let parsed = s
            .strip_prefix('#')
            .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|d| Some((d.len(), u32::from_str_radix(d, 16).ok()?)));

        let channel = |n: u32, shift: u32, mask: u32| ((n >> shift) & mask) as f64;
        match parsed {
            Some((3, n)) => Ok(Self::from_rgb(
                channel(n, 8, 0xF) / 16.0,
                channel(n, 4, 0xF) / 16.0,
                channel(n, 0, 0xF) / 16.0,
            )),
            Some((6, n)) => Ok(Self::from_rgb(
                channel(n, 16, 0xFF) / 255.0,
                channel(n, 8, 0xFF) / 255.0,
                channel(n, 0, 0xFF) / 255.0,
            )),
            _ => {
                log::debug!("rejected css hex {s:?}");
                Err(ColorError::InvalidFormat(s.to_owned()))
            }
        }
    }
}

/// `rgba(R,G,B,A)` with rounded 0-255 channels and the raw alpha.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb().map(|c| (255.0 * c).round() as i64);
        write!(f, "rgba({r},{g},{b},{})", self.alpha())
    }
}
