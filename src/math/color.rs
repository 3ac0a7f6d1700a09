//! HSB stroke colors and conversion to RGBA pixels

/// Hue, saturation and brightness on a shared channel scale
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsb {
    /// Hue, wrapping at the channel maximum
    pub hue: f64,
    /// Saturation
    pub saturation: f64,
    /// Brightness
    pub brightness: f64,
}

impl Hsb {
    /// Create a color from its three channels
    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Convert to an opaque RGBA pixel
    ///
    /// `channel_max` is the value at which every channel is saturated. Saturation and
    /// brightness are clamped to it; hue wraps around it.
    pub fn to_rgba(self, channel_max: f64) -> [u8; 4] {
        if channel_max <= 0.0 {
            return [0, 0, 0, 255];
        }

        let hue = (self.hue / channel_max).rem_euclid(1.0) * 6.0;
        let saturation = (self.saturation / channel_max).clamp(0.0, 1.0);
        let value = (self.brightness / channel_max).clamp(0.0, 1.0);

        let chroma = value * saturation;
        let x = chroma * (1.0 - (hue % 2.0 - 1.0).abs());
        let m = value - chroma;

        let (r, g, b) = match hue as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        [to_byte(r + m), to_byte(g + m), to_byte(b + m), 255]
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}
