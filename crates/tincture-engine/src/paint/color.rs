use std::fmt;

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

/// Error produced when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    pub input: String,
    pub message: &'static str,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.message)
    }
}

impl std::error::Error for ColorParseError {}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates an opaque color from sRGB bytes, converting to linear.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: srgb_to_linear(r as f32 / 255.0),
            g: srgb_to_linear(g as f32 / 255.0),
            b: srgb_to_linear(b as f32 / 255.0),
            a: 1.0,
        }
    }

    /// Creates an opaque color from a packed `0xRRGGBB` sRGB value.
    #[inline]
    pub fn from_srgb_hex(rgb: u32) -> Self {
        Self::from_srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parses `#RRGGBB` or `#RGB` (leading `#` optional) as an opaque sRGB color.
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let err = |message| ColorParseError { input: input.to_string(), message };

        let digits = input.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err("expected hexadecimal digits"));
        }

        let packed = match digits.len() {
            6 => u32::from_str_radix(digits, 16).map_err(|_| err("expected hexadecimal digits"))?,
            3 => {
                let short = u32::from_str_radix(digits, 16)
                    .map_err(|_| err("expected hexadecimal digits"))?;
                let (r, g, b) = ((short >> 8) & 0xf, (short >> 4) & 0xf, short & 0xf);
                (r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11)
            }
            _ => return Err(err("expected 3 or 6 hex digits")),
        };

        Ok(Self::from_srgb_hex(packed))
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha linear components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Returns the same hue with alpha scaled by `factor`, staying premultiplied.
    #[inline]
    pub fn with_alpha_scaled(self, factor: f32) -> Self {
        let k = factor.clamp(0.0, 1.0);
        Self { r: self.r * k, g: self.g * k, b: self.b * k, a: self.a * k }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

/// sRGB transfer function, decoding direction.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── parse_hex ─────────────────────────────────────────────────────────

    #[test]
    fn parse_black_and_white() {
        assert_eq!(Color::parse_hex("#000000").unwrap(), Color::from_premul(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::parse_hex("ffffff").unwrap(), Color::from_premul(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn parse_short_form_expands() {
        assert_eq!(Color::parse_hex("#abc").unwrap(), Color::parse_hex("#aabbcc").unwrap());
    }

    #[test]
    fn parse_decodes_srgb() {
        // sRGB 0x80 is roughly 0.2158 in linear space.
        let c = Color::parse_hex("#808080").unwrap();
        assert!(approx(c.r, 0.215_861));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn parse_rejects_bad_length() {
        let err = Color::parse_hex("#12345").unwrap_err();
        assert_eq!(err.message, "expected 3 or 6 hex digits");
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!(Color::parse_hex("#12345g").is_err());
        assert!(Color::parse_hex("+12345").is_err());
    }

    // ── alpha ─────────────────────────────────────────────────────────────

    #[test]
    fn alpha_scaling_stays_premultiplied() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 1.0).with_alpha_scaled(0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.0, 0.5));
    }
}
