/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Resolves a CSS-like color name or a `#rrggbb` literal.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" => Some(Self::WHITE),
            "magenta" => Some(Self::MAGENTA),
            "cyan" => Some(Self::CYAN),
            "red" => Some(Self::RED),
            "black" => Some(Self::rgb(0, 0, 0)),
            hex => {
                let hex = hex.strip_prefix('#')?;
                if hex.len() != 6 {
                    return None;
                }

                let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
                Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
            }
        }
    }

    /// Linear interpolation between two colors, `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0., 1.);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_hex() {
        assert_eq!(Color::parse("White"), Some(Color::WHITE));
        assert_eq!(Color::parse("#ff00ff"), Some(Color::MAGENTA));
        assert_eq!(Color::parse("#fff"), None);
        assert_eq!(Color::parse("chartreuse"), None);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(Color::MAGENTA.lerp(Color::CYAN, 0.), Color::MAGENTA);
        assert_eq!(Color::MAGENTA.lerp(Color::CYAN, 1.), Color::CYAN);
        assert_eq!(Color::MAGENTA.lerp(Color::CYAN, 7.), Color::CYAN);
    }
}
