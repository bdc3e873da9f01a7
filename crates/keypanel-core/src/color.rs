use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("expected 6 or 8 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let s = hex.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }
        let byte = |range: &str| {
            u8::from_str_radix(range, 16).map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };
        match s.len() {
            6 => Ok(Color(byte(&s[0..2])?, byte(&s[2..4])?, byte(&s[4..6])?, 255)),
            8 => Ok(Color(
                byte(&s[0..2])?,
                byte(&s[2..4])?,
                byte(&s[4..6])?,
                byte(&s[6..8])?,
            )),
            n => Err(ColorParseError::BadLength(n)),
        }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733").unwrap();
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA").unwrap();
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        let bare = Color::from_hex("102030").unwrap();
        assert_eq!(bare, Color(16, 32, 48, 255));
    }

    #[test]
    fn test_color_from_hex_rejects_garbage() {
        assert_eq!(
            Color::from_hex("#FF57"),
            Err(ColorParseError::BadLength(4))
        );
        assert!(matches!(
            Color::from_hex("#GG5733"),
            Err(ColorParseError::BadDigit(_))
        ));
        assert!(matches!(
            Color::from_hex("€€"),
            Err(ColorParseError::BadDigit(_))
        ));
    }
}
