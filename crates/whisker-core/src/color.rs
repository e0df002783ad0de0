//! Hex color helpers
//!
//! Shading works on `#RRGGBB` strings, one channel at a time, saturating at
//! the channel bounds. Results are lowercase and zero padded.

/// Named colors used across the drawing layers
pub mod colors {
    pub const WHITE: &str = "#FFFFFF";
    pub const BLACK: &str = "#000000";
    /// Inner ears, nose, blush and paw pads
    pub const PINK: &str = "#FFB6C1";
    pub const HOT_PINK: &str = "#FF69B4";
    pub const GOLD: &str = "#FFD700";
    pub const CRIMSON: &str = "#DC143C";
    pub const LEATHER: &str = "#8B4513";
    pub const CALICO_ORANGE: &str = "#FF6B35";
    pub const CALICO_DARK: &str = "#2C3E50";
    pub const ALICE_BLUE: &str = "#F0F8FF";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
}

/// Parse `#RRGGBB` into channels
///
/// Channels that fail to parse read as 0. The leading `#` is optional.
pub fn parse_hex(color: &str) -> [u8; 3] {
    let hex = color.strip_prefix('#').unwrap_or(color);
    let channel = |i: usize| {
        hex.get(i * 2..i * 2 + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    [channel(0), channel(1), channel(2)]
}

/// Encode channels as lowercase `#rrggbb`
pub fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Subtract `amount` from every channel
pub fn darken(color: &str, amount: u8) -> String {
    to_hex(parse_hex(color).map(|c| c.saturating_sub(amount)))
}

/// Add `amount` to every channel
pub fn lighten(color: &str, amount: u8) -> String {
    to_hex(parse_hex(color).map(|c| c.saturating_add(amount)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#FF8000"), [255, 128, 0]);
        assert_eq!(parse_hex("4ecdc4"), [0x4e, 0xcd, 0xc4]);
        assert_eq!(parse_hex("#zz1"), [0, 0, 0]);
    }

    #[test]
    fn test_darken_saturates() {
        assert_eq!(darken("#FFB6C1", 40), "#d78e99");
        assert_eq!(darken("#101010", 30), "#000000");
        assert_eq!(darken(colors::BLACK, 30), "#000000");
    }

    #[test]
    fn test_lighten_saturates() {
        assert_eq!(lighten("#4ECDC4", 10), "#58d7ce");
        assert_eq!(lighten(colors::WHITE, 10), "#ffffff");
    }

    #[test]
    fn test_darken_undoes_lighten() {
        for color in ["#4ECDC4", "#808080", "#123456", "#A0522D"] {
            let round_trip = darken(&lighten(color, 20), 20);
            assert_eq!(round_trip, color.to_lowercase());
        }
    }
}
