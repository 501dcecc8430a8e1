/// Native palette indices
pub mod native {
    pub const BLACK: u8 = 0;
    pub const GREY: u8 = 1;
    pub const WHITE: u8 = 2;
    pub const DARK_PURPLE: u8 = 3;
    pub const LIGHT_PURPLE: u8 = 4;
    pub const BRIGHT_PURPLE: u8 = 5;
    pub const DARK_BLUE: u8 = 6;
    pub const LIGHT_BLUE: u8 = 7;
    pub const ICY_BLUE: u8 = 8;
    pub const TEAL: u8 = 9;
    pub const AQUAMARINE: u8 = 10;
    pub const SATURATED_GREEN: u8 = 11;
    pub const DARK_GREEN: u8 = 12;
    pub const MOSS_GREEN: u8 = 13;
    pub const BRIGHT_GREEN: u8 = 14;
    pub const OLIVE_GREEN: u8 = 15;
    pub const DARK_OLIVE_GREEN: u8 = 16;
    pub const BRIGHT_YELLOW: u8 = 17;
    pub const YELLOW: u8 = 18;
    pub const DARK_YELLOW: u8 = 19;
    pub const LIGHT_ORANGE: u8 = 20;
    pub const DARK_ORANGE: u8 = 21;
    pub const LIGHT_BROWN: u8 = 22;
    pub const SATURATED_BROWN: u8 = 23;
    pub const DARK_BROWN: u8 = 24;
    pub const SALMON_PINK: u8 = 25;
    pub const BORDEAUX_RED: u8 = 26;
    pub const SATURATED_RED: u8 = 27;
    pub const BRIGHT_RED: u8 = 28;
    pub const DARK_PINK: u8 = 29;
    pub const BRIGHT_PINK: u8 = 30;
    pub const LIGHT_PINK: u8 = 31;
}

/// Legacy palette, in legacy order
const LEGACY_TO_NATIVE: [u8; 32] = [
    native::BLACK,
    native::GREY,
    native::WHITE,
    native::LIGHT_PURPLE,
    native::BRIGHT_PURPLE,
    native::DARK_BLUE,
    native::LIGHT_BLUE,
    native::TEAL,
    native::SATURATED_GREEN,
    native::DARK_GREEN,
    native::MOSS_GREEN,
    native::BRIGHT_GREEN,
    native::OLIVE_GREEN,
    native::DARK_OLIVE_GREEN,
    native::YELLOW,
    native::DARK_YELLOW,
    native::LIGHT_ORANGE,
    native::DARK_ORANGE,
    native::LIGHT_BROWN,
    native::SATURATED_BROWN,
    native::DARK_BROWN,
    native::SALMON_PINK,
    native::BORDEAUX_RED,
    native::SATURATED_RED,
    native::BRIGHT_RED,
    native::BRIGHT_PINK,
    native::LIGHT_PINK,
    native::DARK_PINK,
    native::DARK_PURPLE,
    native::AQUAMARINE,
    native::BRIGHT_YELLOW,
    native::ICY_BLUE,
];

/// Translate a legacy colour. Values outside the legacy palette become black.
pub fn to_native_colour(colour: u8) -> u8 {
    LEGACY_TO_NATIVE
        .get(colour as usize)
        .copied()
        .unwrap_or(native::BLACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_translation() {
        assert_eq!(to_native_colour(0), native::BLACK);
        assert_eq!(to_native_colour(3), native::LIGHT_PURPLE);
        assert_eq!(to_native_colour(31), native::ICY_BLUE);
    }

    #[test]
    fn test_out_of_range_is_black() {
        assert_eq!(to_native_colour(32), native::BLACK);
        assert_eq!(to_native_colour(0xFF), native::BLACK);
    }
}
