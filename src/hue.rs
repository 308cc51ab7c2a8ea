//! The four elementary hues that make up the NCS hue circle.

use crate::Rgb;

/// One of the elementary hues of the Natural Color System.
///
/// Hues are numbered around the circle in steps of 100, so every elementary
/// hue starts a band of 100 hue values that ends at its [`Hue::next`] hue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Hue {
    /// Yellow, `Y`, hue 0.
    Yellow = 0,
    /// Red, `R`, hue 100.
    Red = 1,
    /// Blue, `B`, hue 200.
    Blue = 2,
    /// Green, `G`, hue 300.
    Green = 3,
}

impl Hue {
    /// All elementary hues in the order they appear on the hue circle.
    pub const ALL: [Hue; 4] = [Hue::Yellow, Hue::Red, Hue::Blue, Hue::Green];

    /// Number of hue values between two neighbouring elementary hues.
    pub const BAND: u16 = 100;

    /// Return the letter used for this hue in NCS notation.
    pub const fn letter(self) -> char {
        match self {
            Hue::Yellow => 'Y',
            Hue::Red => 'R',
            Hue::Blue => 'B',
            Hue::Green => 'G',
        }
    }

    /// Return the hue for a notation letter, if it is one of `Y`, `R`, `B`
    /// or `G`.
    pub const fn from_letter(letter: char) -> Option<Hue> {
        match letter {
            'Y' => Some(Hue::Yellow),
            'R' => Some(Hue::Red),
            'B' => Some(Hue::Blue),
            'G' => Some(Hue::Green),
            _ => None,
        }
    }

    /// The hue value where this elementary hue sits on the circle.
    pub const fn offset(self) -> u16 {
        self as u16 * Self::BAND
    }

    /// The elementary hue that follows this one on the circle. Green wraps
    /// back around to yellow.
    pub const fn next(self) -> Hue {
        match self {
            Hue::Yellow => Hue::Red,
            Hue::Red => Hue::Blue,
            Hue::Blue => Hue::Green,
            Hue::Green => Hue::Yellow,
        }
    }

    /// The reference sRGB triple used when converting this hue.
    /// <https://en.wikipedia.org/wiki/Natural_Color_System>
    pub const fn reference(self) -> Rgb {
        match self {
            Hue::Yellow => Rgb::YELLOW,
            Hue::Red => Rgb::RED,
            Hue::Blue => Rgb::BLUE,
            Hue::Green => Rgb::GREEN,
        }
    }

    /// Split a hue value into the elementary hue that starts its band and
    /// the step within that band (0 to 99). Values past 399 wrap around.
    pub const fn band(hue: u16) -> (Hue, u16) {
        let lead = Self::ALL[((hue / Self::BAND) % 4) as usize];
        (lead, hue % Self::BAND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for hue in Hue::ALL {
            assert_eq!(Hue::from_letter(hue.letter()), Some(hue));
        }
        assert_eq!(Hue::from_letter('N'), None);
        assert_eq!(Hue::from_letter('y'), None);
    }

    #[test]
    fn offsets_follow_the_circle() {
        assert_eq!(Hue::Yellow.offset(), 0);
        assert_eq!(Hue::Red.offset(), 100);
        assert_eq!(Hue::Blue.offset(), 200);
        assert_eq!(Hue::Green.offset(), 300);

        assert_eq!(Hue::Green.next(), Hue::Yellow);
        for hue in Hue::ALL {
            assert_eq!(hue.next().next().next().next(), hue);
        }
    }

    #[test]
    fn band_splits_hue_values() {
        assert_eq!(Hue::band(0), (Hue::Yellow, 0));
        assert_eq!(Hue::band(10), (Hue::Yellow, 10));
        assert_eq!(Hue::band(100), (Hue::Red, 0));
        assert_eq!(Hue::band(250), (Hue::Blue, 50));
        assert_eq!(Hue::band(399), (Hue::Green, 99));
        assert_eq!(Hue::band(400), (Hue::Yellow, 0));
    }

    #[test]
    fn reference_colors() {
        assert_eq!(Hue::Yellow.reference(), Rgb::new(0xFF, 0xD3, 0x00));
        assert_eq!(Hue::Red.reference(), Rgb::new(0xC4, 0x02, 0x33));
        assert_eq!(Hue::Blue.reference(), Rgb::new(0x00, 0x87, 0xBD));
        assert_eq!(Hue::Green.reference(), Rgb::new(0x00, 0x9F, 0x6B));
    }
}
