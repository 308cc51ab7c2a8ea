//! A [`Color`] represents a color specified in Natural Color System notation.

use std::fmt;

use crate::Hue;

/// A color in the Natural Color System.
///
/// A `Color` can only be created by parsing its notation (see
/// [`Color::parse`]), which guarantees that:
/// - blackness is in `0..=99`,
/// - chromaticness is at most `100 - blackness` and at most 99,
/// - hue is in `0..=399`, and is 0 whenever chromaticness is 0.
///
/// Hues run around the circle from yellow (0) to red (100), blue (200),
/// green (300) and back to yellow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub(crate) blackness: u8,
    pub(crate) chromaticness: u8,
    pub(crate) hue: u16,
}

impl Color {
    /// The perceived blackness of the color, 0 to 99.
    pub fn blackness(&self) -> u8 {
        self.blackness
    }

    /// The perceived chromaticness of the color, 0 to
    /// `min(100 - blackness, 99)`.
    pub fn chromaticness(&self) -> u8 {
        self.chromaticness
    }

    /// The hue of the color, 0 to 399. Always 0 for monochrome colors.
    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Return true if the color has no chromaticness, i.e. it is a gray.
    pub fn is_monochrome(&self) -> bool {
        self.chromaticness == 0
    }

    /// Return the elementary hue that starts the band this color's hue lies
    /// in, together with the step into that band. Monochrome colors have no
    /// hue.
    pub fn elementary_hue(&self) -> Option<(Hue, u16)> {
        if self.is_monochrome() {
            None
        } else {
            Some(Hue::band(self.hue))
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}-", self.blackness, self.chromaticness)?;

        match self.elementary_hue() {
            None => f.write_str("N"),
            Some((lead, 0)) => write!(f, "{}", lead.letter()),
            Some((lead, step)) => write!(f, "{}{:02}{}", lead.letter(), step, lead.next().letter()),
        }
    }
}
