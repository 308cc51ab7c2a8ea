//! Parse NCS notation into a [`Color`].

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{Color, Hue};

/// Error returned when a string is not valid NCS notation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not match the `BBCC-H` grammar. Holds the input.
    #[error("invalid NCS notation: {0}")]
    InvalidFormat(String),
}

// Blackness, chromaticness, then the hue: `N`, an elementary hue, or a step
// between an elementary hue and the next one on the circle.
static NOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A([0-9]{2})([0-9]{2})-(N|Y|R|B|G|Y[0-9]{2}R|R[0-9]{2}B|B[0-9]{2}G|G[0-9]{2}Y)\z")
        .expect("valid regex")
});

impl Color {
    /// Parse a color from NCS notation, e.g. `1050-Y90R`, `2030-B` or
    /// `5000-N`.
    ///
    /// The conversion is approximate: a chromaticness larger than
    /// `100 - blackness` is clamped, and a color that ends up with no
    /// chromaticness loses its hue.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let Some(captures) = NOTATION.captures(text) else {
            tracing::debug!(input = text, "rejected malformed NCS notation");
            return Err(ParseError::InvalidFormat(text.to_owned()));
        };

        let blackness = two_digits(&captures[1]);
        let mut chromaticness = two_digits(&captures[2]);

        let hue = match &captures[3] {
            "N" => {
                chromaticness = 0;
                0
            }
            notation => {
                let Some(lead) = notation.chars().next().and_then(Hue::from_letter) else {
                    unreachable!("notation admits only elementary hue letters: {notation}");
                };
                if notation.len() == 1 {
                    lead.offset()
                } else {
                    lead.offset() + u16::from(two_digits(&notation[1..3]))
                }
            }
        };

        if chromaticness > 100 - blackness {
            tracing::trace!(
                input = text,
                chromaticness,
                max = 100 - blackness,
                "clamped chromaticness"
            );
            chromaticness = 100 - blackness;
        }

        Ok(Self {
            blackness,
            chromaticness,
            hue: if chromaticness == 0 { 0 } else { hue },
        })
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Decode two ASCII digits that the notation grammar already matched.
fn two_digits(digits: &str) -> u8 {
    let bytes = digits.as_bytes();
    (bytes[0] - b'0') * 10 + (bytes[1] - b'0')
}
