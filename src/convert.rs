//! Approximate conversion from NCS to RGB.
//!
//! The conversion blends in fixed point, 8 bits per channel, and only widens
//! to 16 bits at the very end. Every stage truncates, so the order of the
//! operations below matters for the exact output.

use crate::{Color, Hue, Rgb, Rgba};

/// An 8-bit range triple held in a wider integer so the blends can't
/// overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Channels([u32; 3]);

impl Channels {
    fn map(self, f: impl Fn(u32) -> u32) -> Self {
        Self(self.0.map(f))
    }

    fn zip(self, other: Self, f: impl Fn(u32, u32) -> u32) -> Self {
        let [a, b, c] = self.0;
        let [x, y, z] = other.0;
        Self([f(a, x), f(b, y), f(c, z)])
    }

    fn to_rgba(self) -> Rgba {
        let [red, green, blue] = self.0.map(|c| (c * 0x101) as u16);
        Rgba::new(red, green, blue, Rgba::OPAQUE)
    }
}

impl From<Rgb> for Channels {
    fn from(value: Rgb) -> Self {
        Self([value.red, value.green, value.blue].map(u32::from))
    }
}

impl Color {
    /// Convert this color to an opaque 16-bit per channel RGB value.
    pub fn to_rgba(&self) -> Rgba {
        if self.is_monochrome() {
            let level = (100 - u32::from(self.blackness)) * 0xFFFF / 100;
            return Rgba::gray(level as u16);
        }

        // Hue: mix the two elementary hues around the band.
        let (lead, step) = Hue::band(self.hue);
        let step = u32::from(step);
        let pure = Channels::from(lead.reference())
            .zip(lead.next().reference().into(), |a, b| {
                (a * (100 - step) + b * step) / 100
            });

        // Chromaticness: the nuance with no blackness, and with the most
        // blackness this chromaticness allows.
        let ch = u32::from(self.chromaticness);
        let white = pure.map(|c| (0xFF * (100 - ch) + c * ch) / 100);
        let black = pure.map(|c| c * ch / 100);

        // Blackness.
        let bl = u32::from(self.blackness);
        let blmax = 100 - ch;
        if blmax == 0 {
            return white.to_rgba();
        }
        if bl > blmax {
            return Rgba::BLACK;
        }

        white
            .zip(black, |w, b| (w * (blmax - bl) + b * bl) / blmax)
            .to_rgba()
    }
}

impl From<Color> for Rgba {
    fn from(value: Color) -> Self {
        value.to_rgba()
    }
}

#[cfg(feature = "image")]
impl From<Color> for image::Rgba<u16> {
    fn from(value: Color) -> Self {
        value.to_rgba().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::ncs;

    #[test]
    fn monochrome_ramp() {
        assert_eq!(ncs("0000-N").to_rgba(), Rgba::gray(0xFFFF));
        assert_eq!(ncs("5000-N").to_rgba(), Rgba::gray(0x7FFF));
        assert_eq!(ncs("9900-N").to_rgba(), Rgba::gray(0x028F));
        assert_ne!(ncs("9900-N").to_rgba(), Rgba::BLACK);

        let mut last = u16::MAX;
        for blackness in 1..100 {
            let rgba = ncs(&format!("{blackness:02}00-N")).to_rgba();
            assert!(rgba.red < last);
            assert_eq!(rgba.alpha, Rgba::OPAQUE);
            last = rgba.red;
        }
    }

    #[test]
    fn chromatic_reference_values() {
        let cases = [
            ("3010-Y10R", [0xB1B1, 0xABAB, 0x9999]),
            ("4020-B", [0x6666, 0x8181, 0x8B8B]),
            ("3020-B50G", [0x7F7F, 0x9C9C, 0x9C9C]),
            ("9901-B50G", [0x0000, 0x0101, 0x0101]),
            ("0099-Y", [0xFFFF, 0xD3D3, 0x0202]),
            ("0099-R", [0xC4C4, 0x0404, 0x3535]),
            ("1090-B", [0x0000, 0x7979, 0xAAAA]),
            ("0099-G", [0x0202, 0x9F9F, 0x6C6C]),
            ("2060-G50Y", [0x7F7F, 0xA2A2, 0x5252]),
        ];

        for (text, [red, green, blue]) in cases {
            assert_eq!(
                ncs(text).to_rgba(),
                Rgba::new(red, green, blue, Rgba::OPAQUE),
                "{text}"
            );
        }
    }

    #[test]
    fn alpha_is_always_opaque() {
        for text in ["0000-N", "9901-R", "0599-B20G", "5050-G"] {
            assert_eq!(ncs(text).to_rgba().alpha, Rgba::OPAQUE);
        }
    }

    #[test]
    fn degenerate_blackness_range() {
        let color = Color {
            blackness: 0,
            chromaticness: 100,
            hue: 100,
        };
        assert_eq!(color.to_rgba(), Rgba::from_rgb8(Rgb::RED));

        let color = Color {
            blackness: 60,
            chromaticness: 50,
            hue: 100,
        };
        assert_eq!(color.to_rgba(), Rgba::BLACK);
    }

    #[test]
    fn deterministic() {
        let color = ncs("2030-R40B");
        assert_eq!(color.to_rgba(), color.to_rgba());
        assert_eq!(Rgba::from(color), ncs("2030-R40B").to_rgba());
    }
}
