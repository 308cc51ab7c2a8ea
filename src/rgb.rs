//! RGB values used by and produced from the NCS conversion.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value used for normalized channels.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value used for normalized channels.
pub type Component = f64;

/// An 8-bit per channel sRGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Reference color for the elementary hue yellow.
    pub const YELLOW: Rgb = Rgb::new(0xFF, 0xD3, 0x00);
    /// Reference color for the elementary hue red.
    pub const RED: Rgb = Rgb::new(0xC4, 0x02, 0x33);
    /// Reference color for the elementary hue blue.
    pub const BLUE: Rgb = Rgb::new(0x00, 0x87, 0xBD);
    /// Reference color for the elementary hue green.
    pub const GREEN: Rgb = Rgb::new(0x00, 0x9F, 0x6B);

    /// Create a new triple from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// A 16-bit per channel color with alpha.
///
/// This is what [`crate::Color::to_rgba`] produces. Alpha is always opaque
/// for converted colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// The red channel.
    pub red: u16,
    /// The green channel.
    pub green: u16,
    /// The blue channel.
    pub blue: u16,
    /// The alpha channel.
    pub alpha: u16,
}

impl Rgba {
    /// Fully opaque alpha.
    pub const OPAQUE: u16 = 0xFFFF;

    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, Self::OPAQUE);

    /// Create a new color from its four channels.
    pub const fn new(red: u16, green: u16, blue: u16, alpha: u16) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque gray with all three color channels set to `level`.
    pub const fn gray(level: u16) -> Self {
        Self::new(level, level, level, Self::OPAQUE)
    }

    /// Widen an 8-bit triple by replicating each byte into both halves of
    /// the 16-bit channel.
    pub const fn from_rgb8(rgb: Rgb) -> Self {
        Self::new(
            widen(rgb.red),
            widen(rgb.green),
            widen(rgb.blue),
            Self::OPAQUE,
        )
    }

    /// Narrow to 8 bits per channel by keeping the high byte.
    pub const fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.red >> 8) as u8,
            (self.green >> 8) as u8,
            (self.blue >> 8) as u8,
            (self.alpha >> 8) as u8,
        ]
    }

    /// Return the channels normalized to the range `[0, 1]`.
    pub fn to_components(&self) -> [Component; 4] {
        [self.red, self.green, self.blue, self.alpha]
            .map(|channel| channel as Component / u16::MAX as Component)
    }
}

impl From<Rgba> for [u16; 4] {
    fn from(value: Rgba) -> Self {
        [value.red, value.green, value.blue, value.alpha]
    }
}

#[cfg(feature = "image")]
impl From<Rgba> for image::Rgba<u16> {
    fn from(value: Rgba) -> Self {
        image::Rgba(value.into())
    }
}

const fn widen(channel: u8) -> u16 {
    channel as u16 * 0x101
}
