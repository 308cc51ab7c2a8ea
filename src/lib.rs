//! ncs parses colors written in the Natural Color System notation (for
//! example `2030-Y90R`) and converts them to an approximate RGB value.
//!
//! ```rust
//! use ncs::Color;
//!
//! let color: Color = "3020-B50G".parse().unwrap();
//! assert_eq!(color.hue(), 250);
//! assert_eq!(color.to_string(), "3020-B50G");
//!
//! let rgba = color.to_rgba();
//! assert_eq!(rgba.alpha, 0xFFFF);
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod hue;
mod parse;
mod rgb;

#[cfg(feature = "serde")]
mod serialize;


pub use color::Color;
pub use hue::Hue;
pub use parse::ParseError;
pub use rgb::{Component, Rgb, Rgba};
