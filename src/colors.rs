//! Named colors and color space helpers.
//!
//! The constants form a conventional palette quantized for 8-bit PWM output;
//! they make convenient seed colors for the animated modes. The HSV helpers
//! lean on `palette` for the conversion work.
//!
//! All values are in-range [`Rgb`] triples ready for the command surface.

use crate::color::Rgb;
use palette::{FromColor, Hsv, Srgb};

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const NAVY: Rgb = Rgb::new(0, 0, 123);
pub const DARKGREEN: Rgb = Rgb::new(0, 125, 0);
pub const DARKCYAN: Rgb = Rgb::new(0, 125, 123);
pub const MAROON: Rgb = Rgb::new(123, 0, 0);
pub const PURPLE: Rgb = Rgb::new(123, 0, 123);
pub const OLIVE: Rgb = Rgb::new(123, 125, 0);
pub const LIGHTGREY: Rgb = Rgb::new(198, 195, 198);
pub const DARKGREY: Rgb = Rgb::new(123, 125, 123);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const CYAN: Rgb = Rgb::new(0, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
pub const GREENYELLOW: Rgb = Rgb::new(173, 255, 41);
pub const PINK: Rgb = Rgb::new(255, 130, 198);

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
///
/// Hue is in degrees; saturation and value are 0.0-1.0.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Rgb {
    let srgb = Srgb::from_color(Hsv::new(hue, saturation, value));
    from_float(srgb)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Rgb {
    hsv(hue, 1.0, 1.0)
}

fn from_float(srgb: Srgb) -> Rgb {
    let bytes: Srgb<u8> = srgb.into_format();
    Rgb::new(
        i16::from(bytes.red),
        i16::from(bytes.green),
        i16::from(bytes.blue),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues_hit_pure_channels() {
        assert_eq!(hue(0.0), RED);
        assert_eq!(hue(120.0), GREEN);
        assert_eq!(hue(240.0), BLUE);
    }

    #[test]
    fn zero_value_is_black() {
        assert_eq!(hsv(57.0, 1.0, 0.0), BLACK);
    }

    #[test]
    fn zero_saturation_is_grey() {
        let grey = hsv(200.0, 0.0, 0.5);
        assert_eq!(grey.red, grey.green);
        assert_eq!(grey.green, grey.blue);
    }
}
