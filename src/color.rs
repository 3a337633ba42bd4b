//! Linear RGB color carrier and channel math.

/// Highest displayable channel value.
pub const CHANNEL_MAX: i16 = 255;

/// A linear RGB triple.
///
/// Channels are `i16` rather than `u8` so additive fades may transiently
/// overshoot the displayable range in either direction; [`Rgb::clamped`]
/// brings a color back to 0-255 before it reaches hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub red: i16,
    pub green: i16,
    pub blue: i16,
}

impl Rgb {
    /// Creates a color from raw channel values.
    #[inline]
    pub const fn new(red: i16, green: i16, blue: i16) -> Self {
        Self { red, green, blue }
    }

    /// Returns a copy with every channel clamped to 0-255.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            red: clamp(self.red),
            green: clamp(self.green),
            blue: clamp(self.blue),
        }
    }

    /// Scales every channel linearly toward zero as `brightness` falls
    /// from 255.
    ///
    /// A brightness of 255 is the identity up to rounding; 0 yields black.
    #[inline]
    pub fn scaled(self, brightness: u8) -> Self {
        Self {
            red: scale(self.red, brightness),
            green: scale(self.green, brightness),
            blue: scale(self.blue, brightness),
        }
    }
}

#[inline]
fn clamp(channel: i16) -> i16 {
    channel.clamp(0, CHANNEL_MAX)
}

#[inline]
fn scale(channel: i16, brightness: u8) -> i16 {
    let scaled = i32::from(channel) * i32::from(brightness);
    ((scaled + 128) / 255) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limits_to_displayable_range() {
        assert_eq!(Rgb::new(-40, 0, 255).clamped(), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::new(256, 1000, 128).clamped(), Rgb::new(255, 255, 128));
    }

    #[test]
    fn clamp_is_idempotent() {
        for channel in (-600..600).step_by(7) {
            let once = Rgb::new(channel, channel, channel).clamped();
            assert_eq!(once.clamped(), once);
            assert!(once.red >= 0 && once.red <= CHANNEL_MAX);
        }
    }

    #[test]
    fn full_brightness_is_identity() {
        let color = Rgb::new(200, 100, 3);
        assert_eq!(color.scaled(255), color);
    }

    #[test]
    fn zero_brightness_is_black() {
        assert_eq!(Rgb::new(255, 128, 1).scaled(0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn half_brightness_rounds() {
        let scaled = Rgb::new(200, 100, 50).scaled(128);
        assert_eq!(scaled, Rgb::new(100, 50, 25));
    }
}
