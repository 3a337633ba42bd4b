//! Output-stage adapters for [`ColorSink`] implementations.
//!
//! These wrap an inner sink to apply hardware-facing corrections that do
//! not belong in the animation core: drive-level inversion for common-anode
//! wiring, and gamma correction so fades look perceptually even on PWM
//! outputs. Adapters compose; wrap in the order the hardware needs.

use crate::color::{CHANNEL_MAX, Rgb};
use crate::led::ColorSink;
use palette::{LinSrgb, Srgb};

/// Inverts channel drive levels for common-anode LEDs.
///
/// A common-anode LED lights a channel when its pin is pulled low, so the
/// duty cycle for channel value `c` is `255 - c`.
pub struct Inverted<S: ColorSink> {
    inner: S,
}

impl<S: ColorSink> Inverted<S> {
    /// Wraps a sink.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns the wrapped sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ColorSink> ColorSink for Inverted<S> {
    fn write(&mut self, color: Rgb) {
        let color = color.clamped();
        self.inner.write(Rgb::new(
            CHANNEL_MAX - color.red,
            CHANNEL_MAX - color.green,
            CHANNEL_MAX - color.blue,
        ));
    }
}

/// Converts sRGB-encoded samples to linear light before forwarding.
///
/// PWM duty cycle is linear in emitted light, while the animation core works
/// in display-referred 0-255 values; pushing them through the sRGB transfer
/// function makes low-end fades far less steppy to the eye.
pub struct GammaCorrected<S: ColorSink> {
    inner: S,
}

impl<S: ColorSink> GammaCorrected<S> {
    /// Wraps a sink.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns the wrapped sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ColorSink> ColorSink for GammaCorrected<S> {
    fn write(&mut self, color: Rgb) {
        let color = color.clamped();
        let encoded = Srgb::new(color.red as u8, color.green as u8, color.blue as u8);
        let linear: LinSrgb<f32> = encoded.into_format::<f32>().into_linear();
        let bytes: LinSrgb<u8> = linear.into_format();
        self.inner.write(Rgb::new(
            i16::from(bytes.red),
            i16::from(bytes.green),
            i16::from(bytes.blue),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LastWrite {
        last: Option<Rgb>,
    }

    impl LastWrite {
        fn new() -> Self {
            Self { last: None }
        }
    }

    impl ColorSink for LastWrite {
        fn write(&mut self, color: Rgb) {
            self.last = Some(color);
        }
    }

    #[test]
    fn inverted_flips_drive_levels() {
        let mut sink = Inverted::new(LastWrite::new());
        sink.write(Rgb::new(255, 0, 100));
        assert_eq!(sink.into_inner().last.unwrap(), Rgb::new(0, 255, 155));
    }

    #[test]
    fn gamma_preserves_endpoints() {
        let mut sink = GammaCorrected::new(LastWrite::new());
        sink.write(Rgb::new(0, 255, 0));
        assert_eq!(sink.into_inner().last.unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn gamma_darkens_midtones() {
        let mut sink = GammaCorrected::new(LastWrite::new());
        sink.write(Rgb::new(128, 128, 128));
        let out = sink.into_inner().last.unwrap();
        assert!(out.red > 40 && out.red < 70);
        assert_eq!(out.red, out.green);
        assert_eq!(out.green, out.blue);
    }

    #[test]
    fn adapters_compose() {
        let mut sink = Inverted::new(GammaCorrected::new(LastWrite::new()));
        sink.write(Rgb::new(255, 255, 255));
        // Inversion first, then gamma: full white inverts to black, which
        // gamma leaves untouched.
        let out = sink.into_inner().into_inner().last.unwrap();
        assert_eq!(out, Rgb::new(0, 0, 0));
    }
}
