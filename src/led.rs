//! Status LED controller with mode state machine and timing control.
//!
//! Provides [`StatusLed`] which drives a single RGB indicator through its
//! presentation modes, handling step timing, per-mode color advance, and
//! redundant-write suppression. Also defines the [`ColorSink`] trait for
//! hardware abstraction.

use crate::COLOR_OFF;
use crate::color::{CHANNEL_MAX, Rgb};
use crate::time::{Clock, Ticks, elapsed_since};

/// Dim floor for the pulse fade; channels never settle below this.
const PULSE_DIMMEST: i16 = 0x01;

/// Trait for abstracting RGB LED output hardware.
///
/// Implement this for your LED hardware (GPIO, PWM, SPI, etc.) to allow
/// the controller to drive it.
pub trait ColorSink {
    /// Writes a color to the output hardware.
    ///
    /// Channel values arrive brightness-scaled and clamped to 0-255.
    /// Implementations map them to their device's native output and take
    /// care of wiring-specific inversion (see [`crate::sink::Inverted`]).
    /// Handle any hardware errors internally - this method cannot fail and
    /// must not block.
    fn write(&mut self, color: Rgb);
}

/// The active presentation mode of a status LED.
///
/// Exactly one mode is active at a time; switching is always an explicit
/// command, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedMode {
    /// Steady base color.
    Fixed,
    /// Holds the base color, then goes dark, on its own period.
    Blink,
    /// Breathing fade between a dim floor and a bright ceiling.
    Pulse,
    /// Continuous hue rotation around the color wheel.
    Fabulous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlinkPhase {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadeDirection {
    Dimming,
    Brightening,
}

/// Initial settings for a [`StatusLed`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub mode: LedMode,
    pub visible: bool,
    pub color: Rgb,
    pub brightness: u8,
    /// Minimum ticks between animation steps; 0 runs a step on every poll.
    /// Blink keeps its own period and ignores this.
    pub interval_ms: Ticks,
    /// Per-step channel delta for `Pulse`, wheel advance for `Fabulous`.
    /// Clamped to at least 1.
    pub step: u8,
    /// Ticks the LED holds its color per blink repetition.
    pub period_ms: Ticks,
    /// Ticks the LED stays dark between blink repetitions.
    pub on_duty_ms: Ticks,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: LedMode::Fixed,
            visible: true,
            color: COLOR_OFF,
            brightness: 255,
            interval_ms: 0,
            step: 1,
            period_ms: 1000,
            on_duty_ms: 300,
        }
    }
}

/// Drives a single RGB status LED through timed presentation modes.
///
/// The controller owns its sink and polls an injected clock. Callers invoke
/// [`update`](StatusLed::update) at an application-chosen cadence, at least
/// as often as the shortest configured interval; each poll checks visibility
/// and elapsed-time gating, advances the active mode, and writes to the sink
/// only when the displayed color must change. The mode commands are
/// synchronous setters that take effect immediately.
///
/// All state lives in the instance; the design assumes a single cooperative
/// polling loop and performs no locking.
///
/// # Type Parameters
/// * `'c` - Lifetime of the clock reference
/// * `S` - Sink implementation type
/// * `C` - Clock implementation type
pub struct StatusLed<'c, S: ColorSink, C: Clock> {
    sink: S,
    clock: &'c C,
    mode: LedMode,
    visible: bool,
    color: Rgb,
    brightness: u8,
    interval_ms: Ticks,
    step: u8,
    period_ms: Ticks,
    on_duty_ms: Ticks,
    last_update: Ticks,
    pulse: Rgb,
    fade: FadeDirection,
    wheel_pos: u8,
    blink_phase: BlinkPhase,
    phase_start: Ticks,
    current: Rgb,
    changed: bool,
    mode_changed: bool,
}

impl<'c, S: ColorSink, C: Clock> StatusLed<'c, S, C> {
    /// Creates a controller from initial settings.
    ///
    /// A hidden LED is driven to off immediately; a visible one performs its
    /// first write on the next [`update`](StatusLed::update) call.
    pub fn new(mut sink: S, clock: &'c C, config: Config) -> Self {
        if !config.visible {
            sink.write(COLOR_OFF);
        }

        Self {
            sink,
            clock,
            mode: config.mode,
            visible: config.visible,
            color: config.color,
            brightness: config.brightness,
            interval_ms: config.interval_ms,
            step: config.step.max(1),
            period_ms: config.period_ms,
            on_duty_ms: config.on_duty_ms,
            last_update: 0,
            pulse: config.color,
            fade: FadeDirection::Dimming,
            wheel_pos: 0,
            blink_phase: BlinkPhase::Off,
            phase_start: 0,
            current: COLOR_OFF,
            changed: true,
            mode_changed: true,
        }
    }

    /// Advances the active mode and flushes a changed color to the sink.
    ///
    /// Non-blocking; returns without touching the sink when the LED is
    /// hidden, when the gating interval has not elapsed, or when the
    /// computed sample matches what was last written.
    pub fn update(&mut self) {
        if !self.visible {
            return;
        }

        let now = self.clock.now();

        // Blink owns its period/duty timing and bypasses the generic gate.
        if self.mode != LedMode::Blink {
            if elapsed_since(now, self.last_update) < self.interval_ms {
                return;
            }
            self.last_update = now;
        }

        let sample = match self.mode {
            LedMode::Fixed => self.color,
            LedMode::Blink => self.advance_blink(now),
            LedMode::Pulse => self.advance_pulse(),
            LedMode::Fabulous => self.advance_wheel(),
        };

        if !self.changed {
            return;
        }

        self.write_out(sample);
        self.changed = false;
        self.mode_changed = false;
    }

    /// Shows or hides the LED.
    ///
    /// Hiding drives the sink to off exactly once and turns every
    /// subsequent [`update`](StatusLed::update) into a no-op until
    /// visibility is restored. A no-op when the state already matches.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }

        self.changed = true;
        self.mode_changed = true;
        self.visible = visible;

        if !visible {
            self.write_out(COLOR_OFF);
            return;
        }

        self.update();
    }

    /// Switches to [`LedMode::Fixed`] with the given color and brightness.
    ///
    /// Enables visibility and reflects the new state immediately. Repeating
    /// the call with identical parameters produces no further sink writes.
    pub fn set_fixed(&mut self, color: Rgb, brightness: u8) {
        if self.mode != LedMode::Fixed || color != self.color || brightness != self.brightness {
            self.changed = true;
            self.mode_changed = true;
        }
        self.mode = LedMode::Fixed;
        self.color = color;
        self.brightness = brightness;
        self.interval_ms = 0;

        self.reveal();
        self.update();
    }

    /// Switches to [`LedMode::Blink`].
    ///
    /// The LED holds `color` for `period_ms` ticks, goes dark for
    /// `on_duty_ms` ticks, and repeats, starting with an on-edge at the
    /// current tick. Blink keeps its own timing; the generic gating
    /// interval is reset to zero.
    pub fn set_blink(&mut self, color: Rgb, brightness: u8, period_ms: Ticks, on_duty_ms: Ticks) {
        if self.mode != LedMode::Blink
            || color != self.color
            || brightness != self.brightness
            || period_ms != self.period_ms
            || on_duty_ms != self.on_duty_ms
        {
            self.changed = true;
            self.mode_changed = true;
        }
        self.mode = LedMode::Blink;
        self.color = color;
        self.brightness = brightness;
        self.period_ms = period_ms;
        self.on_duty_ms = on_duty_ms;
        self.interval_ms = 0;

        self.reveal();
        self.update();
    }

    /// Switches to [`LedMode::Pulse`], breathing around `color`.
    ///
    /// One fade step of `step` per channel runs every `interval_ms` ticks,
    /// dimming first. A `step` of 0 would stall the fade and is clamped
    /// to 1.
    pub fn set_pulse(&mut self, color: Rgb, brightness: u8, interval_ms: Ticks, step: u8) {
        let step = step.max(1);
        if self.mode != LedMode::Pulse
            || color != self.color
            || brightness != self.brightness
            || interval_ms != self.interval_ms
            || step != self.step
        {
            self.changed = true;
            self.mode_changed = true;
        }
        self.mode = LedMode::Pulse;
        self.color = color;
        self.brightness = brightness;
        self.interval_ms = interval_ms;
        self.step = step;

        self.reveal();
        self.update();
    }

    /// Switches to [`LedMode::Fabulous`], cycling the hue wheel.
    ///
    /// The wheel position advances by `step` every `interval_ms` ticks,
    /// restarting from the top of the wheel. The base color is left
    /// untouched. A `step` of 0 is clamped to 1.
    pub fn set_fabulous(&mut self, brightness: u8, interval_ms: Ticks, step: u8) {
        let step = step.max(1);
        if self.mode != LedMode::Fabulous
            || brightness != self.brightness
            || interval_ms != self.interval_ms
            || step != self.step
        {
            self.changed = true;
            self.mode_changed = true;
        }
        self.mode = LedMode::Fabulous;
        self.brightness = brightness;
        self.interval_ms = interval_ms;
        self.step = step;

        self.reveal();
        self.update();
    }

    /// Returns the active mode.
    pub fn mode(&self) -> LedMode {
        self.mode
    }

    /// Returns true if the LED is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the configured base color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Returns the configured brightness.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Returns the color last written to the sink.
    pub fn current_color(&self) -> Rgb {
        self.current
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Replaces the sink at runtime, returning the previous one.
    pub fn replace_sink(&mut self, sink: S) -> S {
        core::mem::replace(&mut self.sink, sink)
    }

    fn reveal(&mut self) {
        if !self.visible {
            self.visible = true;
            self.changed = true;
            self.mode_changed = true;
        }
    }

    fn write_out(&mut self, sample: Rgb) {
        let out = sample.clamped().scaled(self.brightness);
        self.sink.write(out);
        self.current = out;
    }

    fn advance_blink(&mut self, now: Ticks) -> Rgb {
        if self.mode_changed {
            self.blink_phase = BlinkPhase::On;
            self.phase_start = now;
            self.changed = true;
        } else {
            let elapsed = elapsed_since(now, self.phase_start);
            match self.blink_phase {
                BlinkPhase::On if elapsed >= self.period_ms => {
                    self.blink_phase = BlinkPhase::Off;
                    self.phase_start = now;
                    self.changed = true;
                }
                BlinkPhase::Off if elapsed >= self.on_duty_ms => {
                    self.blink_phase = BlinkPhase::On;
                    self.phase_start = now;
                    self.changed = true;
                }
                _ => {}
            }
        }

        match self.blink_phase {
            BlinkPhase::On => self.color,
            BlinkPhase::Off => COLOR_OFF,
        }
    }

    fn advance_pulse(&mut self) -> Rgb {
        if self.mode_changed {
            self.pulse = self.color;
            self.fade = FadeDirection::Dimming;
        }

        let step = i16::from(self.step);
        match self.fade {
            FadeDirection::Dimming => {
                self.pulse.red -= step;
                self.pulse.green -= step;
                self.pulse.blue -= step;
                // Reversal uses the post-adjustment values, so the sample
                // that crosses the floor is still displayed once.
                if at_dim_floor(self.pulse, step) {
                    self.fade = FadeDirection::Brightening;
                }
            }
            FadeDirection::Brightening => {
                self.pulse.red += step;
                self.pulse.green += step;
                self.pulse.blue += step;
                if at_bright_ceiling(self.pulse, step) {
                    self.fade = FadeDirection::Dimming;
                }
            }
        }

        self.changed = true;
        self.pulse
    }

    fn advance_wheel(&mut self) -> Rgb {
        if self.mode_changed {
            self.wheel_pos = 0;
        }

        let sample = wheel_color(self.wheel_pos);
        self.wheel_pos = self.wheel_pos.wrapping_add(self.step);
        self.changed = true;
        sample
    }
}

/// True once every channel has reached the dim floor, or would cross it on
/// the next step.
fn at_dim_floor(color: Rgb, step: i16) -> bool {
    let dim = |c: i16| step >= c || c <= PULSE_DIMMEST;
    dim(color.red) && dim(color.green) && dim(color.blue)
}

/// True once every channel has reached the bright ceiling, or the remaining
/// headroom is smaller than one step.
fn at_bright_ceiling(color: Rgb, step: i16) -> bool {
    let bright = |c: i16| c >= CHANNEL_MAX || step >= CHANNEL_MAX - c;
    bright(color.red) && bright(color.green) && bright(color.blue)
}

/// Maps an 8-bit wheel position to a fully saturated hue.
///
/// The inverted position selects one of three 85-wide segments; within a
/// segment one channel ramps up by `3 * offset`, one ramps down by
/// `255 - 3 * offset`, and the third stays at zero, producing a continuous
/// red-green-blue cycle.
fn wheel_color(pos: u8) -> Rgb {
    let pos = 255 - pos;
    if pos < 85 {
        let ramp = i16::from(pos) * 3;
        Rgb::new(ramp, 255 - ramp, 0)
    } else if pos < 170 {
        let ramp = i16::from(pos - 85) * 3;
        Rgb::new(255 - ramp, 0, ramp)
    } else {
        let ramp = i16::from(pos - 170) * 3;
        Rgb::new(0, ramp, 255 - ramp)
    }
}
