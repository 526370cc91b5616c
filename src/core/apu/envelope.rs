use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::divider::Divider;
use crate::core::MAX_DECAY;

/// The decoded envelope fields of a pulse channel's control register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeConfig {
    /// Constant volume flag
    pub constant: bool,
    /// Loop flag, shared with the length counter's halt flag
    pub looping: bool,
    /// Either the constant volume or the divider period, 0-15
    pub volume: u8,
}

#[derive(Clone, Copy, Default, Serialize, Deserialize)]
/// An envelope generator unit.
/// Controls the volume of the APU's pulse units.
/// See [the NESDEV wiki](https://www.nesdev.org/wiki/APU_Envelope)
pub struct Envelope {
    /// Start flag, set by a note-on and consumed by the next quarter frame
    pub start: bool,
    /// Constant volume flag
    pub constant: bool,
    /// Loop flag
    pub looping: bool,
    /// Volume value (either the volume or the divider's period)
    pub volume: u8,
    /// Volume divider
    pub divider: Divider,
    /// Current value of the volume decay
    decay: u8,
}
impl Envelope {
    pub fn new() -> Envelope {
        Envelope::default()
    }
    /// Apply a register write.
    /// Does not restart the envelope, see [Envelope::set_start_flag].
    pub fn write(&mut self, config: EnvelopeConfig) {
        self.constant = config.constant;
        self.looping = config.looping;
        self.volume = config.volume;
        self.divider.period = config.volume;
    }
    /// Restart the envelope on the next quarter frame
    pub fn set_start_flag(&mut self) {
        self.start = true;
    }
    /// Clock the envelope unit
    pub fn on_quarter_frame(&mut self) {
        if self.start {
            self.start = false;
            self.decay = MAX_DECAY;
            self.divider.force_reload();
            return;
        }
        if self.divider.clock() {
            if self.decay > 0 {
                self.decay -= 1;
            } else if self.looping {
                self.decay = MAX_DECAY;
            }
        }
    }
    /// Mask every field to its register width
    pub(super) fn mask_fields(&mut self) {
        self.volume &= 0xF;
        self.divider.period &= 0xF;
        self.divider.counter &= 0xF;
        self.decay &= MAX_DECAY;
    }
    /// Current value of the decay level counter
    pub fn decay(&self) -> u8 {
        self.decay
    }
    /// Get the current output of the unit
    pub fn value(&self) -> u8 {
        if self.constant {
            self.volume
        } else {
            self.decay
        }
    }
}
impl Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "start={} constant={} loop={} volume={:X} decay={:X} divider={:?}",
            self.start, self.constant, self.looping, self.volume, self.decay, self.divider
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(volume: u8, looping: bool) -> Envelope {
        let mut e = Envelope::new();
        e.write(EnvelopeConfig {
            constant: false,
            looping,
            volume,
        });
        e
    }

    #[test]
    fn test_start_flag() {
        let mut e = envelope(10, false);
        e.set_start_flag();
        // Not applied until the next quarter frame
        assert_eq!(e.decay(), 0);
        e.on_quarter_frame();
        assert!(!e.start);
        assert_eq!(e.decay(), 15);
        assert_eq!(e.divider.counter, 10);
        e.on_quarter_frame();
        assert_eq!(e.divider.counter, 9);
        assert_eq!(e.decay(), 15);
    }

    #[test]
    fn test_decays_once_per_divider_period() {
        let mut e = envelope(2, false);
        e.set_start_flag();
        e.on_quarter_frame();
        // Counter goes 2 -> 1 -> 0 -> fire
        (0..2).for_each(|_| e.on_quarter_frame());
        assert_eq!(e.decay(), 15);
        e.on_quarter_frame();
        assert_eq!(e.decay(), 14);
    }

    #[test]
    fn test_stops_at_zero_without_loop() {
        let mut e = envelope(0, false);
        e.set_start_flag();
        e.on_quarter_frame();
        (0..15).for_each(|_| e.on_quarter_frame());
        assert_eq!(e.decay(), 0);
        (0..20).for_each(|_| e.on_quarter_frame());
        assert_eq!(e.decay(), 0);
    }

    #[test]
    fn test_loops_back_to_fifteen() {
        let mut e = envelope(0, true);
        e.set_start_flag();
        e.on_quarter_frame();
        (0..15).for_each(|_| e.on_quarter_frame());
        assert_eq!(e.decay(), 0);
        e.on_quarter_frame();
        assert_eq!(e.decay(), 15);
        (0..16).for_each(|_| e.on_quarter_frame());
        assert_eq!(e.decay(), 15);
    }

    #[test]
    fn test_constant_volume_keeps_decaying() {
        let mut e = Envelope::new();
        e.write(EnvelopeConfig {
            constant: true,
            looping: false,
            volume: 7,
        });
        e.set_start_flag();
        e.on_quarter_frame();
        (0..8 * 3).for_each(|_| e.on_quarter_frame());
        assert_eq!(e.value(), 7);
        e.constant = false;
        assert_eq!(e.value(), 12);
    }
}
