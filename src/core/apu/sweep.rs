use log::*;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::divider::Divider;
use crate::core::{MAX_PERIOD, MIN_PERIOD};

/// How a sweep unit's adder negates the change amount.
///
/// The first pulse channel uses one's complement, the second uses two's complement.
/// This is the only difference between the two sweep units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegatePolarity {
    /// `-c - 1`, used by pulse 1
    #[default]
    OnesComplement,
    /// `-c`, used by pulse 2
    TwosComplement,
}

/// The decoded contents of a sweep register write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Enabled flag
    pub enabled: bool,
    /// Divider period, 0-7
    pub period: u8,
    /// Negate flag
    pub negate: bool,
    /// Shift count, 0-7
    pub shift: u8,
}

/// The result of clocking a sweep unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepOutput {
    /// The channel's period after the clock
    pub period: u16,
    /// Whether the channel was muted when the clock happened
    pub muted: bool,
}

#[derive(Clone, Copy, Default, Serialize, Deserialize)]
/// A sweep unit.
/// Periodically adjusts the period of a pulse channel, and mutes it when the period
/// is too low or the target period overflows.
/// The unit does not own the period, it is passed in by the channel whenever it is needed.
/// See [the NESDEV wiki](https://www.nesdev.org/wiki/APU_Sweep)
pub struct Sweep {
    /// Negate polarity, fixed at construction
    polarity: NegatePolarity,
    /// Enabled flag
    pub enabled: bool,
    /// Negate flag
    pub negate: bool,
    /// Shift count
    pub shift: u8,
    /// Sweep divider, its period is the sweep period
    pub divider: Divider,
    /// Reload flag, set by a register write and cleared on the next half frame
    pub reload: bool,
}
impl Sweep {
    pub fn new(polarity: NegatePolarity) -> Sweep {
        Sweep {
            polarity,
            ..Default::default()
        }
    }
    pub fn polarity(&self) -> NegatePolarity {
        self.polarity
    }
    /// Replace the unit's configuration with a register write, and set the reload flag
    pub fn write(&mut self, config: SweepConfig) {
        self.enabled = config.enabled;
        self.divider.period = config.period;
        self.negate = config.negate;
        self.shift = config.shift;
        self.reload = true;
    }
    /// Mask every field to its register width
    pub(super) fn mask_fields(&mut self) {
        self.shift &= 0x7;
        self.divider.period &= 0x7;
        self.divider.counter &= 0x7;
    }
    /// Compute the amount the period would change by if the sweep were applied
    pub fn change_amount(&self, period: u16) -> i32 {
        let raw = (period >> self.shift) as i32;
        if !self.negate {
            return raw;
        }
        match self.polarity {
            NegatePolarity::OnesComplement => -raw - 1,
            NegatePolarity::TwosComplement => -raw,
        }
    }
    /// Compute the target period.
    /// Only clamped at 0, a value above [MAX_PERIOD] mutes the channel.
    pub fn target_period(&self, period: u16) -> u32 {
        (period as i32 + self.change_amount(period)).max(0) as u32
    }
    /// Return `true` if the sweep unit is muting the channel.
    /// Evaluated regardless of whether the unit is enabled or its divider is firing.
    pub fn muted(&self, period: u16) -> bool {
        period < MIN_PERIOD || self.target_period(period) > MAX_PERIOD as u32
    }
    /// Clock the sweep unit on a half frame
    pub fn on_half_frame(&mut self, period: u16) -> SweepOutput {
        let muted = self.muted(period);
        // Both branches read the divider before it is clocked
        let divider_at_zero = self.divider.counter == 0;
        let new_period = if divider_at_zero && self.enabled && self.shift != 0 && !muted {
            let target = self.target_period(period) as u16;
            trace!("Sweep changed period {:#X} -> {:#X}", period, target);
            target
        } else {
            period
        };
        if divider_at_zero || self.reload {
            self.divider.force_reload();
            self.reload = false;
        } else {
            self.divider.clock();
        }
        SweepOutput {
            period: new_period,
            muted,
        }
    }
}
impl Debug for Sweep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "on={} negate={} shift={:X} divider={:?} reload={} polarity={:?}",
            self.enabled, self.negate, self.shift, self.divider, self.reload, self.polarity
        )
    }
}
