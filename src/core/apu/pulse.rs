use log::*;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::{
    envelope::{Envelope, EnvelopeConfig},
    sweep::{NegatePolarity, Sweep, SweepConfig, SweepOutput},
};
use crate::core::MAX_PERIOD;

#[derive(Clone, Copy, Default, Serialize, Deserialize)]
/// One of the APU's pulse channels.
///
/// Owns the channel's period and is the only thing that writes it, either from a
/// timer register write or from its sweep unit on a half frame.
pub struct PulseChannel {
    /// The 11 bit period of the pulse wave
    period: u16,
    /// The sweep unit
    pub sweep: Sweep,
    /// The envelope
    pub envelope: Envelope,
}
impl PulseChannel {
    pub fn new(polarity: NegatePolarity) -> PulseChannel {
        PulseChannel {
            period: 0,
            sweep: Sweep::new(polarity),
            envelope: Envelope::new(),
        }
    }
    /// Set the period from a timer register write
    pub fn set_period(&mut self, period: u16) {
        self.period = period & MAX_PERIOD;
    }
    pub fn write_sweep(&mut self, config: SweepConfig) {
        debug!("Sweep write {:?}", config);
        self.sweep.write(config);
    }
    pub fn write_envelope(&mut self, config: EnvelopeConfig) {
        debug!("Envelope write {:?}", config);
        self.envelope.write(config);
    }
    /// Note-on, restarts the envelope on the next quarter frame
    pub fn restart(&mut self) {
        self.envelope.set_start_flag();
    }
    pub fn on_quarter_frame(&mut self) {
        self.envelope.on_quarter_frame();
    }
    pub fn on_half_frame(&mut self) -> SweepOutput {
        let out = self.sweep.on_half_frame(self.period);
        self.period = out.period;
        let muted = self.muted();
        if muted != out.muted {
            trace!("Mute changed {} -> {} at period {:#X}", out.muted, muted, self.period);
        }
        out
    }
    pub fn period(&self) -> u16 {
        self.period
    }
    /// The sweep unit's target for the current period
    pub fn target_period(&self) -> u32 {
        self.sweep.target_period(self.period)
    }
    /// Return `true` if the sweep unit is muting the channel
    pub fn muted(&self) -> bool {
        self.sweep.muted(self.period)
    }
    /// The volume sent to the mixer, 0 while muted
    pub fn volume(&self) -> u8 {
        if self.muted() {
            0
        } else {
            self.envelope.value()
        }
    }
    /// Mask every field to its register width, used on state that did not come from register writes
    pub(super) fn mask_fields(&mut self) {
        self.period &= MAX_PERIOD;
        self.sweep.mask_fields();
        self.envelope.mask_fields();
    }
    /// Restore the power-on state, keeping the channel's polarity
    pub fn reset(&mut self) {
        *self = PulseChannel::new(self.sweep.polarity());
    }
}
impl Debug for PulseChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "period={:3X} target={:X} muted={} sweep=[{:?}] envelope=[{:?}]",
            self.period,
            self.target_period(),
            self.muted(),
            self.sweep,
            self.envelope
        )
    }
}
