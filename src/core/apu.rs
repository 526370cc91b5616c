use log::*;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

mod divider;
pub use divider::Divider;
mod envelope;
pub use envelope::{Envelope, EnvelopeConfig};
mod pulse;
pub use pulse::PulseChannel;
mod sweep;
pub use sweep::{NegatePolarity, Sweep, SweepConfig, SweepOutput};

/// The pulse half of the NES' APU.
///
/// Holds both pulse channels. The first channel's sweep negates with one's complement
/// and the second's with two's complement.
/// The frame sequencer is expected to call [Apu::on_quarter_frame] every quarter frame, and
/// [Apu::on_half_frame] on every other one. The two calls are independent.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Apu {
    /// The two pulse channels
    pub pulse_channels: [PulseChannel; 2],
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}

impl Apu {
    pub fn new() -> Apu {
        Apu {
            pulse_channels: [
                PulseChannel::new(NegatePolarity::OnesComplement),
                PulseChannel::new(NegatePolarity::TwosComplement),
            ],
        }
    }
    /// Create a new APU from a savestate.
    ///
    /// This is the opposite of [`Apu::to_savestate`].
    /// Fields wider than their registers are masked down to the register's width.
    pub fn from_savestate(savestate: &[u8]) -> Result<Apu, postcard::Error> {
        let mut apu: Apu = postcard::from_bytes(savestate)?;
        apu.pulse_channels.iter_mut().for_each(|p| p.mask_fields());
        Ok(apu)
    }
    /// Serialize the APU's state to bytes
    pub fn to_savestate(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }
    pub fn on_quarter_frame(&mut self) {
        self.pulse_channels
            .iter_mut()
            .for_each(|p| p.on_quarter_frame());
    }
    pub fn on_half_frame(&mut self) {
        self.pulse_channels.iter_mut().for_each(|p| {
            p.on_half_frame();
        });
    }
    /// Reset both channels to their power-on state
    pub fn reset(&mut self) {
        debug!("Resetting APU");
        self.pulse_channels.iter_mut().for_each(|p| p.reset());
    }
}
impl Debug for Apu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pulse1=[{:?}]\npulse2=[{:?}]",
            self.pulse_channels[0], self.pulse_channels[1]
        )
    }
}
