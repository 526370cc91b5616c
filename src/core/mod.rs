//! The actual emulation code, provided as a library.
//!
//! Sweep and envelope units of the NES' two pulse channels.
//! The units are driven by an external frame sequencer, and their outputs (period, mute flag
//! and volume) can be read at any time.
//! ```
//! use pulsemod::core::{Apu, EnvelopeConfig, SweepConfig};
//! let mut apu = Apu::new();
//! let pulse = &mut apu.pulse_channels[1];
//! pulse.set_period(100);
//! pulse.write_sweep(SweepConfig {
//!     enabled: true,
//!     period: 0,
//!     negate: false,
//!     shift: 1,
//! });
//! pulse.write_envelope(EnvelopeConfig {
//!     constant: false,
//!     looping: true,
//!     volume: 3,
//! });
//! pulse.restart();
//! // One half frame of the frame sequencer
//! apu.on_quarter_frame();
//! apu.on_half_frame();
//! assert_eq!(apu.pulse_channels[1].period(), 150);
//! assert_eq!(apu.pulse_channels[1].volume(), 15);
//! // Save the state of the APU
//! let savestate = apu.to_savestate().unwrap();
//! let loaded = Apu::from_savestate(&savestate).unwrap();
//! assert_eq!(loaded.pulse_channels[1].period(), 150);
//! ```
mod apu;
pub use apu::*;

/// The largest period a pulse channel can have, target periods above this mute the channel.
pub const MAX_PERIOD: u16 = 0x7FF;
/// Periods below this mute the channel.
pub const MIN_PERIOD: u16 = 8;
/// The value the envelope's decay level counter restarts at.
pub const MAX_DECAY: u8 = 0xF;
