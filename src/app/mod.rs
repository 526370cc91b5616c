//! The application code, used when running pulsemod as a standalone trace tool.
//!
//! Configures one pulse channel from the command line or a scenario file (see [Args] and [Scenario]),
//! runs it through a number of frame sequencer frames, and prints the channel's outputs after every
//! quarter frame.
//! All of the actual emulation is done by importing from [core][crate::core]
mod config;
pub use config::{Args, Scenario};
mod trace;
pub use trace::{run, MAX_FRAMES, STEPS_PER_FRAME};
pub mod utils;
