use clap::{value_parser, Parser};
use log::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::MAX_FRAMES;
use crate::core::{EnvelopeConfig, SweepConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// YAML scenario file, replaces the channel flags below when given
    #[arg(long)]
    pub scenario: Option<PathBuf>,
    /// Pulse channel to run
    #[arg(long, default_value_t = 1, value_parser = value_parser!(u8).range(1..=2))]
    pub channel: u8,
    /// Initial 11 bit period
    #[arg(long, default_value_t = 0x100, value_parser = value_parser!(u16).range(0..=0x7FF))]
    pub period: u16,
    /// Enable the sweep unit
    #[arg(long)]
    pub enabled: bool,
    /// Set the sweep's negate flag
    #[arg(long)]
    pub negate: bool,
    /// Sweep shift count
    #[arg(long, default_value_t = 0, value_parser = value_parser!(u8).range(0..8))]
    pub shift: u8,
    /// Sweep divider period
    #[arg(long, default_value_t = 0, value_parser = value_parser!(u8).range(0..8))]
    pub sweep_period: u8,
    /// Constant volume, or the envelope's divider period
    #[arg(long, default_value_t = 15, value_parser = value_parser!(u8).range(0..16))]
    pub volume: u8,
    /// Use the volume directly instead of the envelope's decay
    #[arg(long)]
    pub constant_volume: bool,
    /// Loop the envelope
    #[arg(long = "loop")]
    pub looping: bool,
    /// Number of frame sequencer frames to run
    #[arg(long, default_value_t = 4, value_parser = value_parser!(u32).range(0..=MAX_FRAMES as i64))]
    pub frames: u32,
    /// Log level
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
    /// File to write the final APU savestate to
    #[arg(long)]
    pub savestate: Option<PathBuf>,
}

impl Args {
    /// Build the scenario to run, either from [Args::scenario] or from the flags
    pub fn scenario(&self) -> Result<Scenario, String> {
        match &self.scenario {
            Some(path) => {
                let data = std::fs::read_to_string(path)
                    .map_err(|e| format!("Unable to read scenario {:?}: {}", path, e))?;
                let scenario = Scenario::from_yaml(&data)?;
                info!("Loaded scenario {:?}", path);
                Ok(scenario)
            }
            None => Ok(Scenario {
                channel: self.channel,
                period: self.period,
                sweep: SweepConfig {
                    enabled: self.enabled,
                    period: self.sweep_period,
                    negate: self.negate,
                    shift: self.shift,
                },
                envelope: EnvelopeConfig {
                    constant: self.constant_volume,
                    looping: self.looping,
                    volume: self.volume,
                },
                frames: self.frames,
            }),
        }
    }
}

/// A channel configuration to trace.
///
/// Can be loaded from YAML, any field left out uses its default.
/// ```yaml
/// channel: 2
/// period: 100
/// sweep:
///   enabled: true
///   shift: 1
/// frames: 2
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Pulse channel, 1 or 2
    pub channel: u8,
    /// Initial period
    pub period: u16,
    /// Sweep register write
    pub sweep: SweepConfig,
    /// Envelope register write
    pub envelope: EnvelopeConfig,
    /// Number of frame sequencer frames
    pub frames: u32,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            channel: 1,
            period: 0x100,
            sweep: SweepConfig::default(),
            envelope: EnvelopeConfig {
                volume: 15,
                ..Default::default()
            },
            frames: 4,
        }
    }
}

impl Scenario {
    /// Parse and validate a scenario from YAML.
    /// Register fields must already fit in their bit widths.
    pub fn from_yaml(data: &str) -> Result<Scenario, String> {
        let scenario: Scenario =
            serde_yaml::from_str(data).map_err(|e| format!("Unable to parse scenario: {}", e))?;
        scenario.validate()?;
        Ok(scenario)
    }
    /// Check that every field fits where the trace runner will put it
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=2).contains(&self.channel) {
            return Err(format!("Invalid channel {}, must be 1 or 2", self.channel));
        }
        if self.period > 0x7FF {
            return Err(format!("Period {:#X} does not fit in 11 bits", self.period));
        }
        if self.sweep.shift > 7 || self.sweep.period > 7 {
            return Err(format!("Invalid sweep {:?}", self.sweep));
        }
        if self.envelope.volume > 15 {
            return Err(format!("Invalid volume {:X}", self.envelope.volume));
        }
        if self.frames > MAX_FRAMES {
            return Err(format!(
                "Too many frames {}, at most {} can be run",
                self.frames, MAX_FRAMES
            ));
        }
        Ok(())
    }
}
