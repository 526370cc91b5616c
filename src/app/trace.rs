use log::*;

use super::Scenario;
use crate::core::Apu;

/// Quarter frames per frame in the frame sequencer's 4-step mode.
/// Half frames happen on steps 2 and 4.
pub const STEPS_PER_FRAME: u32 = 4;
/// The most frames one scenario can run.
pub const MAX_FRAMES: u32 = 1 << 20;

/// Run a scenario.
///
/// Writes the scenario's registers to its channel, restarts the envelope, then clocks the APU
/// like the 4-step frame sequencer would.
/// Returns the final APU and one line per quarter frame describing the channel, or an error if
/// the scenario does not pass [Scenario::validate].
pub fn run(scenario: &Scenario) -> Result<(Apu, Vec<String>), String> {
    scenario.validate()?;
    let mut apu = Apu::new();
    let index = usize::from(scenario.channel - 1);
    {
        let pulse = &mut apu.pulse_channels[index];
        pulse.set_period(scenario.period);
        pulse.write_sweep(scenario.sweep);
        pulse.write_envelope(scenario.envelope);
        pulse.restart();
    }
    info!(
        "Running pulse {} for {} frames: {:?}",
        index + 1,
        scenario.frames,
        apu.pulse_channels[index]
    );
    let lines = (1..=scenario.frames * STEPS_PER_FRAME)
        .map(|step| {
            apu.on_quarter_frame();
            if step % 2 == 0 {
                apu.on_half_frame();
            }
            let pulse = &apu.pulse_channels[index];
            format!(
                "step={} period={:03X} target={:03X} muted={} volume={}",
                step,
                pulse.period(),
                pulse.target_period(),
                pulse.muted(),
                pulse.volume()
            )
        })
        .collect();
    Ok((apu, lines))
}
