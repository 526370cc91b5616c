#![cfg(feature = "cli")]
use pulsemod::{
    app::{run, utils, Scenario},
    core::Apu,
};

#[test]
fn test_trace_sweep_up() {
    let scenario = Scenario::from_yaml(
        "
channel: 2
period: 100
sweep:
  enabled: true
  shift: 1
envelope:
  volume: 0
frames: 1
",
    )
    .unwrap();
    let (_, lines) = run(&scenario).unwrap();
    insta::assert_snapshot!(lines.join("\n"), @r"
    step=1 period=064 target=096 muted=false volume=15
    step=2 period=096 target=0E1 muted=false volume=14
    step=3 period=096 target=0E1 muted=false volume=13
    step=4 period=0E1 target=151 muted=false volume=12
    ");
}

#[test]
fn test_trace_overflow_mute() {
    let scenario = Scenario {
        channel: 1,
        period: 0x400,
        frames: 1,
        ..Default::default()
    };
    let (apu, lines) = run(&scenario).unwrap();
    insta::assert_snapshot!(lines.join("\n"), @r"
    step=1 period=400 target=800 muted=true volume=0
    step=2 period=400 target=800 muted=true volume=0
    step=3 period=400 target=800 muted=true volume=0
    step=4 period=400 target=800 muted=true volume=0
    ");
    // Pulse 2 is left untouched
    assert_eq!(apu.pulse_channels[1].period(), 0);
}

#[test]
fn test_rejects_invalid_channel() {
    for channel in [0, 3] {
        let scenario = Scenario {
            channel,
            ..Default::default()
        };
        assert!(run(&scenario).is_err());
    }
}

#[test]
fn test_rejects_too_many_frames() {
    let scenario = Scenario {
        frames: 1 << 30,
        ..Default::default()
    };
    assert!(run(&scenario).is_err());
}

#[test]
fn test_savestate_file() {
    let (apu, _) = run(&Scenario::default()).unwrap();
    let path = std::env::temp_dir().join(format!("pulsemod_{}.bin", std::process::id()));
    utils::write_savestate(&apu, &path).unwrap();
    let loaded: Apu = utils::read_savestate(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(format!("{:?}", loaded), format!("{:?}", apu));
}

#[test]
fn test_missing_savestate_file() {
    let path = std::env::temp_dir().join("pulsemod_does_not_exist.bin");
    assert!(utils::read_savestate(&path).is_err());
}
