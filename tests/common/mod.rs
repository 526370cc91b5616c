// Create a pulse channel with its registers written
#[macro_export]
macro_rules! channel_with {
    ($polarity: expr, $period: expr, $sweep: expr, $envelope: expr) => {{
        let mut pulse = pulsemod::core::PulseChannel::new($polarity);
        pulse.set_period($period);
        pulse.write_sweep($sweep);
        pulse.write_envelope($envelope);
        pulse
    }};
    ($polarity: expr, $period: expr, $sweep: expr) => {{
        channel_with!(
            $polarity,
            $period,
            $sweep,
            pulsemod::core::EnvelopeConfig::default()
        )
    }};
}

// Clock a channel's sweep a number of times, returning the period after each half frame
#[macro_export]
macro_rules! clock_half_frames {
    ($pulse: ident, $count: expr) => {{
        (0..($count))
            .map(|_| {
                $pulse.on_half_frame();
                $pulse.period()
            })
            .collect::<Vec<u16>>()
    }};
}
