use clap::Parser;
use log::*;
use pulsemod::app::{run, utils::write_savestate, Args};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    let args = Args::parse();
    if let Err(e) = TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Unable to initialize logger: {}", e);
    }
    let (apu, lines) = match args.scenario().and_then(|s| run(&s)) {
        Ok(r) => r,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    lines.iter().for_each(|l| println!("{}", l));
    debug!("Final state\n{:?}", apu);
    if let Some(path) = &args.savestate {
        if let Err(e) = write_savestate(&apu, path) {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
