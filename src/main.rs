//! Hill Hopper entry point
//!
//! Native builds run the simulation headless with the demo autopilot; the
//! browser build is driven from `web::WebSession` instead.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::{ArgAction, Parser};
    use hill_hopper::sim::{Autopilot, GameEvent, GameState, InputEdges};
    use hill_hopper::{Config, clock_seed};

    #[derive(Parser, Debug)]
    #[command(
        name = "hill-hopper",
        version,
        about = "Run the hill jumper headless with the demo autopilot"
    )]
    struct Cli {
        /// Number of frames to simulate
        #[arg(long, default_value_t = 3600)]
        ticks: u64,

        /// Terrain seed (default: wall clock)
        #[arg(long)]
        seed: Option<u64>,

        /// JSON file overriding the default tuning
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print every frame's snapshot as a JSON line
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,

        /// Print the effective config and exit
        #[arg(long, action = ArgAction::SetTrue)]
        print_config: bool,
    }

    pub fn run() -> ExitCode {
        env_logger::init();

        let cli = Cli::parse();

        let config = match cli.config.as_ref().map(Config::load) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
            None => Config::default(),
        };
        if cli.print_config {
            match config.to_json() {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    log::error!("{e}");
                    return ExitCode::FAILURE;
                }
            }
            return ExitCode::SUCCESS;
        }
        let seed = cli.seed.unwrap_or_else(clock_seed);
        let mut state = match GameState::with_config(config, seed) {
            Ok(state) => state,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        };

        log::info!("Hill Hopper (headless) running {} ticks", cli.ticks);

        let mut pilot = Autopilot::default();
        let mut edges = InputEdges::default();
        let mut jumps = 0u32;
        for _ in 0..cli.ticks {
            let (_, slope) = state.terrain.sample(state.body.pos.x);
            let input = edges.sample(pilot.held(&state.body, slope));
            let snapshot = state.step(&input);

            for event in &snapshot.events {
                if let GameEvent::JumpLanded { length, height, .. } = event {
                    jumps += 1;
                    log::debug!("Jump {jumps}: length {length:.0}, height {height:.0}");
                }
            }
            if cli.json {
                match snapshot.to_json() {
                    Ok(line) => println!("{line}"),
                    Err(e) => {
                        log::error!("Failed to encode snapshot: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            }
        }

        let score = &state.score;
        println!(
            "seed {seed}: {jumps} jumps, x {:.0}, height record {:.0}, length record {:.0}",
            state.body.pos.x, score.height_record, score.length_record
        );
        ExitCode::SUCCESS
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
