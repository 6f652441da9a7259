//! Ledge Runner entry point
//!
//! Headless driver: plays a number of runs at the fixed tick rate without
//! rendering, logs a summary of each and keeps the best score on disk.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use ledge_runner::sim::{GameEvent, GameState, TickInput, tick};
use ledge_runner::{BestScoreStore, FileStore, Settings, logging};

/// A side-scrolling runner over procedurally generated terrain
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file
    #[arg(long, default_value = "ledge_runner_settings.json")]
    settings: PathBuf,

    /// Seed of the first run
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks per run before it is cut off
    #[arg(long)]
    ticks: Option<u64>,

    /// Number of runs to play
    #[arg(long)]
    runs: Option<u32>,

    /// Best-score file
    #[arg(long)]
    best_file: Option<PathBuf>,

    /// Feed no intents instead of using the autopilot
    #[arg(long)]
    manual: bool,

    /// More log output: -v for generated patterns, -vv for every shot and pickup
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Command-line flags win over the settings file
    fn apply(&self, settings: &mut Settings) {
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(ticks) = self.ticks {
            settings.ticks = ticks;
        }
        if let Some(runs) = self.runs {
            settings.restarts = runs.saturating_sub(1);
        }
        if let Some(path) = &self.best_file {
            settings.best_score_path = path.clone();
        }
        if self.manual {
            settings.autopilot = false;
        }
    }
}

/// Outcome of one run
struct RunSummary {
    seed: u64,
    score: u64,
    ticks: u64,
    shots: u32,
    pickups: u32,
    finished: bool,
}

/// Game instance holding all state
struct Game {
    state: GameState,
    input: TickInput,
}

impl Game {
    fn new(seed: u64, best_score: u64, autopilot: bool) -> Self {
        Self {
            state: GameState::new(seed, best_score),
            input: TickInput {
                idle_mode: autopilot,
                ..Default::default()
            },
        }
    }

    /// Tick until the run ends or the tick limit is hit
    fn play(&mut self, max_ticks: u64) -> RunSummary {
        let mut shots = 0;
        let mut pickups = 0;
        while !self.state.is_over() && self.state.time_ticks < max_ticks {
            tick(&mut self.state, &self.input);
            for event in &self.state.events {
                match event {
                    GameEvent::HazardShot { .. } => shots += 1,
                    GameEvent::AmmoCollected { .. } | GameEvent::ThrustCollected { .. } => pickups += 1,
                    _ => {}
                }
            }
        }

        RunSummary {
            seed: self.state.seed,
            score: self.state.score(),
            ticks: self.state.time_ticks,
            shots,
            pickups,
            finished: self.state.is_over(),
        }
    }

    /// Best score including a run that was cut off before it ended
    fn best_score(&self) -> u64 {
        self.state.best_score().max(self.state.score())
    }

    /// Reset game state for the next run, keeping the best score
    fn restart(&mut self) {
        if self.state.is_over() {
            let restart = TickInput {
                restart: true,
                ..Default::default()
            };
            tick(&mut self.state, &restart);
        } else {
            log::debug!("Run cut off at tick {}", self.state.time_ticks);
            let seed = self.state.seed.wrapping_add(1);
            self.state = GameState::new(seed, self.best_score());
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut settings = Settings::load(&args.settings).unwrap_or_else(|err| {
        log::warn!("Could not read settings ({}), using defaults", err);
        Settings::default()
    });
    args.apply(&mut settings);

    let mut store = FileStore::new(&settings.best_score_path);
    let stored_best = store.load().unwrap_or_else(|err| {
        log::warn!("Could not read best score ({}), starting from 0", err);
        0
    });

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!(
        "Ledge Runner starting: {} run(s) of up to {} ticks, autopilot {}",
        settings.runs(),
        settings.ticks,
        settings.autopilot
    );

    let mut game = Game::new(seed, stored_best, settings.autopilot);
    for run in 1..=settings.runs() {
        let summary = game.play(settings.ticks);
        log::info!(
            "Run {} (seed {}): score {} in {} ticks, {} hazards shot, {} pickups{}",
            run,
            summary.seed,
            summary.score,
            summary.ticks,
            summary.shots,
            summary.pickups,
            if summary.finished { "" } else { " (cut off)" }
        );
        if run < settings.runs() {
            game.restart();
        }
    }

    let best = game.best_score();
    match store.record(best) {
        Ok(true) => log::info!("New best score: {}", best),
        Ok(false) => log::info!("Best score stays at {}", stored_best),
        Err(err) => log::warn!("Could not save best score: {}", err),
    }
}
