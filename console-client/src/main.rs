mod config;
mod render;
mod sinks;

use std::time::Duration;

use clap::Parser;
use common::games::SessionRng;
use common::games::snake::{BotController, SessionOutcome, SnakeSession, TickOutcome};
use common::logger::{self, LogLevel};
use common::progress::ProgressStore;
use common::{log, log_error, log_warn};
use tokio::time::{Instant, MissedTickBehavior};

use config::{get_config_path, get_config_store};
use render::render_board;
use sinks::{console_collaborators, TallyHandle};

#[derive(Parser)]
#[command(name = "snake_console", about = "Runs one Snake session on the autopilot")]
struct Args {
    /// Config file, defaults to snake_console_config.yaml next to the executable
    #[arg(long)]
    config: Option<String>,

    /// Progress file, overrides the one named in the config
    #[arg(long)]
    progress: Option<String>,

    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames even if the session is still running
    #[arg(long)]
    max_frames: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Print the board after every move
    #[arg(long)]
    show_frames: bool,

    #[arg(long)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    let min_level = if args.quiet { LogLevel::Warn } else { LogLevel::Info };
    logger::init_logger(prefix, min_level);

    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    let config = get_config_store(&config_path).load()?;
    log!("Using config {}", config_path);

    let progress_path = args.progress.clone().unwrap_or_else(|| config.progress_file.clone());
    let progress_store = ProgressStore::from_yaml_file(&progress_path);
    let progress = progress_store.load()?;
    log!(
        "Wallet holds {} coins, best score {} over {} games",
        progress.coins,
        progress.best_score,
        progress.games_played
    );

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let tally = TallyHandle::default();
    let mut session = SnakeSession::new(
        &config.snake,
        rng,
        console_collaborators(&tally, config.sound_enabled),
    )?;

    let frame_duration = Duration::from_secs_f64(1.0 / config.frames_per_second as f64);
    let layout = session.settings().layout();
    let mut frames = tokio::time::interval(frame_duration);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut last_frame = Instant::now();
    let mut frame_count: u64 = 0;

    loop {
        tokio::select! {
            now = frames.tick() => {
                let elapsed = now.saturating_duration_since(last_frame);
                last_frame = now;
                frame_count += 1;

                if let Some(direction) = BotController::calculate_move(&session) {
                    session.set_direction(direction);
                }

                let outcome = session.tick(elapsed);
                if matches!(outcome, TickOutcome::Moved | TickOutcome::Ate) {
                    if args.show_frames {
                        println!("{}", render_board(&session.bounds(), session.body(), session.food()));
                    }
                    let head = layout.cell_to_world(session.head());
                    log!("Move {}: head {} at ({:.2}, {:.2})", session.moves(), session.head(), head.x, head.y);
                }

                if let TickOutcome::Ended(_) = outcome {
                    break;
                }

                if let Some(limit) = args.max_frames
                    && frame_count >= limit
                {
                    log_warn!("Frame limit {} reached, abandoning the session", limit);
                    return Ok(());
                }
            }
            result = &mut ctrl_c => {
                result?;
                log_warn!("Interrupted, session abandoned without saving");
                return Ok(());
            }
        }
    }

    println!("{}", render_board(&session.bounds(), session.body(), session.food()));

    let Some(outcome) = tally.outcome() else {
        log_error!("Session ended without reporting an outcome, progress not saved");
        return Ok(());
    };
    let headline = match outcome {
        SessionOutcome::BoardFilled => "The snake filled the board!".to_string(),
        SessionOutcome::Defeat(reason) => format!("Game over: {}", reason),
    };
    println!("{}", headline);
    println!("Score: {}", tally.score());
    println!("Coins earned: {}", tally.coins());

    let progress = match progress_store.save_session(outcome, tally.score(), tally.coins()) {
        Ok(progress) => progress,
        Err(e) => {
            log_error!("Failed to save progress to {}: {}", progress_path, e);
            return Err(e.into());
        }
    };
    println!("Best score: {}", progress.best_score);
    println!("Record: {} wins, {} losses", progress.wins, progress.losses);
    println!("Wallet: {} coins", progress.coins);

    Ok(())
}
