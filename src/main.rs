// Terminal Sokoban on randomly generated levels, against the clock.
// Controls: arrows or W/A/S/D to move, Backspace/U to undo, Esc for the menu, Q to quit.
// Tiles: '#' wall, '@' player, '$' box, '.' goal, '*' box on goal, '+' player on goal, ' ' floor.

mod cli_options;
mod config;
mod console_interface;
mod core;
mod level_export;
mod models;
#[cfg(test)]
mod test;

use crate::cli_options::{Cli, resolve_difficulty};
use crate::config::GameConfig;
use crate::console_interface::{
    FrameClock, cleanup_terminal, poll_inputs, render_game, setup_terminal,
};
use crate::core::{GameSession, RoundOutcome, SessionEvent, generate};
use crate::level_export::get_json_level;
use crate::models::GameRenderState;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::{Duration, Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    if cli.dump_level {
        let config = cli.to_config(Default::default());
        return dump_level(&config);
    }

    let difficulty = resolve_difficulty(
        cli.difficulty.as_deref(),
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )?;
    let config = cli.to_config(difficulty);
    info!("starting with {:?}", config);

    let session = GameSession::new(config, Instant::now());
    let mut terminal = setup_terminal()?;
    let result = run_interactive(session, &mut terminal);
    cleanup_terminal()?;

    result
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let log_out = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&cli.log_file)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_out)))
        .init();
    Ok(())
}

fn dump_level(config: &GameConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let puzzle = generate(config.width, config.height, config.goals, &mut rng)?;
    println!("{}", get_json_level(&puzzle)?);
    Ok(())
}

fn run_interactive(
    mut session: GameSession,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut clock = FrameClock::new(session.config().frame_duration());

    'frames: loop {
        for input in poll_inputs(Duration::ZERO)? {
            match session.handle_input(input, Instant::now()) {
                SessionEvent::Quit => break 'frames,
                SessionEvent::RoundOver(outcome) => {
                    finish_round(&mut session, terminal, outcome)?;
                }
                _ => {}
            }
        }

        if let Some(outcome) = session.tick(Instant::now()) {
            finish_round(&mut session, terminal, outcome)?;
        }

        render_game(
            terminal,
            &GameRenderState {
                session: &session,
                now: Instant::now(),
                banner: None,
            },
        )?;
        clock.tick();
    }

    info!("quit");
    Ok(())
}

/// Shows the result over the final board, holds it for a moment, then deals a new level.
fn finish_round(
    session: &mut GameSession,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    outcome: RoundOutcome,
) -> Result<(), Box<dyn std::error::Error>> {
    render_game(
        terminal,
        &GameRenderState {
            session: &*session,
            now: Instant::now(),
            banner: Some(outcome),
        },
    )?;
    std::thread::sleep(session.config().result_pause);
    session.reset_level(Instant::now());
    Ok(())
}
