use std::time::{Duration, Instant};

use clap::Parser;
use self_aware_snake::config::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, GridSize, WorldConfig};
use self_aware_snake::error::AppError;
use self_aware_snake::input::{self, GameInput};
use self_aware_snake::renderer;
use self_aware_snake::rng::{RandomSource, SeededRandom};
use self_aware_snake::score::{self, Records};
use self_aware_snake::session::{GameSession, SessionPhase};
use self_aware_snake::terminal_runtime::{AppTerminal, TerminalSession};
use self_aware_snake::theme::{self, THEME_ARCADE, Theme};
use self_aware_snake::ui::hud::HudInfo;
use self_aware_snake::ui::menu;

#[derive(Debug, Parser)]
#[command(version, about = "A snake game. The snake has started to notice.")]
struct Cli {
    /// Seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Grid width in cells.
    ///
    /// The floor leaves room for the three-segment starting body and a
    /// free cell for food.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH, value_parser = clap::value_parser!(u16).range(10..))]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT, value_parser = clap::value_parser!(u16).range(10..))]
    height: u16,

    /// Color theme name.
    #[arg(long, default_value = "arcade")]
    theme: String,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let theme = theme::theme_by_name(&cli.theme)
        .copied()
        .unwrap_or(THEME_ARCADE);
    let records = match score::load_records() {
        Ok(records) => records,
        Err(error) => {
            eprintln!("Failed to load records, starting fresh: {error}");
            Records::default()
        }
    };

    let mut terminal = TerminalSession::enter()?;
    run(terminal.terminal_mut(), &cli, theme, records)?;

    Ok(())
}

fn run(
    terminal: &mut AppTerminal,
    cli: &Cli,
    theme: Theme,
    mut records: Records,
) -> Result<(), AppError> {
    let config = WorldConfig {
        grid: GridSize {
            width: cli.width,
            height: cli.height,
        },
        ..WorldConfig::default()
    };
    let grid = config.grid;

    let rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(SeededRandom::from_seed(seed)),
        None => Box::new(SeededRandom::from_entropy()),
    };
    let mut session = GameSession::new(config, rng);

    let clock = Instant::now();
    let mut last_phase = session.phase();

    loop {
        let now_ms = u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX);
        let snapshot = session.tick(now_ms);

        terminal.draw(|frame| {
            let full = frame.area();
            let info = HudInfo {
                records,
                theme: &theme,
            };
            renderer::render(frame, &snapshot, grid, &info);

            match snapshot.phase {
                SessionPhase::Inactive => menu::render_start_menu(frame, full, records, &theme),
                SessionPhase::GameOver => menu::render_game_over_menu(
                    frame,
                    full,
                    snapshot.score,
                    snapshot.level,
                    records,
                    &theme,
                ),
                SessionPhase::Escaped => menu::render_escaped_menu(frame, full, records, &theme),
                _ => {}
            }
        })?;

        if snapshot.phase != last_phase {
            if matches!(snapshot.phase, SessionPhase::GameOver | SessionPhase::Escaped) {
                if snapshot.phase == SessionPhase::Escaped {
                    records.escapes += 1;
                }
                records.high_score = records.high_score.max(snapshot.score);
                if let Err(error) = score::save_records(records) {
                    eprintln!("Failed to save records: {error}");
                }
            }
            last_phase = snapshot.phase;
        }

        match input::poll_input(Duration::from_millis(16))? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Confirm) => {
                if matches!(
                    snapshot.phase,
                    SessionPhase::Inactive | SessionPhase::GameOver | SessionPhase::Escaped
                ) {
                    let restart_ms = u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX);
                    session.start(restart_ms);
                }
            }
            Some(GameInput::Direction(direction)) => session.submit_direction(direction),
            None => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use self_aware_snake::config::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

    use super::Cli;

    #[test]
    fn defaults_parse_to_the_standard_grid() {
        let cli = Cli::try_parse_from(["self-aware-snake"]).expect("defaults parse");

        assert_eq!(cli.width, DEFAULT_GRID_WIDTH);
        assert_eq!(cli.height, DEFAULT_GRID_HEIGHT);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn rejects_grids_too_small_for_the_starting_body() {
        assert!(Cli::try_parse_from(["self-aware-snake", "--width", "4"]).is_err());
        assert!(Cli::try_parse_from(["self-aware-snake", "--height", "1"]).is_err());
        assert!(Cli::try_parse_from(["self-aware-snake", "--width", "0"]).is_err());
    }

    #[test]
    fn boundary_grid_is_accepted() {
        let cli = Cli::try_parse_from(["self-aware-snake", "--width", "10", "--height", "10"])
            .expect("smallest playable grid parses");

        assert_eq!(cli.width, 10);
        assert_eq!(cli.height, 10);
    }
}
