use self_aware_snake::config::{GridSize, WorldConfig};
use self_aware_snake::food::SpecialFood;
use self_aware_snake::input::Direction;
use self_aware_snake::rng::{ScriptedRandom, SeededRandom};
use self_aware_snake::session::{GameSession, SessionPhase, Snapshot};
use self_aware_snake::snake::Position;

/// Fallback value that fails every default chance roll.
const QUIET: f64 = 0.99;

/// Draw 315/600 lands regular food on cell (15, 10) of the 30×20 grid.
const FOOD_AT_15_10: f64 = 0.525;

fn started_session(script: Vec<f64>) -> GameSession {
    let mut session = GameSession::new(
        WorldConfig::default(),
        Box::new(ScriptedRandom::new(script, QUIET)),
    );
    session.start(0);
    session
}

#[test]
fn eight_ticks_right_collect_the_first_food() {
    // Spec walk-through: 30×20 grid, snake [(7,10),(6,10),(5,10)] heading
    // RIGHT, food at (15,10).
    let mut session = started_session(vec![FOOD_AT_15_10]);
    assert_eq!(session.food, Position { x: 15, y: 10 });
    assert_eq!(
        session.snake.segments().copied().collect::<Vec<_>>(),
        vec![
            Position { x: 7, y: 10 },
            Position { x: 6, y: 10 },
            Position { x: 5, y: 10 },
        ]
    );

    let mut snapshot = session.tick(100);
    for tick in 2..=8u64 {
        snapshot = session.tick(tick * 100);
    }

    assert_eq!(snapshot.segments[0], Position { x: 15, y: 10 });
    assert_eq!(snapshot.score, 10);
    assert_eq!(snapshot.segments.len(), 4);
    assert_ne!(snapshot.food, Position { x: 15, y: 10 });
    assert!(
        !snapshot.segments.contains(&snapshot.food),
        "fresh food must not land on the snake"
    );
}

#[test]
fn stepping_past_the_right_wall_ends_an_unaware_game() {
    let mut session = started_session(vec![FOOD_AT_15_10]);

    // 22 rightward ticks put the head on the last column (x = 29), having
    // eaten the food at (15,10) along the way.
    let mut now = 0;
    for _ in 0..22 {
        now += 100;
        session.tick(now);
    }
    assert_eq!(session.snake.head(), Position { x: 29, y: 10 });
    assert_eq!(session.phase(), SessionPhase::Active);

    // One more step crosses the wall.
    let snapshot = session.tick(now + 100);

    assert_eq!(snapshot.phase, SessionPhase::GameOver);
    assert!(snapshot.message.contains("10"), "message carries the final score");
}

#[test]
fn snake_length_changes_only_on_regular_food() {
    let mut session = started_session(vec![FOOD_AT_15_10]);

    let mut now = 0;
    let mut previous_len = session.snake.len();
    let mut previous_score = 0;
    for _ in 0..20 {
        now += 100;
        let snapshot = session.tick(now);
        if snapshot.phase != SessionPhase::Active {
            break;
        }

        if snapshot.score > previous_score {
            assert_eq!(snapshot.segments.len(), previous_len + 1);
        } else {
            assert_eq!(snapshot.segments.len(), previous_len);
        }
        previous_len = snapshot.segments.len();
        previous_score = snapshot.score;
    }
}

#[test]
fn uncollected_awareness_food_expires_exactly_on_schedule() {
    let config = WorldConfig {
        special_food_lifetime_ticks: 5,
        ..WorldConfig::default()
    };
    let mut session = GameSession::new(config, Box::new(ScriptedRandom::constant(QUIET)));
    session.start(0);

    // Planted at tick 0, far from the snake's path.
    session.special_food = Some(SpecialFood::new(Position { x: 0, y: 19 }));

    for tick in 1..=5u64 {
        let snapshot = session.tick(tick * 100);
        assert!(
            snapshot.special_food.is_some(),
            "must still be live at tick {tick}"
        );
    }

    let snapshot = session.tick(600);
    assert!(snapshot.special_food.is_none(), "removed exactly at tick 6");
}

#[test]
fn identical_seeds_and_inputs_replay_identically() {
    let run = || -> Vec<Snapshot> {
        let mut session = GameSession::new(
            WorldConfig::default(),
            Box::new(SeededRandom::from_seed(99)),
        );
        session.start(0);

        let mut snapshots = Vec::new();
        let mut now = 0;
        for tick in 1..=120u64 {
            match tick {
                10 => session.submit_direction(Direction::Up),
                20 => session.submit_direction(Direction::Left),
                30 => session.submit_direction(Direction::Down),
                40 => session.submit_direction(Direction::Right),
                _ => {}
            }
            now += 100;
            snapshots.push(session.tick(now));
        }
        snapshots
    };

    assert_eq!(run(), run());
}

#[test]
fn awareness_is_monotone_until_restart() {
    let mut session = GameSession::new(
        WorldConfig {
            grid: GridSize {
                width: 12,
                height: 12,
            },
            ..WorldConfig::default()
        },
        Box::new(SeededRandom::from_seed(7)),
    );
    session.start(0);

    let turns = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
    let mut now = 0;
    let mut previous_awareness = 0;
    for tick in 0..400u64 {
        session.submit_direction(turns[(tick / 4) as usize % turns.len()]);
        now += 100;
        let snapshot = session.tick(now);

        assert!(snapshot.awareness_percent >= previous_awareness);
        previous_awareness = snapshot.awareness_percent;

        if matches!(snapshot.phase, SessionPhase::GameOver | SessionPhase::Escaped) {
            break;
        }
    }

    // A restart is the only thing that resets awareness.
    session.start(now + 100);
    assert_eq!(session.snapshot().awareness_percent, 0);
}
