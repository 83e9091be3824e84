use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::snake::{
    place_food, BotController, Collaborators, GridBounds, Occupancy, SnakeSession, SnakeSettings,
    TickOutcome,
};

fn crowded_occupancy(bounds: &GridBounds) -> Occupancy {
    // Everything except the last column.
    let half = bounds.half_extent();
    bounds.cells().filter(|c| c.x != half).collect()
}

fn bench_place_food_crowded(c: &mut Criterion) {
    let bounds = GridBounds::new(50);
    let occupied = crowded_occupancy(&bounds);
    let mut rng = SessionRng::new(42);

    c.bench_function("place_food_crowded_51x51", |b| {
        b.iter(|| place_food(black_box(&bounds), black_box(&occupied), &mut rng))
    });
}

fn run_autopilot_session(seed: u64) -> u64 {
    let settings = SnakeSettings {
        grid_size: 20,
        ..SnakeSettings::default()
    };
    let interval = settings.move_interval();
    let Ok(mut session) = SnakeSession::new(&settings, SessionRng::new(seed), Collaborators::silent()) else {
        return 0;
    };

    for _ in 0..5_000 {
        if let Some(direction) = BotController::calculate_move(&session) {
            session.set_direction(direction);
        }
        if let TickOutcome::Ended(_) = session.tick(interval) {
            break;
        }
    }
    session.moves()
}

fn bench_autopilot_session(c: &mut Criterion) {
    c.bench_function("autopilot_session_21x21", |b| {
        b.iter(|| run_autopilot_session(black_box(7)))
    });
}

criterion_group!(benches, bench_place_food_crowded, bench_autopilot_session);
criterion_main!(benches);
