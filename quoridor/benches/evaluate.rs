use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quoridor::{Coordinate, GameState, Player, Wall};

fn walled_board() -> GameState {
    let mut game_state = GameState::new(9).unwrap();

    game_state
        .place_wall(&Wall::horizontal(Coordinate::new(3, 3)))
        .unwrap();
    game_state
        .place_wall(&Wall::vertical(Coordinate::new(4, 5)))
        .unwrap();
    game_state
        .place_wall(&Wall::horizontal(Coordinate::new(5, 0)))
        .unwrap();

    game_state
}

fn bench_goal_distance(c: &mut Criterion) {
    let game_state = walled_board();
    let view = game_state.graph().view();
    let source = game_state.player(Player::One).location();

    c.bench_function("goal_distance 9x9", |b| {
        b.iter(|| view.goal_distance(black_box(source).into(), Player::One))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let game_state = walled_board();

    c.bench_function("evaluate 9x9", |b| {
        b.iter(|| black_box(&game_state).evaluate(Player::One))
    });
}

fn bench_evaluate_par(c: &mut Criterion) {
    let game_state = walled_board();

    c.bench_function("evaluate_par 9x9", |b| {
        b.iter(|| black_box(&game_state).evaluate_par(Player::One))
    });
}

criterion_group!(benches, bench_goal_distance, bench_evaluate, bench_evaluate_par);
criterion_main!(benches);
