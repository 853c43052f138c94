use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::SessionRng;
use tictactoe_common::tictactoe::{
    BotInput, Difficulty, GameState, Mark, calculate_minimax_move, calculate_move,
};

fn bench_minimax_single_move_empty_board() {
    let state = GameState::new();
    black_box(calculate_minimax_move(&BotInput::from_game_state(&state)));
}

fn bench_minimax_reply_to_corner() {
    let mut state = GameState::new();
    let _ = state.apply_move(0, Mark::X);
    black_box(calculate_minimax_move(&BotInput::from_game_state(&state)));
}

fn bench_hard_self_play() {
    let mut state = GameState::new();
    let mut rng = SessionRng::new(7);

    while !state.status().is_over() {
        let input = BotInput::from_game_state(&state);
        let Some(index) = calculate_move(Difficulty::Hard, &input, &mut rng) else {
            break;
        };
        let mark = state.current_turn();
        if state.apply_move(index, mark).is_err() {
            break;
        }
    }
    black_box(state.status());
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(20);

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_minimax_single_move_empty_board)
    });

    group.bench_function("reply_to_corner", |b| b.iter(bench_minimax_reply_to_corner));

    group.bench_function("hard_self_play", |b| b.iter(bench_hard_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
