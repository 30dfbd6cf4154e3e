use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use archer_chess::actions::pending_action::{Action, ColoredAction};
use archer_chess::game_state::board::Board;
use archer_chess::game_state::chess_rules::{ARROW_SPEED, STARTING_PLACEMENT};
use archer_chess::game_state::chess_types::{CastleSide, Color, Square};
use archer_chess::resolution::action_resolver::resolve_batch;
use archer_chess::utils::board_text::parse_placement;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    placement: &'static str,
    batch: &'static [ColoredAction],
}

const fn mv(color: Color, from: (u8, u8), to: (u8, u8)) -> ColoredAction {
    ColoredAction {
        color,
        action: Action::Move {
            from: Square::new(from.0, from.1),
            to: Square::new(to.0, to.1),
        },
    }
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "opening_pushes",
        placement: STARTING_PLACEMENT,
        batch: &[
            mv(Color::White, (6, 4), (4, 4)),
            mv(Color::Black, (1, 4), (3, 4)),
        ],
    },
    BenchCase {
        name: "knight_collision",
        placement: "4k3/8/2n5/8/8/3N4/8/4K3",
        batch: &[
            mv(Color::White, (5, 3), (3, 4)),
            mv(Color::Black, (2, 2), (3, 4)),
        ],
    },
    BenchCase {
        name: "castle_and_shot",
        placement: "r3k2r/8/8/8/4B3/8/8/R3K2R",
        batch: &[
            ColoredAction {
                color: Color::White,
                action: Action::Castle {
                    side: CastleSide::Kingside,
                },
            },
            ColoredAction {
                color: Color::Black,
                action: Action::Shoot {
                    from: Square::new(0, 4),
                    target: Square::new(4, 4),
                },
            },
        ],
    },
];

fn bench_resolve_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_batch");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let board: Board = parse_placement(case.placement).expect("benchmark layout should parse");

        // Correctness guard: identical input resolves identically.
        let first = resolve_batch(&board, case.batch, ARROW_SPEED);
        assert_eq!(first, resolve_batch(&board, case.batch, ARROW_SPEED));

        group.throughput(Throughput::Elements(case.batch.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(resolve_batch(black_box(board), black_box(case.batch), ARROW_SPEED)));
        });
    }

    group.finish();
}

criterion_group!(resolver_benches, bench_resolve_batch);
criterion_main!(resolver_benches);
