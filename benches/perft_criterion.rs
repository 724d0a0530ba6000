use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plakychess::game_state::chess_rules::STARTING_POSITION_FEN;
use plakychess::move_generation::legal_move_generator::LegalMoveGenerator;
use plakychess::move_generation::perft::{perft_legal, perft_multi_threaded};
use plakychess::GameState;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [usize],
}

const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0";
const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "kiwipete",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "rook_endgame",
        fen: ENDGAME_FEN,
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "kiwipete",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "rook_endgame",
        fen: ENDGAME_FEN,
        expected_nodes: &[14, 191, 2812, 43_238],
    },
    BenchCase {
        name: "promotion_mess",
        fen: "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        expected_nodes: &[6, 264, 9467],
    },
    BenchCase {
        name: "discovered_checks",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        expected_nodes: &[44, 1486, 62_379],
    },
];

fn standard_suite_requested() -> bool {
    matches!(std::env::var("PLAKYCHESS_BENCH_SUITE"), Ok(value) if value.eq_ignore_ascii_case("standard"))
}

fn selected_cases() -> &'static [BenchCase] {
    if standard_suite_requested() {
        CASES_STANDARD
    } else {
        CASES_QUICK
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite_name = if standard_suite_requested() { "standard" } else { "quick" };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before timing.
            let warmup = perft_legal(&game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft_legal(black_box(&game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_perft_threaded(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_threaded");
    group.sample_size(10);

    let game = GameState::from_fen(STARTING_POSITION_FEN).expect("benchmark FEN should parse");
    let generator = Arc::new(LegalMoveGenerator);

    group.throughput(Throughput::Elements(8902));
    group.bench_function("startpos_d3", |b| {
        b.iter(|| {
            let count = perft_multi_threaded(generator.clone(), black_box(&game), black_box(3))
                .expect("threaded perft should run");
            assert_eq!(count.nodes, 8902);
            black_box(count.nodes)
        });
    });

    group.finish();
}

criterion_group!(perft_benches, bench_perft, bench_perft_threaded);
criterion_main!(perft_benches);
