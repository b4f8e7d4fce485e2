use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use quarry_benchmarks::run_strategy;
use quarry_harness::puzzles::scenarios::{
    scenario_peg_budgeted, scenario_slide, scenario_slide_unsolvable, scenario_word_ladder,
};
use quarry_solver::frontier::Strategy;

// ---------------------------------------------------------------------------
// End-to-end solve throughput per scenario and strategy
// ---------------------------------------------------------------------------

fn bench_solve_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_engine");
    group.sample_size(50);

    macro_rules! bench_scenario {
        ($ctor:expr) => {{
            let scenario = $ctor;
            for strategy in Strategy::ALL {
                group.bench_with_input(
                    BenchmarkId::new(scenario.name, strategy),
                    &strategy,
                    |b, &strategy| {
                        b.iter(|| run_strategy(&scenario.start, strategy, &scenario.policy));
                    },
                );
            }
        }};
    }

    bench_scenario!(scenario_slide());
    bench_scenario!(scenario_slide_unsolvable());
    bench_scenario!(scenario_word_ladder());
    bench_scenario!(scenario_peg_budgeted());

    group.finish();
}

criterion_group!(benches, bench_solve_engine);
criterion_main!(benches);
