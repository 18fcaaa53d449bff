use criterion::{black_box, criterion_group, criterion_main, Criterion};
use exprgen::{
    evolution::{diversity, Challenge, EvolutionLauncher, EvolutionOptions, TargetChallenge},
    generator::Generator,
    rng::RandomNumberGenerator,
};

fn bench_evolve(c: &mut Criterion) {
    let launcher = EvolutionLauncher::for_target(100.0);

    let mut group = c.benchmark_group("evolve");
    for size in [10, 50, 200].iter() {
        let options = EvolutionOptions::builder()
            .population_size(*size)
            .num_generations(200)
            .seed(42)
            .build();
        group.bench_function(format!("evolve_population_{}", size), |b| {
            b.iter(|| {
                let result = launcher.evolve(black_box(&options), &mut options.make_rng());
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let challenge = TargetChallenge::new(100.0);
    let mut rng = RandomNumberGenerator::from_seed(7);

    let mut group = c.benchmark_group("scoring");
    for size in [10, 100, 1000].iter() {
        let population = Generator::new(3).generate_population(*size, &mut rng);
        group.bench_function(format!("fitness_and_diversity_{}", size), |b| {
            b.iter(|| {
                let total: f64 = population
                    .iter()
                    .map(|individual| challenge.score(individual).unwrap_or(0.0))
                    .sum();
                black_box((total, diversity(&population)))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evolve, bench_scoring);
criterion_main!(benches);
