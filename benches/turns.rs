use criterion::*;
use geo::{LineString, MultiLineString, Rect};

#[path = "utils/random.rs"]
mod random;
use geo_turns::{
    AllPairs, CandidatePairs, Category, NoInterrupt, RTreePairs, Turn, TurnConfig, TurnGenerator,
    TurnGeometry, TurnOrder,
};
use rand::thread_rng;
use random::*;

fn turns_with<G, P>(g1: &G, g2: &G, pairs: &P) -> Vec<Turn<f64>>
where
    G: TurnGeometry<f64>,
    P: CandidatePairs<f64>,
{
    let mut turns = vec![];
    TurnGenerator::new(TurnConfig::default()).get_turns(g1, g2, pairs, &mut turns, &mut NoInterrupt);
    turns
}

fn random_segments(count: usize) -> MultiLineString<f64> {
    let bounds = Rect::new([0., 0.], [1024., 1024.]);
    let mut rng = thread_rng();
    (0..count)
        .map(|_| {
            let line = uniform_line(&mut rng, bounds);
            LineString::from(vec![line.start, line.end])
        })
        .collect()
}

fn uniform_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random segments");
    for count in [128usize, 512, 2048].iter().copied() {
        let m1 = random_segments(count);
        let m2 = random_segments(count);

        group.bench_with_input(BenchmarkId::new("Brute-Force", count), &count, |b, _| {
            b.iter(|| black_box(turns_with(&m1, &m2, &AllPairs)))
        });
        group.bench_with_input(BenchmarkId::new("R-Tree", count), &count, |b, _| {
            b.iter(|| black_box(turns_with(&m1, &m2, &RTreePairs)))
        });
    }
    group.finish();
}

fn circular_polygons(c: &mut Criterion) {
    let mut group = c.benchmark_group("Circular polygons");
    for steps in [64usize, 256, 1024].iter().copied() {
        let p1 = circular_polygon(thread_rng(), steps);
        let p2 = circular_polygon(thread_rng(), steps);

        group.bench_with_input(BenchmarkId::new("Brute-Force", steps), &steps, |b, _| {
            b.iter(|| black_box(turns_with(&p1, &p2, &AllPairs)))
        });
        group.bench_with_input(BenchmarkId::new("R-Tree", steps), &steps, |b, _| {
            b.iter(|| black_box(turns_with(&p1, &p2, &RTreePairs)))
        });
    }
    group.finish();
}

fn sort_turns(c: &mut Criterion) {
    let p1 = circular_polygon(thread_rng(), 1024);
    let p2 = circular_polygon(thread_rng(), 1024);
    let turns = turns_with(&p1, &p2, &RTreePairs);
    let order = TurnOrder::for_categories(0, [Category::Areal; 2]);

    c.bench_function("Sort turns - circular polygons", |b| {
        b.iter_batched(
            || turns.clone(),
            |mut turns| {
                order.sort(&mut turns);
                turns
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(turns, circular_polygons, uniform_segments, sort_turns);
criterion_main!(turns);
