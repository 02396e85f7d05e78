use bowyer_watson::delaunay::{self, Point, Triangulator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn generate_random_points(n: usize, width: f64, height: f64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(n as u64);
    let mut points = Vec::with_capacity(n);

    for _ in 0..n {
        let x = rng.random_range(0.0..width);
        let y = rng.random_range(0.0..height);
        points.push(Point::new(x, y));
    }

    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    points
}

fn bench_delaunay(c: &mut Criterion) {
    let mut group = c.benchmark_group("Delaunay Triangulation");

    for &n in &[100, 500, 2000] {
        group.bench_function(format!("triangulate_{}", n), |b| {
            let points = generate_random_points(n, 1000.0, 1000.0);
            b.iter(|| {
                black_box(delaunay::triangulate(&points).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_insert_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bowyer-Watson Step");

    for &n in &[100, 1000] {
        group.bench_function(format!("insert_into_{}", n), |b| {
            let points = generate_random_points(n + 1, 1000.0, 1000.0);
            let (last, rest) = points.split_last().unwrap();

            let mut seeded = Triangulator::new();
            seeded.setup_super_triangle(&points).unwrap();
            seeded.insert_points(rest).unwrap();

            b.iter(|| {
                let mut triangulator = seeded.clone();
                black_box(triangulator.insert_point(*last).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_delaunay, bench_insert_point);
criterion_main!(benches);
