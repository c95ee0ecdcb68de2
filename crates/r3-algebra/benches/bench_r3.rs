use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use r3_algebra::{LinearMap, RandomVec3, Vec3};

fn bench_r3(c: &mut Criterion) {
    let mut group = c.benchmark_group("r3");

    let data_size = 1000;
    let mut random = RandomVec3::from_seed(0, 1.0).expect("valid scale");
    let lhs: Vec<Vec3> = (0..data_size).map(|_| random.next_vec()).collect();
    let rhs: Vec<Vec3> = (0..data_size).map(|_| random.next_vec()).collect();
    let l = LinearMap::new(random.next_vec(), random.next_vec(), random.next_vec());

    group.bench_function(BenchmarkId::new("dot", data_size), |b| {
        b.iter(|| {
            for (u, v) in lhs.iter().zip(rhs.iter()) {
                std::hint::black_box(std::hint::black_box(*u).dot(*v));
            }
        })
    });

    group.bench_function(BenchmarkId::new("cross", data_size), |b| {
        b.iter(|| {
            for (u, v) in lhs.iter().zip(rhs.iter()) {
                std::hint::black_box(std::hint::black_box(*u).cross(*v));
            }
        })
    });

    group.bench_function(BenchmarkId::new("linear_map", data_size), |b| {
        b.iter(|| {
            for v in lhs.iter() {
                std::hint::black_box(l.map(std::hint::black_box(*v)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_r3);
criterion_main!(benches);
