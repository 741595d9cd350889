// benches/write_benchmark.rs
use cfmask_rs::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn benchmark_write_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_mask");
    let dir = tempfile::tempdir().unwrap();
    let scene = SceneMetadata::new(vec![SceneBand::new(
        "toa_band1",
        "toa_refl",
        "LC80470272013287LGN00_toa_band1.img",
        "LC8TOA",
        [30.0, 30.0],
    )]);
    let options = OutputOptions::new(dir.path()).with_envi_header(false);

    for side in [256usize, 1024, 4096].iter() {
        let grid = GridSize::new(*side, *side);
        let mask = vec![0u8; side * side];
        group.throughput(Throughput::Bytes((side * side) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &grid, |b, &grid| {
            b.iter(|| {
                let mut output = OutputProduct::create(&scene, grid, MaskVariant::Mask, &options).unwrap();
                output.write(&mask).unwrap();
                output.finish(&options).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_write_mask);
criterion_main!(benches);
