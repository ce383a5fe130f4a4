use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use iris_image::{Image, ImageSize};
use iris_imgproc::geometry::{Circle, CutParams};
use iris_imgproc::parallel::ExecutionStrategy;
use iris_imgproc::warp::{iris_cut, CutOptions};

fn bench_iris_cut(c: &mut Criterion) {
    let mut group = c.benchmark_group("IrisCut");

    for (width, height) in [(640, 480), (1920, 1080), (4032, 3024)].iter() {
        let radius = (*width.min(height) as f64) * 0.4;
        group.throughput(criterion::Throughput::Elements(
            ((2.0 * radius).ceil() as u64).pow(2),
        ));

        let parameter_string = format!("{}x{}", width, height);

        let image = Image::<u8, 4>::from_size_val(
            ImageSize {
                width: *width,
                height: *height,
            },
            127,
        )
        .unwrap();

        let params = CutParams {
            iris: Circle::new(*width as f64 / 2.0, *height as f64 / 2.0, radius),
            pupil: Circle::new(*width as f64 / 2.0, *height as f64 / 2.0, radius * 0.3),
        };

        for (name, strategy) in [
            ("serial", ExecutionStrategy::Serial),
            ("par_rows", ExecutionStrategy::ParallelRows),
        ] {
            let options = CutOptions {
                strategy,
                ..Default::default()
            };
            group.bench_with_input(
                BenchmarkId::new(name, &parameter_string),
                &image,
                |b, i| b.iter(|| iris_cut(black_box(i), black_box(&params), &options)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_iris_cut);
criterion_main!(benches);
