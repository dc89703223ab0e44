use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use greyfilt_image::Image;
use greyfilt_imgproc::filter::{box_blur, correlate, kernels, sharpen, sobel_edges};

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filters");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        let image_size = [*width, *height].into();
        let image_data = (0..width * height).map(|i| (i % 256) as u8).collect();
        let image = Image::<u8>::new(image_size, image_data).unwrap();

        let parameter_string = format!("{}x{}", width, height);

        group.bench_with_input(
            BenchmarkId::new("sobel_edges", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(sobel_edges(i))),
        );

        for kernel_size in [3, 5, 9].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * *kernel_size * *kernel_size) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);
            let kernel = kernels::box_blur_kernel_2d(*kernel_size).unwrap();

            group.bench_with_input(
                BenchmarkId::new("correlate", &parameter_string),
                &(&image, &kernel),
                |b, i| b.iter(|| black_box(correlate(i.0, i.1))),
            );

            group.bench_with_input(
                BenchmarkId::new("box_blur", &parameter_string),
                &image,
                |b, i| b.iter(|| black_box(box_blur(i, *kernel_size))),
            );

            group.bench_with_input(
                BenchmarkId::new("sharpen", &parameter_string),
                &image,
                |b, i| b.iter(|| black_box(sharpen(i, *kernel_size))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
