//! Conversion Engine Benchmarks
//!
//! Measures the per-space conversion cost and the LUT-vs-direct tradeoff on
//! the LAB path.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pigment_core::math::{lab_f, srgb_gamma_decode, srgb_gamma_encode};
use pigment_core::{ColorSpace, Hsl, Hsv, Lab, Lch, Oklab, Rgb, Xyz, convert};

/// Deterministic spread of RGB samples across the cube
fn generate_rgb_data(count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| {
            Rgb::new(
                ((i * 37) % 256) as u8,
                ((i * 73) % 256) as u8,
                ((i * 151) % 256) as u8,
            )
        })
        .collect()
}

fn bench_single_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_single");

    let rgb = Rgb::new(200, 64, 148);

    group.bench_function("rgb_to_hsl", |b| b.iter(|| Hsl::from_rgb(black_box(rgb))));
    group.bench_function("rgb_to_hsv", |b| b.iter(|| Hsv::from_rgb(black_box(rgb))));
    group.bench_function("rgb_to_lab", |b| b.iter(|| Lab::from_rgb(black_box(rgb))));
    group.bench_function("rgb_to_xyz", |b| b.iter(|| Xyz::from_rgb(black_box(rgb))));
    group.bench_function("rgb_to_oklab", |b| {
        b.iter(|| Oklab::from_rgb(black_box(rgb)))
    });
    group.bench_function("rgb_to_lch", |b| b.iter(|| Lch::from_rgb(black_box(rgb))));

    let lab = Lab::from_rgb(rgb);
    group.bench_function("lab_to_rgb", |b| b.iter(|| black_box(lab).to_rgb()));
    group.bench_function("lab_to_lch_direct", |b| {
        b.iter(|| Lch::from_lab(black_box(&lab)))
    });

    group.finish();
}

fn bench_roundtrip_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip_batch");

    for size in [1000, 10000, 100000].iter() {
        let input = generate_rgb_data(*size);

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("lab", size), size, |b, _| {
            b.iter(|| {
                for rgb in &input {
                    black_box(Lab::from_rgb(*rgb).to_rgb());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("hsl", size), size, |b, _| {
            b.iter(|| {
                for rgb in &input {
                    black_box(Hsl::from_rgb(*rgb).to_rgb());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("oklab", size), size, |b, _| {
            b.iter(|| {
                for rgb in &input {
                    black_box(Oklab::from_rgb(*rgb).to_rgb());
                }
            })
        });
    }

    group.finish();
}

fn bench_lut_vs_direct(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut_vs_direct");

    let values: Vec<f64> = (0..4096).map(|i| i as f64 / 4095.0).collect();

    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("gamma_decode_direct", |b| {
        b.iter(|| {
            for v in &values {
                black_box(srgb_gamma_decode(black_box(*v)));
            }
        })
    });

    group.bench_function("gamma_encode_direct", |b| {
        b.iter(|| {
            for v in &values {
                black_box(srgb_gamma_encode(black_box(*v)));
            }
        })
    });

    group.bench_function("lab_f_direct", |b| {
        b.iter(|| {
            for v in &values {
                black_box(lab_f(black_box(*v)));
            }
        })
    });

    // LAB goes through the tables, XYZ computes directly; the spread
    // between these two is the LUT payoff
    let rgb = Rgb::new(93, 171, 44);
    group.bench_function("rgb_to_lab_lut_path", |b| {
        b.iter(|| Lab::from_rgb(black_box(rgb)))
    });
    group.bench_function("rgb_to_xyz_direct_path", |b| {
        b.iter(|| Xyz::from_rgb(black_box(rgb)))
    });

    group.finish();
}

fn bench_distance_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");

    let a = Lab::new(50.0, 20.0, -30.0);
    let b_color = Lab::new(55.0, -10.0, 15.0);

    group.bench_function("delta_e_cie76", |b| {
        b.iter(|| black_box(a).delta_e(black_box(&b_color)))
    });
    group.bench_function("delta_e_2000_simplified", |b| {
        b.iter(|| black_box(a).delta_e_2000(black_box(&b_color)))
    });

    let lch_a = Lch::from_lab(&a);
    let lch_b = Lch::from_lab(&b_color);
    group.bench_function("lch_distance", |b| {
        b.iter(|| black_box(lch_a).distance(black_box(&lch_b)))
    });

    group.finish();
}

fn bench_hub_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hub_routing");

    let hsv = Hsv::new(210.0, 0.7, 0.9);

    group.bench_function("hsv_to_lab_via_hub", |b| {
        b.iter(|| {
            let lab: Lab = convert(black_box(&hsv));
            black_box(lab)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_conversions,
    bench_roundtrip_batch,
    bench_lut_vs_direct,
    bench_distance_metrics,
    bench_hub_routing,
);

criterion_main!(benches);
