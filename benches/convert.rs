use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geocell::*;

fn fixed_latlng() -> LatLng {
  LatLng::from_degrees(37.7749, -122.4194) // San Francisco
}

fn fixed_cell_res5() -> CellIndex {
  CellIndex(0x85283473fffffff)
}

fn fixed_cell_res10() -> CellIndex {
  CellIndex(0x8a2830828767fff)
}

fn bench_latlng_to_cell(c: &mut Criterion) {
  let geo = fixed_latlng();
  let mut group = c.benchmark_group("latlng_to_cell");
  for res in [0, 5, 10, 15] {
    group.bench_with_input(format!("res_{res}"), &res, |b, &r| {
      b.iter(|| latlng_to_cell(black_box(&geo), black_box(r)));
    });
  }
  group.finish();
}

fn bench_cell_to_latlng(c: &mut Criterion) {
  let pentagon = CellIndex(0x85080003fffffff); // base cell 4 center child
  c.benchmark_group("cell_to_latlng")
    .bench_function("res_5", |b| b.iter(|| cell_to_latlng(black_box(fixed_cell_res5()))))
    .bench_function("res_10", |b| b.iter(|| cell_to_latlng(black_box(fixed_cell_res10()))))
    .bench_function("pentagon_res_5", |b| b.iter(|| cell_to_latlng(black_box(pentagon))));
}

fn bench_is_valid(c: &mut Criterion) {
  let valid = fixed_cell_res10();
  let invalid = CellIndex(0x05283473fffffff);
  c.benchmark_group("is_valid")
    .bench_function("valid", |b| b.iter(|| black_box(valid).is_valid()))
    .bench_function("invalid_mode", |b| b.iter(|| black_box(invalid).is_valid()));
}

fn bench_children(c: &mut Criterion) {
  let cell = fixed_cell_res5();
  let mut group = c.benchmark_group("cell_to_children");
  for child_res in [6, 8] {
    group.bench_with_input(format!("res_5_to_{child_res}"), &child_res, |b, &r| {
      b.iter(|| cell_to_children(black_box(cell), black_box(r)));
    });
  }
  group.finish();
}

criterion_group!(
  convert_benches,
  bench_latlng_to_cell,
  bench_cell_to_latlng,
  bench_is_valid,
  bench_children
);
criterion_main!(convert_benches);
