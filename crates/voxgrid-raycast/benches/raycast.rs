use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use voxgrid_core::{BlockId, WorldPos};
use voxgrid_raycast::raycast;
use voxgrid_volume::VoxelVolume;

fn terrain() -> VoxelVolume {
    let mut volume = VoxelVolume::with_origin(64, 32, 64, -32, -16, -32).unwrap();
    volume
        .fill(WorldPos::new(-32, -16, -32), WorldPos::new(31, -9, 31), BlockId(1))
        .unwrap();
    volume
}

fn bench_raycast(c: &mut Criterion) {
    let volume = terrain();
    let eye = Vec3::new(0.5, 4.5, 0.5);

    c.bench_function("raycast_hit_floor", |b| {
        b.iter(|| raycast(&volume, black_box(eye), black_box(Vec3::new(0.3, -1.0, 0.2))));
    });

    c.bench_function("raycast_miss_sky", |b| {
        b.iter(|| raycast(&volume, black_box(eye), black_box(Vec3::new(0.3, 1.0, 0.2))));
    });

    c.bench_function("raycast_grazing", |b| {
        b.iter(|| raycast(&volume, black_box(eye), black_box(Vec3::new(1.0, -0.05, 0.7))));
    });
}

criterion_group!(benches, bench_raycast);
criterion_main!(benches);
