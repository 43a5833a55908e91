//! Per-frame camera path: input application and view matrix composition.
#![allow(missing_docs, unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flycam::camera::{Camera, CameraController, Orientation};
use flycam::input::{FrameInput, KeyAction};
use glam::Vec3;

fn camera() -> Camera {
    Camera::new(
        45.0,
        25.0,
        Vec3::new(0.0, 0.0, 10.0),
        Orientation::new(90.0, 0.0, 0.0),
    )
}

fn direction_benchmark(c: &mut Criterion) {
    let orientation = Orientation::new(37.0, -12.0, 0.0);
    c.bench_function("orientation_to_direction", |b| {
        b.iter(|| black_box(orientation).to_direction())
    });
}

fn view_matrix_benchmark(c: &mut Criterion) {
    let cam = camera();
    c.bench_function("view_matrix", |b| {
        b.iter(|| black_box(&cam).view_matrix())
    });
}

fn controller_benchmark(c: &mut Criterion) {
    let controller = CameraController::default();
    let frame = FrameInput::new(1.0 / 60.0)
        .with_held(KeyAction::MoveForward)
        .with_held(KeyAction::YawRight)
        .with_cursor_delta(3.0, -2.0)
        .with_scroll(0.5);

    c.bench_function("controller_apply", |b| {
        let mut cam = camera();
        b.iter(|| controller.apply(black_box(&mut cam), black_box(&frame)))
    });
}

criterion_group!(
    benches,
    direction_benchmark,
    view_matrix_benchmark,
    controller_benchmark
);
criterion_main!(benches);
