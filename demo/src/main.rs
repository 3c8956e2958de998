use linmath::math::*;
use linmath::shape::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

struct State {
    transform: Transform,
    view: Mat44,
    projection: Mat44,
    viewport: Vec4,
    tick: i32,
}

fn log_matrix(name: &str, m: &Mat44) {
    for row in 0..4 {
        info!("{name}[{row}] = {:>9.4} {:>9.4} {:>9.4} {:>9.4}", m[(row, 0)], m[(row, 1)], m[(row, 2)], m[(row, 3)]);
    }
}

fn fixtures() {
    let m22 = Mat22([5.0, 2.0, -7.0, -3.0]);
    info!(det = m22.determinant(), inverse = ?m22.inverse(), "2x2");

    let m33 = Mat33([1.0, 2.0, -1.0, 2.0, 1.0, 2.0, -1.0, 2.0, 1.0]);
    info!(det = m33.determinant(), inverse = ?m33.try_inverse(), "3x3");

    let m44 = Mat44([
        1.0, 1.0, 1.0, -1.0, //
        1.0, 1.0, -1.0, 1.0, //
        1.0, -1.0, 1.0, 1.0, //
        -1.0, 1.0, 1.0, 1.0,
    ]);
    info!(det = m44.determinant(), "4x4");
    if let (inverse, true) = m44.inverse() {
        log_matrix("inverse", &inverse);
    }

    let (_, invertible) = Mat44::splat(1.0).inverse();
    if !invertible {
        warn!("splat(1.0) is singular, inverse left the matrix as is");
    }
}

fn step(state: &mut State) {
    state.transform.rotation = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), radians(15.0 * state.tick as f32));
    if state.transform.update() {
        let p = Vec3::new(1.0, 0.0, 0.0).as_point4() * *state.transform.matrix();
        info!(tick = state.tick, x = p.x, y = p.y, z = p.z, "rotated point");
    }
    state.tick += 1;
}

// RUST_LOG wins as a whole, including its global level; "info" otherwise
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new("info"),
    }
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    fixtures();

    let mut state = State {
        transform: Transform::new(Vec3::new(1.0, 0.0, 0.0), Quat::identity(), Vec3::splat(2.0)),
        view: Mat44::translate(Vec3::new(0.0, 0.0, -10.0)),
        projection: Mat44::perspective(radians(60.0), 16.0 / 9.0, 0.1, 100.0),
        viewport: Vec4::new(0.0, 0.0, 1280.0, 720.0),
        tick: 0,
    };

    for _ in 0..6 {
        step(&mut state);
    }
    state.transform.set_static(true);
    step(&mut state);
    log_matrix("model", state.transform.matrix());

    let center = Vec3::new(state.viewport.z / 2.0, state.viewport.w / 2.0, 0.0);
    let near = Mat44::unproject(center, &state.view, &state.projection, state.viewport)?;
    let far = Mat44::unproject(Vec3::new(center.x, center.y, 1.0), &state.view, &state.projection, state.viewport)?;
    info!(?near, ?far, "picking ray through the screen center");

    let a = Circle::from_xyz(0.0, 0.0, 1.0);
    let b = Circle::from_xyz(1.5, 0.0, 1.0);
    let r = Rect::new(0.0, 0.0, 2.0, 2.0) * 0.5;
    info!(circles = a.intersects(&b), rect_contains_origin = r.contains_point(Vec2::ZERO), "shapes");

    Ok(())
}
