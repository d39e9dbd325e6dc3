use glam::Vec3;

use crate::traits::{MeshHandle, RenderEngine};
use crate::types::Rotation;

/// Vertical bob frequency in radians per millisecond; one full cycle
/// every 2π/0.001 ≈ 6283 ms of wall time.
pub const BOB_FREQUENCY: f64 = 0.001;

/// Rotation step in radians applied to both axes on every advance.
pub const SPIN_STEP: f32 = 0.005;

/// A single animated entity: a base position plus the mesh handle it
/// exclusively owns.
#[derive(Debug)]
pub struct AnimatedObject {
    base_position: Vec3,
    mesh: MeshHandle,
    rotation: Rotation,
}

impl AnimatedObject {
    /// Wrap a freshly created mesh at its resting position.
    pub fn new(mesh: MeshHandle, base_position: Vec3) -> Self {
        Self {
            base_position,
            mesh,
            rotation: Rotation::ZERO,
        }
    }

    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    pub fn base_position(&self) -> Vec3 {
        self.base_position
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Recompute the bob and rotation for `elapsed_millis` and write both
    /// onto the mesh.
    ///
    /// The bob is keyed to wall elapsed time, so its period holds at any
    /// frame rate; the rotation advances a fixed step per call, so its
    /// angular speed follows the tick rate.
    pub fn advance<E: RenderEngine>(&mut self, elapsed_millis: f64, engine: &mut E) {
        let bob = (elapsed_millis * BOB_FREQUENCY).sin() as f32;

        self.rotation.x += SPIN_STEP;
        self.rotation.y += SPIN_STEP;
        self.rotation = self.rotation.wrapped();

        engine.set_position(
            self.mesh,
            Vec3::new(
                self.base_position.x,
                bob + self.base_position.y,
                self.base_position.z,
            ),
        );
        engine.set_rotation(self.mesh, self.rotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::headless::HeadlessEngine;
    use crate::types::{Color, GeometryDesc, MaterialDesc};

    fn unit_box(engine: &mut HeadlessEngine, base: Vec3) -> AnimatedObject {
        let mesh = engine
            .create_mesh(
                &GeometryDesc::Box {
                    width: 1.0,
                    height: 1.0,
                    depth: 1.0,
                },
                &MaterialDesc::lambert(Color::WHITE),
            )
            .unwrap();
        AnimatedObject::new(mesh, base)
    }

    #[test]
    fn vertical_offset_starts_at_base_height() {
        let mut engine = HeadlessEngine::new();
        let mut obj = unit_box(&mut engine, Vec3::new(0.0, 2.0, 0.0));

        obj.advance(0.0, &mut engine);

        let pos = engine.position_of(obj.mesh()).unwrap();
        assert!((pos.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn one_second_in_matches_sine_of_one() {
        let mut engine = HeadlessEngine::new();
        let mut obj = unit_box(&mut engine, Vec3::new(0.0, 2.0, 0.0));

        obj.advance(1000.0, &mut engine);

        let pos = engine.position_of(obj.mesh()).unwrap();
        assert!((pos.y - (1.0_f32.sin() + 2.0)).abs() < 1e-4);
        assert_eq!(obj.rotation(), Rotation::new(SPIN_STEP, SPIN_STEP));
    }

    #[test]
    fn rotation_counts_calls_not_elapsed_time() {
        let mut engine = HeadlessEngine::new();
        let mut obj = unit_box(&mut engine, Vec3::ZERO);

        // Wildly uneven timestamps; only the call count matters.
        for t in [0.0, 12.5, 2000.0, 2016.0, 9999.0] {
            obj.advance(t, &mut engine);
        }

        let r = obj.rotation();
        assert!((r.x - 5.0 * SPIN_STEP).abs() < 1e-6);
        assert!((r.y - 5.0 * SPIN_STEP).abs() < 1e-6);
    }

    #[test]
    fn rotation_stays_within_one_turn() {
        let mut engine = HeadlessEngine::new();
        let mut obj = unit_box(&mut engine, Vec3::ZERO);

        // 1300 steps of 0.005 rad exceeds 2π once.
        for _ in 0..1300 {
            obj.advance(0.0, &mut engine);
        }

        let r = obj.rotation();
        assert!(r.x < std::f32::consts::TAU);
        assert!(r.y < std::f32::consts::TAU);
        assert!(r.x > 0.0);
    }

    #[test]
    fn horizontal_coordinates_never_move() {
        let mut engine = HeadlessEngine::new();
        let mut obj = unit_box(&mut engine, Vec3::new(3.0, 2.0, -3.0));

        obj.advance(4321.0, &mut engine);

        let pos = engine.position_of(obj.mesh()).unwrap();
        assert_eq!(pos.x, 3.0);
        assert_eq!(pos.z, -3.0);
    }
}
