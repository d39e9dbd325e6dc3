use glam::Vec3;
use log::debug;

use crate::error::EngineFailure;
use crate::loaders::FontFace;
use crate::traits::{MeshHandle, RenderEngine};
use crate::types::{
    CameraDesc, Color, GeometryDesc, LightDesc, MaterialDesc, MirrorDesc, Rotation, TextDesc,
};

/// Engine-side record of one mesh.
#[derive(Debug, Clone)]
pub struct MeshState {
    pub geometry: GeometryDesc,
    pub material: MaterialDesc,
    pub position: Vec3,
    pub rotation: Rotation,
}

/// A `RenderEngine` that keeps scene state in plain memory and draws
/// nothing.
///
/// Backs the demo binary on hosts without a rendering surface and lets
/// tests observe exactly what the core wrote to the engine.
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    meshes: Vec<MeshState>,
    background: Option<Color>,
    lights: Vec<LightDesc>,
    mirror: Option<MirrorDesc>,
    text: Option<(TextDesc, String)>,
    frames_rendered: u64,
    fail_next_frame: bool,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `render_frame` fail, as a lost rendering surface would.
    pub fn fail_next_frame(&mut self) {
        self.fail_next_frame = true;
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Current engine-side state of a mesh.
    pub fn mesh(&self, handle: MeshHandle) -> Option<&MeshState> {
        self.meshes.get(handle.id() as usize)
    }

    pub fn position_of(&self, handle: MeshHandle) -> Option<Vec3> {
        self.mesh(handle).map(|m| m.position)
    }

    pub fn rotation_of(&self, handle: MeshHandle) -> Option<Rotation> {
        self.mesh(handle).map(|m| m.rotation)
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn lights(&self) -> &[LightDesc] {
        &self.lights
    }

    pub fn mirror(&self) -> Option<&MirrorDesc> {
        self.mirror.as_ref()
    }

    /// Installed title text and the family name it was shaped with.
    pub fn text(&self) -> Option<(&TextDesc, &str)> {
        self.text.as_ref().map(|(desc, family)| (desc, family.as_str()))
    }
}

impl RenderEngine for HeadlessEngine {
    fn create_mesh(
        &mut self,
        geometry: &GeometryDesc,
        material: &MaterialDesc,
    ) -> Option<MeshHandle> {
        let handle = MeshHandle::new(self.meshes.len() as u64);
        self.meshes.push(MeshState {
            geometry: *geometry,
            material: *material,
            position: Vec3::ZERO,
            rotation: Rotation::ZERO,
        });
        debug!("mesh {} created: {:?}", handle.id(), geometry);
        Some(handle)
    }

    fn set_position(&mut self, mesh: MeshHandle, position: Vec3) {
        if let Some(state) = self.meshes.get_mut(mesh.id() as usize) {
            state.position = position;
        }
    }

    fn set_rotation(&mut self, mesh: MeshHandle, rotation: Rotation) {
        if let Some(state) = self.meshes.get_mut(mesh.id() as usize) {
            state.rotation = rotation;
        }
    }

    fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    fn add_light(&mut self, light: &LightDesc) {
        self.lights.push(*light);
    }

    fn set_mirror(&mut self, mirror: &MirrorDesc) {
        self.mirror = Some(*mirror);
    }

    fn set_text(&mut self, text: &TextDesc, font: &FontFace) {
        self.text = Some((text.clone(), font.family_name.clone()));
    }

    fn render_frame(&mut self, camera: &CameraDesc) -> Result<(), EngineFailure> {
        if self.fail_next_frame {
            self.fail_next_frame = false;
            return Err(EngineFailure::new("rendering surface lost"));
        }
        self.frames_rendered += 1;
        debug!(
            "frame {} rendered, camera at {:?}",
            self.frames_rendered, camera.position
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere() -> GeometryDesc {
        GeometryDesc::Sphere {
            radius: 0.7,
            width_segments: 32,
            height_segments: 32,
        }
    }

    fn camera() -> CameraDesc {
        CameraDesc {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 10_000.0,
            position: Vec3::new(0.0, 2.0, 10.0),
            look_at: Vec3::ZERO,
        }
    }

    #[test]
    fn handles_index_engine_state() {
        let mut engine = HeadlessEngine::new();
        let material = MaterialDesc::lambert(Color::WHITE);

        let a = engine.create_mesh(&sphere(), &material).unwrap();
        let b = engine.create_mesh(&sphere(), &material).unwrap();
        assert_ne!(a, b);

        engine.set_position(a, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(engine.position_of(a).unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(engine.position_of(b).unwrap(), Vec3::ZERO);
    }

    #[test]
    fn render_counts_frames() {
        let mut engine = HeadlessEngine::new();
        engine.render_frame(&camera()).unwrap();
        engine.render_frame(&camera()).unwrap();
        assert_eq!(engine.frames_rendered(), 2);
    }

    #[test]
    fn injected_failure_fires_once() {
        let mut engine = HeadlessEngine::new();
        engine.fail_next_frame();

        assert!(engine.render_frame(&camera()).is_err());
        assert!(engine.render_frame(&camera()).is_ok());
        assert_eq!(engine.frames_rendered(), 1);
    }

    #[test]
    fn unknown_handle_reads_as_none() {
        let engine = HeadlessEngine::new();
        assert!(engine.position_of(MeshHandle::new(7)).is_none());
    }
}
