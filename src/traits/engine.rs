use glam::Vec3;

use crate::error::EngineFailure;
use crate::loaders::FontFace;
use crate::types::{
    CameraDesc, Color, GeometryDesc, LightDesc, MaterialDesc, MirrorDesc, Rotation, TextDesc,
};

/// Opaque reference to a renderable object owned by the render engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(u64);

impl MeshHandle {
    /// Issued by engines when a mesh is created.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw engine-side id, for diagnostics.
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Capability surface of the external 3D engine.
///
/// The core only describes the scene; geometry construction, text
/// tessellation, reflection, and camera projection all live behind this
/// trait.
pub trait RenderEngine {
    /// Create a mesh from a geometry and material description.
    ///
    /// Returns `None` when the engine refuses the configuration.
    fn create_mesh(
        &mut self,
        geometry: &GeometryDesc,
        material: &MaterialDesc,
    ) -> Option<MeshHandle>;

    /// Write a world-space position onto a mesh.
    fn set_position(&mut self, mesh: MeshHandle, position: Vec3);

    /// Write an orientation onto a mesh.
    fn set_rotation(&mut self, mesh: MeshHandle, rotation: Rotation);

    /// Set the scene clear color.
    fn set_background(&mut self, color: Color);

    /// Install a light source.
    fn add_light(&mut self, light: &LightDesc);

    /// Install the reflective ground disc.
    fn set_mirror(&mut self, mirror: &MirrorDesc);

    /// Install the extruded title text, shaped with the given font face.
    fn set_text(&mut self, text: &TextDesc, font: &FontFace);

    /// Draw one frame with the given camera over the engine-held scene state.
    fn render_frame(&mut self, camera: &CameraDesc) -> Result<(), EngineFailure>;
}
