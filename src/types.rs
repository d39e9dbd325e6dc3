use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Mesh orientation around the x and y axes, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

impl Rotation {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Wrap both axes into [0, 2π).
    pub fn wrapped(self) -> Self {
        use std::f32::consts::TAU;
        Self {
            x: self.x.rem_euclid(TAU),
            y: self.y.rem_euclid(TAU),
        }
    }
}

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    /// Build from a 0xRRGGBB literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }
}

/// Primitive geometry description, tessellated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GeometryDesc {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cone {
        radius: f32,
        height: f32,
    },
}

/// Surface description applied to a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MaterialDesc {
    Lambert { color: Color },
}

impl MaterialDesc {
    pub const fn lambert(color: Color) -> Self {
        Self::Lambert { color }
    }
}

/// Light source description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LightDesc {
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
    Ambient {
        color: Color,
        intensity: f32,
    },
}

/// Reflective ground disc lying in the xz plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MirrorDesc {
    pub radius: f32,
    pub segments: u32,
    pub color: Color,
    pub clip_bias: f32,
}

/// Bevel profile for extruded text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BevelDesc {
    pub enabled: bool,
    pub thickness: f32,
    pub size: f32,
    pub offset: f32,
    pub segments: u32,
}

/// Extruded title text, shaped from a loaded font face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDesc {
    pub content: String,
    /// Asset name of the font face to shape the content with.
    pub font: String,
    pub size: f32,
    pub depth: f32,
    pub curve_segments: u32,
    pub bevel: BevelDesc,
    pub position: Vec3,
}

/// Perspective camera description; projection math stays in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraDesc {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub look_at: Vec3,
}
