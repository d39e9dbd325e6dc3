//! Scene composition: declarative descriptions handed to the engine.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::{
    BevelDesc, CameraDesc, Color, GeometryDesc, LightDesc, MaterialDesc, MirrorDesc, TextDesc,
};

/// One animated primitive in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDesc {
    pub name: String,
    pub geometry: GeometryDesc,
    pub material: MaterialDesc,
    pub position: Vec3,
}

/// Everything the engine needs to stage a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub background: Color,
    pub camera: CameraDesc,
    pub lights: Vec<LightDesc>,
    pub mirror: MirrorDesc,
    pub text: TextDesc,
    pub shapes: Vec<ShapeDesc>,
}

/// The showcase composition: four floating primitives over a mirror disc,
/// one directional and one ambient light, and an extruded title.
pub fn showcase_scene() -> SceneDescription {
    let material = MaterialDesc::lambert(Color::WHITE);

    SceneDescription {
        background: Color::from_hex(0x000424),
        camera: CameraDesc {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 10_000.0,
            position: Vec3::new(0.0, 2.0, 10.0),
            look_at: Vec3::ZERO,
        },
        lights: vec![
            LightDesc::Directional {
                color: Color::WHITE,
                intensity: 0.5,
                position: Vec3::new(0.0, 1.0, 1.0),
            },
            LightDesc::Ambient {
                color: Color::from_hex(0xAAAAAA),
                intensity: 0.8,
            },
        ],
        mirror: MirrorDesc {
            radius: 40.0,
            segments: 64,
            color: Color::from_hex(0x1D0340),
            clip_bias: 0.003,
        },
        text: TextDesc {
            content: "Orbit Scene".to_string(),
            font: "title".to_string(),
            size: 1.0,
            depth: 0.5,
            curve_segments: 12,
            bevel: BevelDesc {
                enabled: true,
                thickness: 0.1,
                size: 0.1,
                offset: 0.0,
                segments: 1,
            },
            position: Vec3::new(-4.8, 0.5, 0.0),
        },
        shapes: vec![
            ShapeDesc {
                name: "sphere".to_string(),
                geometry: GeometryDesc::Sphere {
                    radius: 0.7,
                    width_segments: 32,
                    height_segments: 32,
                },
                material,
                position: Vec3::new(3.0, 2.0, -3.0),
            },
            ShapeDesc {
                name: "torus".to_string(),
                geometry: GeometryDesc::Torus {
                    radius: 1.0,
                    tube: 0.5,
                    radial_segments: 16,
                    tubular_segments: 100,
                },
                material,
                position: Vec3::new(-5.0, 3.0, -6.0),
            },
            ShapeDesc {
                name: "box".to_string(),
                geometry: GeometryDesc::Box {
                    width: 1.0,
                    height: 1.0,
                    depth: 1.0,
                },
                material,
                position: Vec3::new(-1.0, 5.0, -10.0),
            },
            ShapeDesc {
                name: "cone".to_string(),
                geometry: GeometryDesc::Cone {
                    radius: 1.0,
                    height: 3.0,
                },
                material,
                position: Vec3::new(9.0, 5.0, -10.0),
            },
        ],
    }
}
