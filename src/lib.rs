pub mod cli;
pub mod core;
pub mod error;
pub mod loaders;
pub mod scenes;
pub mod traits;
pub mod types;

pub use self::core::{
    AnimatedObject, ElapsedClock, FixedStepScheduler, HeadlessEngine, LoopState, ManualScheduler,
    SceneController, BOB_FREQUENCY, SPIN_STEP,
};
pub use error::{EngineFailure, SceneError};
pub use loaders::{AssetManifest, FontFace, SceneReady};
pub use scenes::{showcase_scene, SceneDescription, ShapeDesc};
pub use traits::{FrameScheduler, MeshHandle, RenderEngine};
