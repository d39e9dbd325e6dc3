//! Concrete scene-loop implementations behind the seam traits.

pub mod animated_object;
pub mod clock;
pub mod headless;
pub mod scene_controller;
pub mod scheduler;

pub use animated_object::{AnimatedObject, BOB_FREQUENCY, SPIN_STEP};
pub use clock::ElapsedClock;
pub use headless::{HeadlessEngine, MeshState};
pub use scene_controller::{LoopState, SceneController};
pub use scheduler::{FixedStepScheduler, ManualScheduler};
