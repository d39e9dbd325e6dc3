use log::debug;

use crate::core::animated_object::AnimatedObject;
use crate::core::clock::ElapsedClock;
use crate::error::SceneError;
use crate::loaders::SceneReady;
use crate::scenes::SceneDescription;
use crate::traits::{FrameScheduler, RenderEngine};
use crate::types::CameraDesc;

/// Render-loop lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// Owns the animated objects, the camera, and the render-loop lifecycle.
///
/// One controller per scene; there is no ambient global state, so several
/// independent scenes can coexist in one process.
#[derive(Debug)]
pub struct SceneController<E: RenderEngine> {
    engine: E,
    objects: Vec<AnimatedObject>,
    camera: CameraDesc,
    clock: ElapsedClock,
    state: LoopState,
}

impl<E: RenderEngine> SceneController<E> {
    /// Stage the description on the engine and wrap the animated objects.
    ///
    /// Requires proof that asset preloading completed (`SceneReady`). The
    /// object sequence is fixed here; nothing is added or removed at
    /// runtime.
    pub fn build(
        mut engine: E,
        ready: &SceneReady,
        desc: &SceneDescription,
    ) -> Result<Self, SceneError> {
        engine.set_background(desc.background);
        for light in &desc.lights {
            engine.add_light(light);
        }
        engine.set_mirror(&desc.mirror);

        let font = ready.font(&desc.text.font).ok_or_else(|| {
            SceneError::Configuration(format!("font `{}` not loaded", desc.text.font))
        })?;
        if !font.covers(&desc.text.content) {
            return Err(SceneError::Configuration(format!(
                "font `{}` is missing glyphs for {:?}",
                desc.text.font, desc.text.content
            )));
        }
        engine.set_text(&desc.text, font);

        let mut objects = Vec::with_capacity(desc.shapes.len());
        for shape in &desc.shapes {
            let mesh = engine
                .create_mesh(&shape.geometry, &shape.material)
                .ok_or_else(|| {
                    SceneError::Configuration(format!(
                        "engine refused mesh for shape `{}`",
                        shape.name
                    ))
                })?;
            engine.set_position(mesh, shape.position);
            objects.push(AnimatedObject::new(mesh, shape.position));
        }

        debug!(
            "scene staged: {} shapes, {} lights",
            objects.len(),
            desc.lights.len()
        );

        Ok(Self {
            engine,
            objects,
            camera: desc.camera,
            clock: ElapsedClock::new(),
            state: LoopState::Stopped,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn objects(&self) -> &[AnimatedObject] {
        &self.objects
    }

    pub fn camera(&self) -> &CameraDesc {
        &self.camera
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Advance every object in sequence order, then request exactly one
    /// frame render.
    ///
    /// A draw failure is fatal; the caller is expected to stop the loop.
    pub fn tick(&mut self, elapsed_millis: f64) -> Result<(), SceneError> {
        for object in &mut self.objects {
            object.advance(elapsed_millis, &mut self.engine);
        }
        self.engine.render_frame(&self.camera)?;
        Ok(())
    }

    /// Stopped → Running; restarts the elapsed clock so the loop begins at
    /// t = 0. No-op while already running.
    pub fn start(&mut self) {
        if self.state == LoopState::Running {
            return;
        }
        self.clock.restart();
        self.state = LoopState::Running;
        debug!("render loop started");
    }

    /// Prevents future ticks; an in-flight tick completes normally.
    /// Idempotent.
    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }
        self.state = LoopState::Stopped;
        debug!("render loop stopped");
    }

    /// Start the loop and let `scheduler` drive ticks from the controller's
    /// own clock.
    ///
    /// Returns when the loop is stopped, the scheduler runs out of frames,
    /// or a tick fails; a failure leaves the controller stopped and is
    /// propagated to the caller.
    pub fn run<S: FrameScheduler>(&mut self, scheduler: &mut S) -> Result<(), SceneError> {
        self.start();

        let mut failure: Option<SceneError> = None;
        scheduler.drive(&mut || {
            if !self.is_running() {
                return false;
            }
            let elapsed = self.clock.elapsed_millis();
            match self.tick(elapsed) {
                Ok(()) => self.is_running(),
                Err(err) => {
                    failure = Some(err);
                    self.stop();
                    false
                }
            }
        });

        match failure {
            Some(err) => Err(err),
            None => {
                self.stop();
                Ok(())
            }
        }
    }
}
