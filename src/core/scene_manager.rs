use log::{debug, error, info};
use std::task::Poll;

use crate::scenes::SceneKind;
use crate::traits::{Renderer, Scene, SceneContext};

/// Default length of each half of a transition, in seconds
pub const DEFAULT_FADE_DURATION: f32 = 0.6;

/// Where the manager is within a scene transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// No transition running
    Idle,
    /// Old scene still live, surface dimming
    FadingOut { elapsed: f32 },
    /// New scene installed, waiting for its init to complete
    Initializing,
    /// New scene live, surface brightening
    FadingIn { elapsed: f32 },
}

/// Owns the active scene and sequences fade transitions between scenes
///
/// Driven once per host frame by [`SceneManager::tick`]. The outgoing scene is
/// always disposed before the incoming scene's `init` is polled, and there is
/// never more than one current scene.
pub struct SceneManager {
    current: Option<Box<dyn Scene>>,
    incoming: Option<Box<dyn Scene>>,
    queued: Option<Box<dyn Scene>>,
    phase: Phase,
    fade_duration: f32,
}

impl SceneManager {
    pub fn new(fade_duration: f32) -> Self {
        Self {
            current: None,
            incoming: None,
            queued: None,
            phase: Phase::Idle,
            fade_duration: fade_duration.max(0.0),
        }
    }

    /// Request a switch to `scene`
    ///
    /// Starts immediately when idle or fading in. While a fade-out or init is
    /// in flight the request waits in a single slot; a newer request replaces
    /// it and the replaced scene is dropped uninitialized.
    pub fn set_scene(&mut self, scene: Box<dyn Scene>, ctx: &mut SceneContext) {
        match self.phase {
            Phase::Idle | Phase::FadingIn { .. } => self.begin(scene, ctx),
            Phase::FadingOut { .. } | Phase::Initializing => {
                debug!("queueing {} scene until the running transition settles", scene.kind());
                if let Some(dropped) = self.queued.replace(scene) {
                    debug!("dropping superseded {} scene request", dropped.kind());
                }
            }
        }
    }

    /// Advance the transition by `elapsed` seconds of real time
    pub fn tick(&mut self, elapsed: f32, ctx: &mut SceneContext) {
        match self.phase {
            Phase::Idle => {}
            Phase::FadingOut { elapsed: t } => {
                let t = t + elapsed;
                if t >= self.fade_duration {
                    self.swap_in(ctx);
                } else {
                    self.phase = Phase::FadingOut { elapsed: t };
                }
            }
            Phase::Initializing => self.poll_init(ctx),
            Phase::FadingIn { elapsed: t } => {
                let t = t + elapsed;
                self.phase = if t >= self.fade_duration {
                    Phase::Idle
                } else {
                    Phase::FadingIn { elapsed: t }
                };
            }
        }

        if matches!(self.phase, Phase::Idle | Phase::FadingIn { .. }) {
            if let Some(next) = self.queued.take() {
                self.begin(next, ctx);
            }
        }
    }

    /// Surface brightness in [0, 1] for the current phase
    pub fn opacity(&self) -> f32 {
        let progress = |elapsed: f32| {
            if self.fade_duration > 0.0 {
                (elapsed / self.fade_duration).clamp(0.0, 1.0)
            } else {
                1.0
            }
        };

        match self.phase {
            Phase::Idle => 1.0,
            Phase::FadingOut { elapsed } => 1.0 - progress(elapsed),
            Phase::Initializing => 0.0,
            Phase::FadingIn { elapsed } => progress(elapsed),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle || self.queued.is_some()
    }

    pub fn current(&self) -> Option<&dyn Scene> {
        self.current.as_deref()
    }

    pub fn current_mut(&mut self) -> Option<&mut (dyn Scene + 'static)> {
        self.current.as_deref_mut()
    }

    pub fn current_kind(&self) -> Option<SceneKind> {
        self.current.as_ref().map(|scene| scene.kind())
    }

    /// Kind that will be current once all pending work completes
    pub fn target_kind(&self) -> Option<SceneKind> {
        self.queued
            .as_ref()
            .or(self.incoming.as_ref())
            .or(self.current.as_ref())
            .map(|scene| scene.kind())
    }

    /// Dispose everything; the manager is empty afterwards
    pub fn shutdown(&mut self, renderer: &mut dyn Renderer) {
        self.queued = None;
        for mut scene in [self.current.take(), self.incoming.take()].into_iter().flatten() {
            info!("disposing {} scene", scene.kind());
            scene.dispose(renderer);
        }
        self.phase = Phase::Idle;
    }

    fn begin(&mut self, scene: Box<dyn Scene>, ctx: &mut SceneContext) {
        info!("switching to {} scene", scene.kind());

        if self.current.is_some() {
            // Reverse a partial fade-in from the brightness already reached
            let elapsed = (1.0 - self.opacity()) * self.fade_duration;
            self.incoming = Some(scene);
            self.phase = Phase::FadingOut { elapsed };
            if elapsed >= self.fade_duration {
                self.swap_in(ctx);
            }
        } else {
            self.current = Some(scene);
            self.poll_init(ctx);
        }
    }

    fn swap_in(&mut self, ctx: &mut SceneContext) {
        if let Some(mut old) = self.current.take() {
            old.dispose(ctx.renderer);
            debug!("disposed {} scene", old.kind());
        }
        self.current = self.incoming.take();
        self.poll_init(ctx);
    }

    fn poll_init(&mut self, ctx: &mut SceneContext) {
        let Some(scene) = self.current.as_mut() else {
            self.phase = Phase::Idle;
            return;
        };

        self.phase = match scene.init(ctx) {
            Poll::Pending => Phase::Initializing,
            Poll::Ready(result) => {
                match result {
                    Ok(()) => info!("{} scene ready", scene.kind()),
                    Err(err) => error!("failed to initialize {} scene: {err}", scene.kind()),
                }
                if self.fade_duration > 0.0 {
                    Phase::FadingIn { elapsed: 0.0 }
                } else {
                    Phase::Idle
                }
            }
        };
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new(DEFAULT_FADE_DURATION)
    }
}
