use log::{debug, info, trace, warn};

use crate::config::{GameConfig, SceneSettings};
use crate::core::{Clock, Countdown, FrameGate, InputManager, SceneManager};
use crate::scenes::SceneKind;
use crate::traits::{AssetLoader, HostEvent, Renderer, SceneContext};

/// Top-level orchestrator: owns the renderer, timing, scenes and input
///
/// Call [`Game::frame`] once per host redraw and [`Game::handle_event`] for
/// every host input event.
pub struct Game<R: Renderer> {
    renderer: R,
    clock: Clock,
    gate: FrameGate,
    scenes: SceneManager,
    input: InputManager,
    assets: Box<dyn AssetLoader>,
    settings: SceneSettings,
    auto_switch: Option<Countdown>,
    focused: bool,
}

impl<R: Renderer> Game<R> {
    /// Build the game and start the configured scene
    pub fn new(renderer: R, assets: Box<dyn AssetLoader>, config: &GameConfig) -> Self {
        let mut game = Self {
            renderer,
            clock: Clock::new(),
            gate: FrameGate::with_interval(config.interval()),
            scenes: SceneManager::new(config.fade_duration),
            input: InputManager::new(),
            assets,
            settings: config.scenes.clone(),
            auto_switch: config.auto_switch_secs.map(Countdown::new),
            focused: true,
        };
        game.set_scene(config.start_scene);
        game
    }

    /// Switch to a fresh instance of `kind`
    pub fn set_scene(&mut self, kind: SceneKind) {
        let scene = kind.build(&self.settings);
        let mut ctx = SceneContext::new(&mut self.renderer, &self.input, self.assets.as_ref());
        self.scenes.set_scene(scene, &mut ctx);
        self.renderer.set_opacity(self.scenes.opacity());

        if let Some(countdown) = self.auto_switch.as_mut() {
            countdown.start();
        }
    }

    /// Run one host frame with real elapsed time
    pub fn frame(&mut self) -> bool {
        let elapsed = self.clock.tick();
        self.advance(elapsed)
    }

    /// Run one host frame with the given elapsed seconds
    ///
    /// Returns true when the fixed-step gate opened. The scene is then updated
    /// and a frame presented, cleared when the scene has nothing to draw.
    pub fn advance(&mut self, elapsed: f32) -> bool {
        {
            let mut ctx =
                SceneContext::new(&mut self.renderer, &self.input, self.assets.as_ref());
            self.scenes.tick(elapsed, &mut ctx);
        }
        self.renderer.set_opacity(self.scenes.opacity());

        if self
            .auto_switch
            .as_mut()
            .is_some_and(|countdown| countdown.tick(elapsed))
        {
            let next = self.scenes.target_kind().unwrap_or_default().next();
            info!("auto-switching to {next} scene");
            self.set_scene(next);
        }

        let Some(dt) = self.gate.tick(elapsed) else {
            return false;
        };
        trace!("step dt={dt:.4}");

        let requested = {
            let mut ctx =
                SceneContext::new(&mut self.renderer, &self.input, self.assets.as_ref());
            let presented = match self.scenes.current_mut() {
                Some(scene) => {
                    scene.update(dt, &mut ctx);
                    if scene.is_initialized() {
                        scene.render(dt, &mut *ctx.renderer)
                    } else {
                        ctx.renderer.present_empty()
                    }
                }
                None => ctx.renderer.present_empty(),
            };
            if let Err(err) = presented {
                warn!("frame skipped: {err}");
            }
            ctx.take_request()
        };

        if let Some(kind) = requested {
            self.request_scene(kind);
        }
        true
    }

    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::KeyDown(key) => {
                if self.input.on_key_down(&key) {
                    trace!("key down {key:?}");
                    if let Some(kind) = SceneKind::from_shortcut(&key) {
                        self.request_scene(kind);
                    }
                }
            }
            HostEvent::KeyUp(key) => self.input.on_key_up(&key),
            HostEvent::Resized { width, height } => self.resize(width, height),
            HostEvent::Focused(true) => self.focused = true,
            HostEvent::Focused(false) => {
                if !self.input.is_empty() {
                    let held: Vec<&str> = self.input.pressed_keys().collect();
                    debug!("focus lost, releasing held keys {held:?}");
                }
                self.input.clear();
                self.focused = false;
            }
        }
    }

    /// Resize the drawable and reproject the active camera
    ///
    /// Zero-sized resizes (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            debug!("ignoring resize to {width}x{height}");
            return;
        }

        self.renderer.set_size(width, height);
        let aspect = width as f32 / height as f32;
        if let Some(camera) = self.scenes.current_mut().and_then(|scene| scene.camera_mut()) {
            camera.reproject(aspect);
        }
    }

    /// Dispose the active scene before the host tears down
    pub fn shutdown(&mut self) {
        info!(
            "shutting down after {} frames in {:.1}s",
            self.clock.frames(),
            self.clock.elapsed()
        );
        self.scenes.shutdown(&mut self.renderer);
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    pub fn input(&self) -> &InputManager {
        &self.input
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Seconds banked towards the next fixed step
    pub fn pending_time(&self) -> f32 {
        self.gate.pending()
    }

    /// Seconds the host can sleep before the next fixed step is due
    pub fn until_next_step(&self) -> f32 {
        self.gate.until_next()
    }

    fn request_scene(&mut self, kind: SceneKind) {
        if self.scenes.target_kind() == Some(kind) {
            debug!("{kind} scene already targeted");
            return;
        }
        self.set_scene(kind);
    }
}
